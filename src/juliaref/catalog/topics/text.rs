use crate::catalog::{Category, Section, Topic};

const REGEX_DOC: &str = r#"
Regular expressions are Perl-compatible (PCRE2) and written as non-standard
string literals prefixed with `r`, so backslashes need no doubling:

    re = r"^(\d{4})-(\d{2})-(\d{2})$"
    m = match(re, "2024-02-29")
    m.captures          # ["2024", "02", "29"]

`occursin(re, s)` answers yes or no, `match` returns the first
`RegexMatch` or `nothing`, and `eachmatch` iterates over all of them. A
match exposes `match`, `captures`, `offset` and `offsets`; named groups
`(?<year>\d{4})` are read back as `m[:year]`.

Flags follow the closing quote: `i` ignores case, `m` makes `^` and `$`
match at line breaks, `s` lets `.` match newlines and `x` allows
whitespace and comments inside the pattern, e.g. `r"a+.*b+"ism`.

`replace(s, re => s"\2/\1")` rewrites matches, where the `s` prefix builds
a `SubstitutionString` whose `\N` and `\g<name>` refer to capture groups.
`split` and `eachsplit` accept a regex delimiter.
"#;

pub(super) fn regex() -> Topic {
    Topic::new("regex", "Regular Expressions", REGEX_DOC)
        .with_aliases(&["regexp", "regular-expressions"])
        .with_section(Section::flat(
            Category::Macros,
            &["@r_str", "@s_str", "@raw_str"],
        ))
        .with_section(Section::nested(
            Category::Methods,
            &[
                (
                    "Matching",
                    &[
                        "match",
                        "eachmatch",
                        "occursin",
                        "contains",
                        "startswith",
                        "endswith",
                        "findfirst",
                        "findnext",
                        "findlast",
                        "findall",
                    ],
                ),
                (
                    "Rewriting",
                    &["replace", "split", "eachsplit", "rsplit", "count"],
                ),
                ("Match objects", &["keys", "haskey", "pairs", "getindex"]),
            ],
        ))
        .with_section(Section::flat(
            Category::Types,
            &["Regex", "RegexMatch", "SubstitutionString", "SubString"],
        ))
}

const CHARS_DOC: &str = r#"
A `Char` is a single Unicode character, stored as a 32-bit value. Literals
use single quotes and accept escapes:

    'x', 'π', '\n', '∀', '\U1F600'

`codepoint(c)` gives the integer code point and `Char(n)` goes the other
way. Characters support a little arithmetic: `'a' + 1 == 'b'` and
`'z' - 'a' == 25`. They compare by code point, so `'A' < 'a'`.

Classification functions answer questions about a character: `isletter`,
`isdigit`, `isspace`, `isuppercase`, `ispunct` and friends all follow the
Unicode character categories. `uppercase`, `lowercase` and `titlecase`
convert case, and `textwidth` reports how many terminal columns a
character occupies (two for most East Asian characters, zero for
combining marks).

Indexing a `String` with a byte index returns a `Char`; only valid
character boundaries may be used, which is why iteration (`for c in s`)
or `eachindex(s)` is preferred over `1:length(s)`.
"#;

pub(super) fn chars() -> Topic {
    Topic::new("chars", "Characters", CHARS_DOC)
        .with_aliases(&["char", "characters"])
        .with_section(Section::nested(
            Category::Methods,
            &[
                (
                    "Classification",
                    &[
                        "isletter",
                        "isdigit",
                        "isxdigit",
                        "isnumeric",
                        "isspace",
                        "ispunct",
                        "isuppercase",
                        "islowercase",
                        "isascii",
                        "iscntrl",
                        "isprint",
                        "isvalid",
                    ],
                ),
                (
                    "Conversion",
                    &["codepoint", "uppercase", "lowercase", "titlecase", "string", "repr"],
                ),
                ("Measurement", &["textwidth", "ncodeunits", "sizeof"]),
            ],
        ))
        .with_section(Section::flat(Category::Modules, &["Unicode"]))
        .with_section(Section::flat(Category::Types, &["AbstractChar", "Char"]))
}

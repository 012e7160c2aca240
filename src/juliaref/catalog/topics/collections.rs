use crate::catalog::{Category, Section, Topic};

const SETS_DOC: &str = r#"
A `Set` is an unordered collection of unique elements, backed by a hash
table. Membership tests are fast regardless of size.

    s = Set([1, 2, 3])
    push!(s, 2)         # no effect, already present
    3 in s              # true
    s ∪ Set([4])        # Set([4, 2, 3, 1])

The set operations `union`, `intersect`, `setdiff` and `symdiff` have
mathematical operator spellings (`∪`, `∩`) and in-place versions ending in
`!`. `issubset` (`⊆`) and `issetequal` compare sets. These functions also
accept arrays, returning arrays in first-seen order.

`BitSet` stores small non-negative integers as a bit vector, which is far
more compact and faster than `Set{Int}` for dense integer data. Elements
of a `Set` are compared with `isequal` and hashed with `hash`, so a custom
type used as an element must define both consistently.
"#;

pub(super) fn sets() -> Topic {
    Topic::new("sets", "Sets", SETS_DOC)
        .with_aliases(&["set"])
        .with_section(Section::nested(
            Category::Methods,
            &[
                (
                    "Building",
                    &[
                        "push!",
                        "pop!",
                        "delete!",
                        "empty!",
                        "union!",
                        "intersect!",
                        "setdiff!",
                        "symdiff!",
                        "sizehint!",
                    ],
                ),
                (
                    "Set algebra",
                    &[
                        "union",
                        "intersect",
                        "setdiff",
                        "symdiff",
                        "issubset",
                        "issetequal",
                        "isdisjoint",
                        "unique",
                        "allunique",
                    ],
                ),
                ("Membership", &["in", "length", "isempty"]),
            ],
        ))
        .with_section(Section::flat(
            Category::Operators,
            &["∪", "∩", "⊆", "⊇", "⊊", "⊋", "∈", "∉", "∋", "∌"],
        ))
        .with_section(Section::flat(
            Category::Types,
            &["AbstractSet", "Set", "BitSet", "Base.IdSet"],
        ))
}

const ARRAYS_DOC: &str = r#"
`Array{T,N}` is a dense N-dimensional container; `Vector{T}` and
`Matrix{T}` are the one and two dimensional aliases. Indexing starts at 1
and storage is column-major, so the first index varies fastest in memory.

    v = [1, 2, 3]               # Vector{Int}
    A = [1 2; 3 4]              # 2×2 Matrix{Int}
    zeros(3, 2), fill(0.5, 4)
    squares = [i^2 for i in 1:10]

`A[i, j]` reads an element, `A[:, 1]` a column copy and `view(A, :, 1)` (or
`@view`) a non-copying slice. `end` inside brackets is the last index.
Vectors grow with `push!` and `append!`; `vcat` and `hcat` concatenate.

Dotted operators broadcast: `A .+ 1`, `sin.(v)`, and `@.` dots a whole
expression. Broadcasting expands singleton dimensions, so a column plus a
row gives a matrix.

Bounds checks can be removed from a hot loop with `@inbounds` once the
indices are known to be valid; iterate with `eachindex(A)` to get the
most efficient index type for any array.
"#;

pub(super) fn arrays() -> Topic {
    Topic::new("arrays", "Arrays", ARRAYS_DOC)
        .with_aliases(&["array", "vectors", "matrices"])
        .with_section(Section::flat(
            Category::Macros,
            &["@view", "@views", "@inbounds", "@.", "@boundscheck"],
        ))
        .with_section(Section::nested(
            Category::Methods,
            &[
                (
                    "Construction",
                    &[
                        "zeros",
                        "ones",
                        "fill",
                        "similar",
                        "collect",
                        "range",
                        "rand",
                        "reshape",
                        "copy",
                        "deepcopy",
                    ],
                ),
                (
                    "Shape",
                    &[
                        "size",
                        "length",
                        "ndims",
                        "axes",
                        "eachindex",
                        "eltype",
                        "vec",
                        "permutedims",
                        "transpose",
                    ],
                ),
                (
                    "Mutation",
                    &[
                        "push!",
                        "pop!",
                        "pushfirst!",
                        "popfirst!",
                        "insert!",
                        "deleteat!",
                        "append!",
                        "resize!",
                        "empty!",
                        "fill!",
                    ],
                ),
                ("Combination", &["vcat", "hcat", "hvcat", "cat", "stack"]),
                (
                    "Search and order",
                    &[
                        "sort",
                        "sort!",
                        "sortperm",
                        "reverse",
                        "findall",
                        "findfirst",
                        "argmax",
                        "argmin",
                        "maximum",
                        "minimum",
                        "extrema",
                    ],
                ),
            ],
        ))
        .with_section(Section::flat(
            Category::Operators,
            &["'", ":", "...", ".+", ".-", ".*", "./", ".^", ".=="],
        ))
        .with_section(Section::flat(
            Category::Types,
            &[
                "AbstractArray",
                "AbstractVector",
                "AbstractMatrix",
                "Array",
                "Vector",
                "Matrix",
                "BitArray",
                "BitVector",
                "SubArray",
                "UnitRange",
                "StepRange",
                "CartesianIndex",
                "CartesianIndices",
                "LinearIndices",
            ],
        ))
}

const TUPLES_DOC: &str = r#"
A tuple is a fixed-length, immutable, ordered container whose type records
the type of every element: `(1, "a", 2.0)` is a
`Tuple{Int64, String, Float64}`. A one-element tuple needs a trailing
comma, `(1,)`, and `()` is the empty tuple.

    t = (1, 2, 3)
    a, b, c = t         # destructuring
    first(t), t[end]
    f(t...)             # splat into arguments

Named tuples attach a name to each position and are indexed either way:

    nt = (x = 1, y = 2)
    nt.x, nt[2], keys(nt)

Tuples are what functions receive their arguments in, which is why they are
so cheap: small tuples of bits types live on the stack. Because they are
immutable, "changing" a tuple builds a new one, e.g. with `Base.setindex`
or `merge` for named tuples. `NTuple{N,T}` is the type of N elements of
type T, and `ntuple(f, N)` builds one from a function.
"#;

pub(super) fn tuples() -> Topic {
    Topic::new("tuples", "Tuples", TUPLES_DOC)
        .with_aliases(&["tuple", "namedtuples"])
        .with_section(Section::flat(Category::Macros, &["@NamedTuple"]))
        .with_section(Section::nested(
            Category::Methods,
            &[
                (
                    "Construction",
                    &["tuple", "ntuple", "Base.front", "Base.tail", "Base.setindex"],
                ),
                (
                    "Access",
                    &[
                        "getindex", "first", "last", "length", "keys", "values", "pairs",
                        "haskey", "get", "merge",
                    ],
                ),
            ],
        ))
        .with_section(Section::flat(Category::Operators, &["...", "=>"]))
        .with_section(Section::flat(
            Category::Types,
            &["Tuple", "NTuple", "NamedTuple", "Vararg", "Pair"],
        ))
}

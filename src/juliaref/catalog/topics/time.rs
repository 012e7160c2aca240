use crate::catalog::{Category, Section, Topic};

const DATES_DOC: &str = r#"
The `Dates` standard library provides `Date` (a day), `DateTime` (an
instant with millisecond precision) and `Time` (a time of day). None of
them carry a time zone.

    using Dates
    d = Date(2024, 2, 29)
    dt = DateTime("2024-02-29T13:45:00")
    now(), today()

Lengths of time are periods: `Year(1)`, `Month(3)`, `Day(10)`, `Hour(2)`
and so on down to `Nanosecond`. Adding a period to a date does calendar
arithmetic, so `Date(2024, 1, 31) + Month(1)` is `2024-02-29`. Subtracting
two dates gives a `Day` period. Mixed periods form a `CompoundPeriod`.

Parsing and printing use a `DateFormat`, built from a pattern string once
and reused: `df = dateformat"yyyy-mm-dd"`, then `Date("2024-02-29", df)`
and `Dates.format(d, df)`.

Accessor functions pull out fields (`year`, `month`, `dayofweek`) and
adjusters move to calendar boundaries: `firstdayofmonth(d)`, or
`tonext(d, Friday)` to reach the next Friday.
"#;

pub(super) fn dates() -> Topic {
    Topic::new("dates", "Dates and Times", DATES_DOC)
        .with_aliases(&["date", "datetime", "time"])
        .with_section(Section::flat(
            Category::Constants,
            &[
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday",
                "ISODateFormat",
                "ISODateTimeFormat",
                "ISOTimeFormat",
                "RFC1123Format",
            ],
        ))
        .with_section(Section::flat(Category::Macros, &["@dateformat_str"]))
        .with_section(Section::nested(
            Category::Methods,
            &[
                (
                    "Current time",
                    &["now", "today", "unix2datetime", "datetime2unix", "julian2datetime"],
                ),
                (
                    "Accessors",
                    &[
                        "year",
                        "month",
                        "week",
                        "day",
                        "hour",
                        "minute",
                        "second",
                        "millisecond",
                        "dayofweek",
                        "dayofyear",
                        "monthname",
                        "dayname",
                        "yearmonthday",
                        "isleapyear",
                        "daysinmonth",
                    ],
                ),
                (
                    "Adjusters",
                    &[
                        "firstdayofweek",
                        "lastdayofweek",
                        "firstdayofmonth",
                        "lastdayofmonth",
                        "firstdayofyear",
                        "lastdayofyear",
                        "tonext",
                        "toprev",
                        "tofirst",
                        "tolast",
                    ],
                ),
                ("Formatting", &["format", "parse", "tryparse", "canonicalize"]),
            ],
        ))
        .with_section(Section::flat(Category::Modules, &["Dates"]))
        .with_section(Section::flat(
            Category::Types,
            &[
                "TimeType",
                "Date",
                "DateTime",
                "Time",
                "Period",
                "Year",
                "Quarter",
                "Month",
                "Week",
                "Day",
                "Hour",
                "Minute",
                "Second",
                "Millisecond",
                "Microsecond",
                "Nanosecond",
                "CompoundPeriod",
                "DateFormat",
            ],
        ))
}

use crate::catalog::{Category, Section, Topic};

const COMPLEX_DOC: &str = r#"
The global constant `im` is the imaginary unit, so complex literals read
like mathematics: `1 + 2im`. The type is `Complex{T}` for any real `T`;
`ComplexF64` is `Complex{Float64}`.

    z = 3 + 4im
    abs(z)          # 5.0
    conj(z)         # 3 - 4im
    real(z), imag(z)

All the usual arithmetic and elementary functions accept complex numbers.
Note that `sqrt(-1)` throws a `DomainError` because the result of a real
argument is expected to be real; ask for a complex answer explicitly with
`sqrt(complex(-1))` or `sqrt(-1 + 0im)`.

`complex(a, b)` builds a complex number from two reals and is preferred
over `a + b*im` when `a` and `b` are variables. `angle(z)` gives the
argument and `cis(θ)` is `cos(θ) + im*sin(θ)`, so polar form is
`r * cis(θ)`.
"#;

pub(super) fn complex() -> Topic {
    Topic::new("complex", "Complex Numbers", COMPLEX_DOC)
        .with_aliases(&["complex-numbers", "im"])
        .with_section(Section::flat(Category::Constants, &["im"]))
        .with_section(Section::nested(
            Category::Methods,
            &[
                (
                    "Parts",
                    &["real", "imag", "reim", "conj", "abs", "abs2", "angle"],
                ),
                ("Construction", &["complex", "cis", "cispi"]),
                (
                    "Predicates",
                    &["isreal", "iszero", "isfinite", "isnan", "isinf"],
                ),
                (
                    "Elementary functions",
                    &["exp", "log", "sqrt", "sin", "cos", "tan", "sinh", "cosh"],
                ),
            ],
        ))
        .with_section(Section::flat(
            Category::Operators,
            &["+", "-", "*", "/", "^", "==", "≈"],
        ))
        .with_section(Section::flat(
            Category::Types,
            &["Complex", "ComplexF16", "ComplexF32", "ComplexF64"],
        ))
}

const FLOAT_DOC: &str = r#"
Julia has three IEEE 754 binary floating-point types, `Float16`, `Float32`
and `Float64`, plus the arbitrary precision `BigFloat`. Literals are
`Float64` unless written with an `f` exponent:

    1.0, 1e10, 2.5e-4   # Float64
    0.5f0, 2.5f-4       # Float32
    Float16(4.0)

Special values are `Inf`, `-Inf` and `NaN`, in every precision. `NaN` is
not equal to anything, itself included; use `isnan` to test for it and
`isequal` when `NaN` should equal `NaN`. Positive and negative zero compare
equal but have different bit patterns.

`eps(x)` is the gap between `x` and the next representable value, which is
what `nextfloat` and `prevfloat` step over. `floatmin` and `floatmax` give
the range of normal values. Rounding direction is a `RoundingMode`, passed
to `round` or set for `BigFloat` arithmetic with `setrounding`, and
`setprecision` controls the number of bits `BigFloat` carries.

Use `≈` (`isapprox`) rather than `==` to compare computed results.
"#;

pub(super) fn float() -> Topic {
    Topic::new("float", "Floating-Point Numbers", FLOAT_DOC)
        .with_aliases(&["floats", "floating-point", "floatingpoint"])
        .with_section(Section::flat(
            Category::Constants,
            &[
                "Inf",
                "Inf16",
                "Inf32",
                "Inf64",
                "NaN",
                "NaN16",
                "NaN32",
                "NaN64",
                "RoundNearest",
                "RoundNearestTiesAway",
                "RoundNearestTiesUp",
                "RoundToZero",
                "RoundUp",
                "RoundDown",
            ],
        ))
        .with_section(Section::flat(Category::Macros, &["@big_str", "@fastmath"]))
        .with_section(Section::nested(
            Category::Methods,
            &[
                (
                    "Precision",
                    &[
                        "eps",
                        "nextfloat",
                        "prevfloat",
                        "precision",
                        "floatmin",
                        "floatmax",
                        "maxintfloat",
                        "setprecision",
                        "issubnormal",
                    ],
                ),
                (
                    "Rounding",
                    &["round", "floor", "ceil", "trunc", "rounding", "setrounding"],
                ),
                (
                    "Inspection",
                    &[
                        "bitstring",
                        "exponent",
                        "significand",
                        "frexp",
                        "ldexp",
                        "signbit",
                        "isnan",
                        "isinf",
                        "isfinite",
                        "isapprox",
                    ],
                ),
            ],
        ))
        .with_section(Section::flat(Category::Operators, &["≈", "≉", "==", "==="]))
        .with_section(Section::flat(
            Category::Types,
            &[
                "AbstractFloat",
                "Float16",
                "Float32",
                "Float64",
                "BigFloat",
                "RoundingMode",
            ],
        ))
}

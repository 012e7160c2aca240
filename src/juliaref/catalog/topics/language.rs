use crate::catalog::{Category, Section, Topic};

const MODULES_DOC: &str = r#"
Modules are separate global namespaces. Each module has its own set of
global bindings, and code inside it sees only those bindings plus whatever
it brings in explicitly.

    module Geometry
    export area
    area(r) = π * r^2
    end

`using Geometry` brings the module and every exported name into scope;
`import Geometry` brings only the module name, so members are reached as
`Geometry.area`. Either form can name specific bindings:
`using Geometry: area` or `import Geometry: area`. Extending a function
defined elsewhere requires `import` (or a qualified definition such as
`Geometry.area(s::Square) = ...`).

Every session starts in `Main`. `Base` holds the standard library that is
loaded implicitly and `Core` holds the builtins the language cannot be
defined without. A `baremodule` skips the implicit `using Base`.

`include("file.jl")` evaluates a file in the current module's global scope.
A function named `__init__` runs when a precompiled module is loaded, which
is the place for runtime setup such as reading environment variables.
"#;

pub(super) fn modules() -> Topic {
    Topic::new("modules", "Modules", MODULES_DOC)
        .with_aliases(&["module", "namespaces"])
        .with_section(Section::flat(
            Category::Modules,
            &[
                "Base",
                "Core",
                "Main",
                "Base.Iterators",
                "Base.Threads",
                "Base.Math",
                "Base.Filesystem",
                "Base.Libc",
                "Base.Meta",
                "Base.Sys",
                "Base.Docs",
                "Base.GC",
            ],
        ))
        .with_section(Section::flat(
            Category::Macros,
            &[
                "@__MODULE__",
                "@__FILE__",
                "@__DIR__",
                "@__LINE__",
                "@eval",
                "@doc",
                "@isdefined",
                "@macroexpand",
                "@macroexpand1",
                "@which",
            ],
        ))
        .with_section(Section::nested(
            Category::Methods,
            &[
                (
                    "Introspection",
                    &[
                        "nameof",
                        "parentmodule",
                        "names",
                        "fullname",
                        "moduleroot",
                        "pathof",
                        "pkgdir",
                        "pkgversion",
                        "isconst",
                        "isdefined",
                        "getglobal",
                        "setglobal!",
                    ],
                ),
                (
                    "Loading",
                    &["include", "include_string", "evalfile", "eval", "Base.require"],
                ),
            ],
        ))
        .with_section(Section::flat(Category::Types, &["Module"]))
}

const VARIABLES_DOC: &str = r#"
A variable is a name bound to a value. Assignment with `=` binds the name;
it never copies the value, so two names can refer to the same mutable
object.

    x = 1.0
    y = x + 1
    δ = 0.00001     # Unicode names are allowed
    x, y = y, x     # destructuring swap

Names start with a letter, underscore or a suitable Unicode symbol and may
continue with digits and `!`. By convention variables are lowercase,
types and modules are CamelCase, and functions that mutate an argument end
in `!`. Built-in constants such as `pi` can be shadowed locally but it is
rarely a good idea.

Scope is lexical. `function`, `let`, comprehensions and loop bodies open
local scopes; `global x` inside a local scope assigns the module binding,
`local x` forces a new local. `const` marks a global whose binding will not
change, which lets the compiler specialize code that reads it.

Updating operators such as `+=` rebind the name to a new value:
`x += 1` is shorthand for `x = x + 1`.
"#;

pub(super) fn variables() -> Topic {
    Topic::new("variables", "Variables", VARIABLES_DOC)
        .with_aliases(&["variable", "vars", "scope"])
        .with_section(Section::flat(
            Category::Constants,
            &[
                "nothing",
                "missing",
                "ARGS",
                "ENV",
                "PROGRAM_FILE",
                "DEPOT_PATH",
                "LOAD_PATH",
                "VERSION",
                "stdin",
                "stdout",
                "stderr",
                "devnull",
                "C_NULL",
            ],
        ))
        .with_section(Section::flat(
            Category::Macros,
            &["@isdefined", "@show", "@locals", "@atomic", "@static"],
        ))
        .with_section(Section::flat(
            Category::Methods,
            &[
                "isdefined",
                "isconst",
                "isassigned",
                "ismutable",
                "objectid",
                "typeof",
                "copy",
                "deepcopy",
            ],
        ))
        .with_section(Section::flat(
            Category::Operators,
            &[
                "=", "+=", "-=", "*=", "/=", "÷=", "%=", "^=", "&=", "|=", "⊻=", "<<=", ">>=",
                "===", "!==",
            ],
        ))
}

const TYPES_DOC: &str = r#"
Every value has a concrete type, and types form a single tree rooted at
`Any`. Only leaves of the tree are concrete: abstract types exist to be
subtyped and to group methods, never to be instantiated.

    abstract type Shape end
    struct Circle <: Shape
        r::Float64
    end
    mutable struct Counter
        n::Int
    end

`struct` values are immutable; `mutable struct` fields can be reassigned.
`primitive type` declares a bits type of a fixed size.

`x::T` asserts a type on an expression or declares the type of a field,
argument or local. `T <: S` tests subtyping and `isa(x, T)` tests a value.
Parametric types take type parameters, `Point{Float64}`, and a method
signature can bind them with `where`:

    norm(p::Point{T}) where {T<:Real} = sqrt(p.x^2 + p.y^2)

`Union{A, B}` is the type of values that are either, with `Union{}` at the
bottom of the tree. `Nothing` and `Missing` are the singleton types of
`nothing` and `missing`.
"#;

pub(super) fn types() -> Topic {
    Topic::new("types", "Types", TYPES_DOC)
        .with_aliases(&["type", "typesystem"])
        .with_section(Section::flat(
            Category::Types,
            &[
                "Any",
                "Union{}",
                "Union",
                "UnionAll",
                "DataType",
                "Type",
                "TypeVar",
                "Val",
                "Nothing",
                "Missing",
                "Number",
                "Real",
                "Integer",
                "Signed",
                "Unsigned",
                "AbstractFloat",
                "AbstractString",
                "AbstractArray",
                "Function",
            ],
        ))
        .with_section(Section::nested(
            Category::Methods,
            &[
                (
                    "Relationships",
                    &[
                        "supertype",
                        "supertypes",
                        "subtypes",
                        "typejoin",
                        "typeintersect",
                        "isabstracttype",
                        "isconcretetype",
                        "isprimitivetype",
                        "isstructtype",
                        "ismutabletype",
                    ],
                ),
                (
                    "Instances",
                    &[
                        "typeof",
                        "isa",
                        "convert",
                        "promote",
                        "promote_type",
                        "oftype",
                        "fieldnames",
                        "fieldtypes",
                        "fieldcount",
                        "sizeof",
                    ],
                ),
            ],
        ))
        .with_section(Section::flat(Category::Macros, &["@kwdef", "@enum"]))
        .with_section(Section::flat(Category::Operators, &["::", "<:", ">:"]))
}

const FUNCTIONS_DOC: &str = r#"
A function maps a tuple of arguments to a return value. There are three
ways to write one:

    function hypot2(x, y)
        return x^2 + y^2
    end
    hypot2(x, y) = x^2 + y^2     # assignment form
    (x, y) -> x^2 + y^2          # anonymous

A function is a generic name; each definition adds a method for a
particular signature and a call runs the most specific matching method.
This multiple dispatch considers every argument, not just the first.

Arguments after `;` are keywords: `plot(x; color = :red)`. A trailing
`args...` collects the remaining positional arguments into a tuple, and
`f(xs...)` splats a collection back into separate arguments. Default values
are allowed for both.

Functions are values. `map(f, xs)` and friends take them as arguments,
`do` blocks pass an anonymous function as the first argument, `f ∘ g`
composes and `x |> f` pipes. Writing `f.(xs)` broadcasts `f` elementwise.
By convention a trailing `!` marks a function that mutates an argument.
"#;

pub(super) fn functions() -> Topic {
    Topic::new("functions", "Functions", FUNCTIONS_DOC)
        .with_aliases(&["function", "methods", "dispatch"])
        .with_section(Section::nested(
            Category::Methods,
            &[
                (
                    "Higher-order",
                    &[
                        "map",
                        "map!",
                        "filter",
                        "reduce",
                        "foldl",
                        "foldr",
                        "mapreduce",
                        "foreach",
                        "broadcast",
                        "any",
                        "all",
                        "sum",
                    ],
                ),
                (
                    "Introspection",
                    &[
                        "methods",
                        "hasmethod",
                        "applicable",
                        "which",
                        "invoke",
                        "nameof",
                        "code_lowered",
                        "code_typed",
                    ],
                ),
                ("Utilities", &["identity", "splat", "invokelatest"]),
            ],
        ))
        .with_section(Section::flat(
            Category::Macros,
            &[
                "@inline",
                "@noinline",
                "@generated",
                "@nospecialize",
                "@specialize",
                "@.",
                "@invoke",
                "@invokelatest",
            ],
        ))
        .with_section(Section::flat(
            Category::Operators,
            &["∘", "|>", "->", "...", ".", "=>"],
        ))
        .with_section(Section::flat(
            Category::Types,
            &[
                "Function",
                "ComposedFunction",
                "Returns",
                "Base.Fix1",
                "Base.Fix2",
                "Core.Builtin",
                "Core.IntrinsicFunction",
            ],
        ))
}

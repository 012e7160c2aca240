//! # Juliaref CLI
//!
//! The binary is thin: the CLI lives in `cli/`, and this file only invokes
//! `cli::run()` and turns an error into a message on stderr and exit code 1.
//!
//! ```text
//! juliaref                       # list topics
//! juliaref show sets             # doc text, then every section as a grid
//! juliaref show sets -c types    # one category only
//! juliaref dump -o names.txt     # category dump of the whole catalog
//! juliaref show --from names.txt # print a dump file
//! ls /usr/bin | juliaref grid    # any whitespace-separated words
//! ```
//!
//! Output goes through minijinja templates in `cli/templates/`, embedded with
//! `include_str!()`. Grids are laid out by `colgrid` against the resolved width before
//! the rows reach a template, so templates never do width arithmetic.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "juliaref",
    bin_name = "juliaref",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Julia reference cards with names packed into column grids", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Display width in columns (defaults to the terminal width)
    #[arg(short, long, global = true, value_name = "N", help_heading = "Options")]
    pub width: Option<usize>,

    /// Disable coloured output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the reference topics
    #[command(alias = "ls", display_order = 1)]
    Topics,

    /// Show a topic: its explanation, then its names by category
    #[command(alias = "s", display_order = 2)]
    Show {
        /// Topic key or alias (e.g. sets, float, regexp)
        #[arg(required_unless_present = "from")]
        topic: Option<String>,

        /// Skip the explanation and print only the names
        #[arg(short, long)]
        names_only: bool,

        /// Only this category (constants, macros, methods, modules, operators, types)
        #[arg(short, long, value_name = "CAT")]
        category: Option<String>,

        /// Read the topic from a category dump file instead of the built-in catalog
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,
    },

    /// Print whitespace-separated words from FILE (or stdin) as one grid
    #[command(alias = "g", display_order = 3)]
    Grid {
        /// Input file; reads stdin when omitted or `-`
        file: Option<PathBuf>,
    },

    /// Write the names of topics grouped by category
    #[command(display_order = 4)]
    Dump {
        /// Topics to include (all when none are given)
        topics: Vec<String>,

        /// Output file (stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show or change configuration
    #[command(display_order = 5)]
    Config {
        /// Key to show or set (default-width, color)
        key: Option<String>,

        /// New value
        value: Option<String>,
    },
}

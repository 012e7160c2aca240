//! # CLI Layer
//!
//! The CLI layer is the only place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Knows the display width and whether colour is on
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: shell arguments to typed commands via clap
//! 2. **Context Setup**: config directory, config file, width, colour, API
//! 3. **API Dispatch**: call the matching `JuliarefApi` method
//! 4. **Output Formatting**: hand the `CmdResult` to `render::Output` and print it
//!
//! Errors are returned to `main`, which prints them and exits with status 1.

use super::render::Output;
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use juliaref::api::JuliarefApi;
use juliaref::catalog::builtin::BuiltinCatalog;
use juliaref::catalog::file::FileCatalog;
use juliaref::catalog::CatalogSource;
use juliaref::commands::CmdResult;
use juliaref::config::{ColorChoice, JuliarefConfig};
use juliaref::error::{JuliarefError, Result};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

/// Overrides the platform config directory.
const CONFIG_DIR_ENV: &str = "JULIAREF_CONFIG_DIR";

struct AppContext {
    api: JuliarefApi<BuiltinCatalog>,
    output: Output,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.verbose)?;

    let ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Topics) => handle_topics(&ctx),
        Some(Commands::Show {
            topic,
            names_only,
            category,
            from,
        }) => {
            let category = category.as_deref();
            match from {
                Some(path) => handle_show_file(&ctx, &path, topic, names_only, category),
                // clap requires TOPIC when --from is absent
                None => {
                    let topic = topic.unwrap_or_default();
                    handle_show(&ctx.api, &ctx.output, &topic, names_only, category)
                }
            }
        }
        Some(Commands::Grid { file }) => handle_grid(&ctx, file.as_deref()),
        Some(Commands::Dump { topics, output }) => handle_dump(&ctx, &topics, output.as_deref()),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

/// Logs go to stderr so stdout stays clean for pipes.
fn initialize_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = config_dir()?;
    let config = JuliarefConfig::load(&config_dir)?;

    let width = resolve_width(cli.width, colgrid::terminal_width, config.default_width);
    let use_color = resolve_color(cli.no_color, config.color, colgrid::colors_supported);
    debug!(config_dir = %config_dir.display(), width, use_color, "initialized context");

    Ok(AppContext {
        api: JuliarefApi::new(BuiltinCatalog::new(), config_dir),
        output: Output::new(width, use_color)?,
    })
}

fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("org", "juliaref", "juliaref")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| JuliarefError::Config("could not determine a config directory".to_string()))
}

/// `--width`, then the detected terminal width, then the configured default.
fn resolve_width(flag: Option<usize>, detect: impl FnOnce() -> Option<usize>, default: usize) -> usize {
    flag.or_else(detect).unwrap_or(default)
}

/// `--no-color`, then the configured choice, then detection.
fn resolve_color(no_color: bool, choice: ColorChoice, detect: impl FnOnce() -> bool) -> bool {
    if no_color {
        return false;
    }
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => detect(),
    }
}

fn print_messages(output: &Output, result: &CmdResult) -> Result<()> {
    print!("{}", output.messages(&result.messages)?);
    Ok(())
}

fn handle_topics(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.topics()?;
    print!("{}", ctx.output.topics(&result.listed_topics)?);
    print_messages(&ctx.output, &result)
}

fn handle_show<S: CatalogSource>(
    api: &JuliarefApi<S>,
    output: &Output,
    topic: &str,
    names_only: bool,
    category: Option<&str>,
) -> Result<()> {
    let result = api.show(topic, category)?;
    if let Some(topic) = &result.topic {
        print!("{}", output.topic(topic, names_only)?);
    }
    print_messages(output, &result)
}

fn handle_show_file(
    ctx: &AppContext,
    path: &Path,
    topic: Option<String>,
    names_only: bool,
    category: Option<&str>,
) -> Result<()> {
    let catalog = FileCatalog::load(path)?;
    let topic = topic.unwrap_or_else(|| catalog.topic_ref().key.clone());
    let api = JuliarefApi::new(catalog, ctx.api.config_dir().to_path_buf());
    handle_show(&api, &ctx.output, &topic, names_only, category)
}

fn handle_grid(ctx: &AppContext, file: Option<&Path>) -> Result<()> {
    let input = match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)?,
        _ => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let result = ctx.api.grid(&input)?;
    print!("{}", ctx.output.grid(&result.labels)?);
    print_messages(&ctx.output, &result)
}

fn handle_dump(ctx: &AppContext, topics: &[String], output: Option<&Path>) -> Result<()> {
    let result = ctx.api.dump(topics, output)?;
    if let Some(text) = &result.text {
        print!("{}", text);
    }
    print_messages(&ctx.output, &result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let result = ctx.api.config(key, value)?;
    if let Some(config) = &result.config {
        print!("{}", ctx.output.config(config)?);
    }
    print_messages(&ctx.output, &result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_flag_wins() {
        assert_eq!(resolve_width(Some(40), || Some(120), 80), 40);
    }

    #[test]
    fn width_falls_back_to_terminal_then_config() {
        assert_eq!(resolve_width(None, || Some(120), 80), 120);
        assert_eq!(resolve_width(None, || None, 100), 100);
    }

    #[test]
    fn no_color_flag_overrides_config() {
        assert!(!resolve_color(true, ColorChoice::Always, || true));
    }

    #[test]
    fn second_logging_init_is_an_error() {
        // once a subscriber is installed, installing another fails
        let _ = initialize_logging(false);
        assert!(matches!(
            initialize_logging(true),
            Err(JuliarefError::Logging(_))
        ));
    }

    #[test]
    fn color_choice_decides_before_detection() {
        assert!(resolve_color(false, ColorChoice::Always, || false));
        assert!(!resolve_color(false, ColorChoice::Never, || true));
        assert!(resolve_color(false, ColorChoice::Auto, || true));
        assert!(!resolve_color(false, ColorChoice::Auto, || false));
    }
}

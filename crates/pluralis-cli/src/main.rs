//! pluralis CLI entry point.
//!
//! Provides command-line tools for inspecting CLDR plural rules:
//! - `pluralis category` - Classify quantities for a locale
//! - `pluralis select` - Pick a declared label for a quantity
//! - `pluralis locales` - List supported locales and their rule families
//! - `pluralis lint` - Check a declared label set against a locale

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_category, run_lint, run_locales, run_select, CategoryArgs, LintArgs, LocalesArgs,
    SelectArgs,
};
use tracing::subscriber::set_global_default;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// CLDR plural rule tools.
#[derive(Debug, Parser)]
#[command(name = "pluralis")]
#[command(about = "CLDR plural rule tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify quantities into plural categories
    Category(CategoryArgs),
    /// Select a declared label for a quantity
    Select(SelectArgs),
    /// List supported locales
    Locales(LocalesArgs),
    /// Check a declared label set against a locale's rule
    Lint(LintArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Install a stderr log subscriber when verbose output is requested.
fn setup_logging(verbose: bool) -> miette::Result<()> {
    if !verbose {
        return Ok(());
    }
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_writer(stderr)
        .finish();
    set_global_default(subscriber)
        .map_err(|e| miette::miette!("Failed to set tracing subscriber: {}", e))
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose)?;

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Category(args) => run_category(args),
        Commands::Select(args) => run_select(args),
        Commands::Locales(args) => run_locales(args),
        Commands::Lint(args) => run_lint(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}

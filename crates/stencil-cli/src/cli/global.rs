//! Global arguments that apply to every subcommand.
//!
//! Flattened into [`super::Cli`] and marked `global`, so they may appear
//! before or after the subcommand.

use std::path::PathBuf;

use clap::Args;
use serde::{Deserialize, Serialize};

/// Flags shared by `new`, `list`, `init` and `completions`.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of what the scaffolder does, on stderr.
    ///
    /// Stacks: `-v` per-file progress, `-vv` per-section decisions, `-vvv`
    /// raw filesystem calls. `RUST_LOG` replaces this when set.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log scaffold progress to stderr (-v files, -vv decisions, -vvv fs calls)",
        long_help = "Log scaffold progress to stderr:
    (none)  - Skipped sections and errors
    -v      - Each generated file and the installer script
    -vv     - Loaded inputs and the decision for every section
    -vvv    - Every directory, write and chmod call"
    )]
    pub verbose: u8,

    /// Print errors only: no summary, warnings or next steps.
    ///
    /// JSON output (`--output-format json`) is still written.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Disable ANSI colours. Set automatically by `NO_COLOR`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Stencil settings file, read instead of the user config and `./.stencil.toml`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from FILE instead of the default locations"
    )]
    pub config: Option<PathBuf>,

    /// How summaries, plans and listings are printed.
    ///
    /// `auto` defers to `output.format` in the settings file, then to the
    /// terminal: human when stdout is a TTY, plain otherwise.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How to print summaries and listings"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command results on stdout.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Settings file, then terminal detection.
    #[default]
    Auto,
    /// Colored, with symbols and next steps.
    Human,
    /// Same text, no ANSI codes.
    Plain,
    /// One JSON document: the summary, plan preview or listing.
    Json,
}

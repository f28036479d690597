//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]. `stencil-core` and
//! `stencil-adapters` emit events; this module decides which ones reach
//! stderr.
//!
//! # What each level shows
//!
//! | Flag(s)   | Level | Stencil events                                   |
//! |-----------|-------|--------------------------------------------------|
//! | `--quiet` | ERROR | failures only                                    |
//! | (none)    | WARN  | sections skipped (unknown framework, bad template) |
//! | `-v`      | INFO  | each generated file, installer written, run done |
//! | `-vv`     | DEBUG | inputs loaded, one decision per section          |
//! | `-vvv`    | TRACE | every filesystem call of the local adapter       |
//!
//! `RUST_LOG` replaces the whole filter when set, so events from other
//! crates can be enabled too.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Crates whose events the verbosity flags control.
const TARGETS: [&str; 3] = ["stencil", "stencil_core", "stencil_adapters"];

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(args))));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// Level selected by `-q` / `-v...`. Quiet wins.
fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `EnvFilter` directives scoping `level` to the Stencil crates; anything
/// else stays off.
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

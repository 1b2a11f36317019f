//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `runtime.rs` — `build` and `check`.
//! - `interactive.rs` — the prompt-driven build used when no subcommand is given.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate parsing, rendering and writing to `services/*`.
//! - Keep behavior and output schema stable.

pub mod interactive;
pub mod runtime;

pub use interactive::handle_interactive;
pub use runtime::handle_runtime_commands;

use crate::cli::Cli;

pub fn handle_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(command) => handle_runtime_commands(cli.json, command),
        None => handle_interactive(cli.json),
    }
}

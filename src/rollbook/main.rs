//! # Rollbook CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/rollbook/cli/`, and this
//! file only invokes `cli::run()` and handles process termination.
//!
//! ```text
//! cli/setup.rs     clap definitions (global --config, --json, --verbose)
//! cli/commands.rs  context wiring and per-command handlers
//! cli/shell.rs     the interactive search / add / exit menu
//! cli/input.rs     class-level and subject-list coercion
//! cli/render.rs    details view, list view, messages, JSON
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic. The CLI owns prompts, parsing,
//! rendering and exit codes.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

//! # CLI Layer
//!
//! This module is **one possible client** of the rollbook library. It is the only
//! place that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Parses arguments
//! - Turns raw text into typed fields (class level, subject list)
//! - Formats records for humans
//! - Uses `std::process::exit`
//!
//! ## Structure
//!
//! - `run()`: parse arguments, set up logging and context, dispatch
//! - `init_context()`: load config, seed the store, build the API
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::input::parse_subjects;
use super::render::{render_json, render_lookup, render_messages, render_student_list};
use super::setup::{Cli, Commands};
use super::shell::Shell;
use clap::Parser;
use rollbook::api::{CmdResult, RollbookApi};
use rollbook::config::RollbookConfig;
use rollbook::error::Result;
use rollbook::model::NewStudent;
use rollbook::store::memory::InMemoryStore;
use std::io::Write;

struct AppContext {
    api: RollbookApi<InMemoryStore>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        None | Some(Commands::Shell) => handle_shell(&mut ctx),
        Some(Commands::Show { ids }) => handle_show(&ctx, &ids),
        Some(Commands::Add {
            name,
            class_level,
            address,
            date_of_birth,
            phone,
            subjects,
        }) => {
            let fields = NewStudent {
                name,
                address,
                class_level,
                subjects: parse_subjects(&subjects),
                date_of_birth,
                phone_number: phone,
            };
            handle_add(&mut ctx, fields)
        }
        Some(Commands::List) => handle_list(&ctx),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    // A subscriber may already be set when embedded; keep that one
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = RollbookConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "configuration loaded");

    let records = config.seed_records()?;
    let api = RollbookApi::from_seed(records, config.id_prefix.clone())?;

    Ok(AppContext {
        api,
        json: cli.json,
    })
}

fn handle_shell(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Shell::new(&mut ctx.api, stdin.lock(), stdout.lock()).run()
}

/// Prints every record found. Any miss is reported and the process exits with 1.
fn handle_show(ctx: &AppContext, ids: &[String]) -> Result<()> {
    let result = ctx.api.find_students(ids)?;
    print_result(ctx, &result, |r| {
        format!("{}{}", render_lookup(r), render_messages(&r.messages))
    })?;

    if !result.is_complete() {
        std::io::stdout().flush()?;
        std::process::exit(1);
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, fields: NewStudent) -> Result<()> {
    let result = ctx.api.add_student(fields)?;
    print_result(ctx, &result, |r| {
        format!("{}{}", render_messages(&r.messages), render_lookup(r))
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_students()?;
    print_result(ctx, &result, |r| {
        format!(
            "{}{}",
            render_student_list(&r.listed_students),
            render_messages(&r.messages)
        )
    })
}

fn print_result(
    ctx: &AppContext,
    result: &CmdResult,
    human: impl Fn(&CmdResult) -> String,
) -> Result<()> {
    if ctx.json {
        print!("{}", render_json(result)?);
    } else {
        print!("{}", human(result));
    }
    Ok(())
}

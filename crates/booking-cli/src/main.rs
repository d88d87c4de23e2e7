//! Bookings CLI - ticket bookings, payments and headcount for a single event
//!
//! This is the command-line interface for Bookings. It wraps the ledger in
//! `booking-core` with config resolution, terminal output and the Gemini
//! powered `insights` and `scan` commands.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod output;
mod ui;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use booking_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{ai, bookings, init, misc, stats};
use crate::constants::{exit_codes, LOG_ENV_VARS};
use crate::errors::classify;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        tracing::debug!(error = ?e, "command failed");

        match classify(&e) {
            Some(err) => {
                print_error(&ui_ctx, err.message(), err.hint());
                std::process::exit(err.exit_code());
            }
            None => {
                print_error(&ui_ctx, &format!("{:#}", e), None);
                std::process::exit(exit_codes::FAILURE);
            }
        }
    }
}

/// Install a stderr subscriber.
///
/// The filter comes from `BOOKINGS_LOG`, then `RUST_LOG`; without either,
/// only warnings are shown unless `--verbose` asks for debug output.
fn init_tracing(verbose: bool) {
    let directives = LOG_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty());
    let filter = directives
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args)?,
        Some(Commands::Add(args)) => bookings::handle_add(ctx, args)?,
        Some(Commands::List(args)) => bookings::handle_list(ctx, args)?,
        Some(Commands::Search(args)) => bookings::handle_search(ctx, args)?,
        Some(Commands::Show(args)) => bookings::handle_show(ctx, args)?,
        Some(Commands::Remove(args)) => bookings::handle_remove(ctx, args)?,
        Some(Commands::Clear(args)) => bookings::handle_clear(ctx, args)?,
        Some(Commands::Stats(args)) => stats::handle_stats(ctx, args)?,
        Some(Commands::Export(args)) => bookings::handle_export(ctx, args)?,
        Some(Commands::Insights(args)) => ai::handle_insights(ctx, args)?,
        Some(Commands::Scan(args)) => ai::handle_scan(ctx, args)?,
        Some(Commands::Completions(args)) => misc::handle_completions(args)?,
        None => {
            println!("Bookings v{}", VERSION);
            println!("\nQuickstart:");
            println!("  bookings init --seed");
            println!("  bookings add --name \"Ravi\" --phone 9000000000 --stag 2 --paid 5000");
            println!("  bookings list");
            println!("  bookings stats");
            println!("  bookings scan guest-sheet.jpg --dry-run");
            println!("\nRun `bookings --help` for full usage.");
        }
    }

    Ok(())
}

use std::path::PathBuf;

use chrono::Utc;

use booking_core::seed::demo_bookings;
use booking_core::{FileBlobStore, LedgerStore};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_store_path, write_config, BookingsConfig};
use crate::errors::CliError;
use crate::helpers::parse_timezone;
use crate::ui::{hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", config_path.display()),
            "Hint: Pass --force to overwrite it.",
        )
        .into());
    }

    let store_dir = match args.path.as_deref().or(ctx.cli().store.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_store_path()?,
    };
    let store_dir = if store_dir.is_relative() {
        std::env::current_dir()?.join(store_dir)
    } else {
        store_dir
    };
    let timezone = match args.timezone.as_deref() {
        Some(value) => parse_timezone(value)?,
        None => None,
    };

    let store = FileBlobStore::open(&store_dir)?;
    let ledger = if args.seed {
        LedgerStore::open_or_seed(store, demo_bookings(Utc::now()))?
    } else {
        LedgerStore::open(store)
    };

    let config = BookingsConfig::new(store_dir.clone(), args.model.clone(), timezone);
    write_config(&config_path, &config)?;
    tracing::debug!(
        config = %config_path.display(),
        store = %store_dir.display(),
        bookings = ledger.len(),
        "initialized"
    );

    if !ctx.quiet() {
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Initialized booking store",
                &[
                    ("Store", store_dir.display().to_string()),
                    ("Config", config_path.display().to_string()),
                    ("Bookings", ledger.len().to_string()),
                ],
            ),
        );
        if ledger.is_empty() {
            print(
                &ui_ctx,
                &hint(&ui_ctx, "bookings add --name <NAME> --phone <PHONE> --stag 1"),
            );
        }
    }
    Ok(())
}

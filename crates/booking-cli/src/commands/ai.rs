//! Gemini-backed commands: `insights` and `scan`.
//!
//! Both run on a current-thread tokio runtime built for the one call.

use std::future::Future;
use std::path::Path;

use booking_core::services::{extract_bookings, insights, ImagePayload, EMPTY_LEDGER_MESSAGE};
use booking_core::BookingError;

use crate::app::AppContext;
use crate::cli::{InsightsArgs, ScanArgs};
use crate::errors::CliError;
use crate::output::{bookings_json, print_booking_list};
use crate::ui::{badge, header, print, receipt, Badge, Spinner};

fn block_on<F: Future>(future: F) -> anyhow::Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to start async runtime: {}", e))?;
    Ok(runtime.block_on(future))
}

pub fn handle_insights(ctx: &AppContext, args: &InsightsArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let ledger = ctx.open_ledger()?;

    let text = if ledger.is_empty() {
        EMPTY_LEDGER_MESSAGE.to_string()
    } else {
        let client = ctx.gemini_client()?;
        tracing::debug!(model = client.model(), bookings = ledger.len(), "requesting insights");
        let spinner = Spinner::start(&ui_ctx, "Analyzing sales");
        let text = block_on(insights(&client, ledger.bookings()))?;
        spinner.stop();
        text
    };

    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({ "insights": text }))?
        );
        return Ok(());
    }
    if !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "insights", None));
    }
    print(&ui_ctx, &text);
    Ok(())
}

pub fn handle_scan(ctx: &AppContext, args: &ScanArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let mut ledger = ctx.open_ledger()?;

    let image = ImagePayload::from_path(Path::new(&args.image))?;
    let client = ctx.gemini_client()?;
    tracing::debug!(
        model = client.model(),
        mime = %image.mime_type,
        bytes = image.data.len(),
        "scanning guest sheet"
    );

    let spinner = Spinner::start(&ui_ctx, "Scanning guest sheet");
    let report = match block_on(extract_bookings(&client, &image))? {
        Ok(report) => report,
        Err(err @ BookingError::ExternalService(_)) => {
            spinner.finish_warn("Scan failed");
            return Err(CliError::external_with_hint(
                err.to_string(),
                "Hint: Retake the photo in good light with the whole table in frame.",
            )
            .into());
        }
        Err(err) => return Err(err.into()),
    };
    let rows = report.bookings.len() + report.invalid.len();
    if ctx.quiet() {
        spinner.stop();
    } else {
        spinner.finish(&format!("Read {} row(s) from the sheet", rows));
    }

    for (row, reason) in &report.invalid {
        tracing::warn!(row = row + 1, %reason, "skipping scanned row");
        if !ui_ctx.mode.is_json() && !ctx.quiet() {
            eprintln!(
                "{}",
                badge(&ui_ctx, Badge::Warn, &format!("Row {}: {}", row + 1, reason))
            );
        }
    }

    if args.dry_run {
        if ui_ctx.mode.is_json() {
            println!(
                "{}",
                serde_json::to_string_pretty(&bookings_json(&report.bookings)?)?
            );
        } else {
            print_booking_list(&ui_ctx, &report.bookings, "No bookings found in the image.");
        }
        return Ok(());
    }

    let found = report.bookings.len();
    let outcome = ledger.bulk_append(report.bookings)?;

    if ui_ctx.mode.is_json() {
        let value = serde_json::json!({
            "found": found,
            "invalid": report.invalid.len(),
            "accepted": outcome.accepted,
            "rejected": outcome.rejected,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }
    if !ctx.quiet() {
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Guest sheet imported",
                &[
                    ("Found", found.to_string()),
                    ("Imported", outcome.accepted.to_string()),
                    ("Skipped", report.invalid.len().to_string()),
                    ("Remaining", ledger.remaining().to_string()),
                ],
            ),
        );
    }
    if outcome.rejected > 0 {
        eprintln!(
            "{}",
            badge(
                &ui_ctx,
                Badge::Warn,
                &format!(
                    "Capacity reached: {} booking(s) were not imported",
                    outcome.rejected
                ),
            )
        );
    }
    Ok(())
}

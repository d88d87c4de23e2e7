use std::path::Path;

use booking_core::export::{to_csv, to_json};
use booking_core::fs::write_atomic;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::helpers::{parse_export_format, ExportFormat};
use crate::ui::{print, receipt};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let format = parse_export_format(&args.format)?;
    let ledger = ctx.open_ledger()?;

    let contents = match format {
        ExportFormat::Csv => to_csv(ledger.bookings()),
        ExportFormat::Json => to_json(ledger.bookings())? + "\n",
    };

    match args.output.as_deref() {
        None => print!("{}", contents),
        Some(path) => {
            write_atomic(Path::new(path), contents.as_bytes())
                .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path, e))?;
            if !ctx.quiet() {
                let ui_ctx = ctx.ui_context(false, None);
                print(
                    &ui_ctx,
                    &receipt(
                        &ui_ctx,
                        "Exported bookings",
                        &[("Path", path.to_string()), ("Rows", ledger.len().to_string())],
                    ),
                );
            }
        }
    }
    Ok(())
}

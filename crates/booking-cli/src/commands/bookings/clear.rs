use crate::app::AppContext;
use crate::cli::ClearArgs;
use crate::errors::CliError;
use crate::helpers::confirm;
use crate::ui::{badge, print, receipt, Badge, OutputMode};

pub fn handle_clear(ctx: &AppContext, args: &ClearArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let mut ledger = ctx.open_ledger()?;
    let count = ledger.len();

    if !args.yes {
        if !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input_with_hint(
                "Refusing to clear bookings without confirmation",
                "Hint: Pass --yes to clear non-interactively.",
            )
            .into());
        }
        let prompt = format!("Delete all {} bookings? This cannot be undone", count);
        if !confirm(&prompt)? {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled")),
                    OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
                }
            }
            return Ok(());
        }
    }

    ledger.clear()?;
    tracing::debug!(removed = count, "ledger cleared");

    if !ctx.quiet() {
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Bookings cleared", &[("Removed", count.to_string())]),
        );
    }
    Ok(())
}

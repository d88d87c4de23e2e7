use booking_core::query;

use crate::app::AppContext;
use crate::cli::RemoveArgs;
use crate::ui::{print, receipt};

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None);
    let mut ledger = ctx.open_ledger()?;

    let booking = query::resolve(ledger.bookings(), &args.id)?;
    let id = booking.id.to_string();
    let name = booking.name.clone();

    let removed = ledger.remove(&id)?;
    tracing::debug!(id = %id, removed, "remove");

    if !ctx.quiet() {
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Booking removed",
                &[
                    ("ID", id),
                    ("Name", name),
                    ("Remaining", ledger.remaining().to_string()),
                ],
            ),
        );
    }
    Ok(())
}

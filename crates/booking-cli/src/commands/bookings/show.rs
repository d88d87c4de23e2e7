use booking_core::query;

use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{booking_json, print_booking};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let ledger = ctx.open_ledger()?;

    let booking = query::resolve(ledger.bookings(), &args.id)?;
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&booking_json(booking)?)?);
    } else {
        print_booking(&ui_ctx, booking);
    }
    Ok(())
}

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::DEFAULT_LIST_LIMIT;
use crate::output::{bookings_json, print_booking_list};
use crate::ui::{header, hint, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let ledger = ctx.open_ledger()?;

    let bookings = if args.all {
        ledger.bookings()
    } else {
        ledger.recent(args.limit.unwrap_or(DEFAULT_LIST_LIMIT))
    };

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&bookings_json(bookings)?)?);
        return Ok(());
    }

    if !ctx.quiet() {
        let context = format!("{} of {}", bookings.len(), ledger.len());
        print(&ui_ctx, &header(&ui_ctx, "list", Some(&context)));
    }
    print_booking_list(&ui_ctx, bookings, "No bookings found.");
    if ledger.is_empty() && !ctx.quiet() {
        print(&ui_ctx, &hint(&ui_ctx, "bookings add --name <NAME> --phone <PHONE> --stag 1"));
    }
    Ok(())
}

use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::output::{bookings_json, print_booking_list};
use crate::ui::{header, print};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let ledger = ctx.open_ledger()?;

    let mut matches = ledger.search(&args.query);
    if let Some(limit) = args.limit {
        matches.truncate(limit);
    }
    tracing::debug!(query = %args.query, matches = matches.len(), "search");

    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&bookings_json(matches.iter().copied())?)?
        );
        return Ok(());
    }

    if !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "search", Some(&args.query)));
    }
    print_booking_list(&ui_ctx, matches.iter().copied(), "No bookings match.");
    Ok(())
}

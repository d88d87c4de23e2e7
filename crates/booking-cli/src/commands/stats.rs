use crate::app::AppContext;
use crate::cli::StatsArgs;
use crate::output::{print_stats, stats_json};
use crate::ui::{header, print};

pub fn handle_stats(ctx: &AppContext, args: &StatsArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    let ledger = ctx.open_ledger()?;

    let totals = ledger.totals();
    let usage = ledger.capacity_usage();

    if ui_ctx.mode.is_json() {
        let value = stats_json(&totals, &usage, ledger.len());
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if !ctx.quiet() {
        print(&ui_ctx, &header(&ui_ctx, "stats", None));
    }
    print_stats(&ui_ctx, &totals, &usage);
    Ok(())
}

//! Text and table output for bookings.

use booking_core::{Booking, CapacityUsage, Totals};

use crate::ui::theme::{styled, styles};
use crate::ui::{
    format_amount, format_datetime, kv, print, short_id, simple_table, table, truncate, Column,
    UiContext,
};

const BOOKING_COLUMNS: [Column; 9] = [
    Column::new("ID"),
    Column::new("Name"),
    Column::new("Phone"),
    Column::new("Tickets"),
    Column::numeric("Pax"),
    Column::numeric("Paid"),
    Column::numeric("Pending"),
    Column::numeric("Total"),
    Column::new("Created"),
];

fn booking_row(ctx: &UiContext, booking: &Booking) -> Vec<String> {
    let pretty = ctx.mode.is_pretty();
    let (id, name) = if pretty {
        (short_id(booking.id.as_str()), truncate(&booking.name, 24))
    } else {
        (booking.id.to_string(), booking.name.clone())
    };
    let pending = if pretty {
        pending_label(ctx, booking.amount_pending)
    } else {
        booking.amount_pending.to_string()
    };
    vec![
        id,
        name,
        booking.phone.clone(),
        booking.tickets.summary(),
        booking.total_pax.to_string(),
        money(pretty, booking.amount_paid),
        pending,
        money(pretty, booking.total_cost),
        format_datetime(&booking.created_at, ctx.timezone, pretty),
    ]
}

fn money(pretty: bool, amount: impl Into<i128>) -> String {
    let amount = amount.into();
    if pretty {
        format_amount(amount)
    } else {
        amount.to_string()
    }
}

/// Pending balance, colored by state: outstanding, settled, or overpaid.
fn pending_label(ctx: &UiContext, pending: i64) -> String {
    let text = format_amount(pending);
    let style = match pending {
        p if p > 0 => styles::yellow(),
        0 => styles::green(),
        _ => styles::cyan(),
    };
    styled(&text, style, ctx.color)
}

/// Print bookings as a table, or `empty_message` when there are none.
pub fn print_booking_list<'a>(
    ctx: &UiContext,
    bookings: impl IntoIterator<Item = &'a Booking>,
    empty_message: &str,
) {
    let rows: Vec<Vec<String>> = bookings
        .into_iter()
        .map(|b| booking_row(ctx, b))
        .collect();
    if rows.is_empty() {
        print(ctx, empty_message);
        return;
    }
    print(ctx, &table(ctx, &BOOKING_COLUMNS, &rows));
}

/// Print one booking as key-value lines.
pub fn print_booking(ctx: &UiContext, booking: &Booking) {
    let pretty = ctx.mode.is_pretty();
    let pending = if pretty {
        pending_label(ctx, booking.amount_pending)
    } else {
        booking.amount_pending.to_string()
    };
    let lines = [
        kv(ctx, "ID", booking.id.as_str()),
        kv(ctx, "Name", &booking.name),
        kv(ctx, "Phone", &booking.phone),
        kv(ctx, "Tickets", &booking.tickets.summary()),
        kv(ctx, "Total Pax", &booking.total_pax.to_string()),
        kv(ctx, "Total Cost", &money(pretty, booking.total_cost)),
        kv(ctx, "Amount Paid", &money(pretty, booking.amount_paid)),
        kv(ctx, "Amount Pending", &pending),
        kv(
            ctx,
            "Created",
            &format_datetime(&booking.created_at, ctx.timezone, pretty),
        ),
    ];
    for line in lines {
        print(ctx, &line);
    }
}

/// Print the dashboard figures.
pub fn print_stats(ctx: &UiContext, totals: &Totals, usage: &CapacityUsage) {
    let pretty = ctx.mode.is_pretty();
    let rows = vec![
        ("Bookings".to_string(), usage.used.to_string()),
        ("Total Pax".to_string(), totals.pax.to_string()),
        ("Amount Paid".to_string(), money(pretty, totals.paid)),
        (
            "Amount Pending".to_string(),
            if pretty {
                pending_label(ctx, totals.pending)
            } else {
                totals.pending.to_string()
            },
        ),
        ("Total Value".to_string(), money(pretty, totals.total)),
        (
            "Capacity".to_string(),
            format!("{}/{} ({:.1}%)", usage.used, usage.capacity, usage.percent),
        ),
        ("Remaining".to_string(), usage.remaining.to_string()),
    ];
    print(ctx, &simple_table(ctx, &rows));
}

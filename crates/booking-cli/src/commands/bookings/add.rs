use booking_core::{
    BookingError, Field, NewBooking, TicketCategory, TicketQuantities, ValidationError,
};

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{parse_datetime, prompt_required};
use crate::output::booking_json;
use crate::ui::{format_amount, print, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, None);
    let interactive = ui_ctx.is_interactive() && !args.no_input;

    let mut ledger = ctx.open_ledger()?;
    if ledger.remaining() == 0 {
        return Err(CliError::from(BookingError::CapacityExceeded {
            capacity: ledger.capacity(),
        })
        .into());
    }

    let name = required_field(args.name.as_deref(), Field::Name, interactive)?;
    let phone = required_field(args.phone.as_deref(), Field::Phone, interactive)?;

    let tickets = TicketQuantities::new()
        .with(TicketCategory::Stag, args.stag)
        .with(TicketCategory::Couple, args.couple)
        .with(TicketCategory::Angels, args.angels);
    if tickets.is_empty() {
        return Err(CliError::invalid_input_with_hint(
            "No tickets selected",
            "Hint: Pass at least one of --stag, --couple or --angels.",
        )
        .into());
    }

    let mut new_booking = NewBooking::new(name, phone)
        .with_tickets(tickets)
        .with_amount_paid(args.paid);
    if let Some(ref date) = args.date {
        new_booking = new_booking.with_created_at(parse_datetime(date)?);
    }
    let booking = new_booking.build().map_err(BookingError::from)?;

    ledger.append(booking.clone())?;
    tracing::debug!(id = %booking.id, remaining = ledger.remaining(), "booking added");

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&booking_json(&booking)?)?);
        return Ok(());
    }
    if !ctx.quiet() {
        let pretty = ui_ctx.mode.is_pretty();
        let amount = |v: i128| if pretty { format_amount(v) } else { v.to_string() };
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Booking added",
                &[
                    ("ID", booking.id.to_string()),
                    ("Name", booking.name.clone()),
                    ("Tickets", booking.tickets.summary()),
                    ("Total Pax", booking.total_pax.to_string()),
                    ("Total Cost", amount(booking.total_cost.into())),
                    ("Amount Pending", amount(booking.amount_pending.into())),
                    ("Remaining", ledger.remaining().to_string()),
                ],
            ),
        );
    }
    Ok(())
}

/// Use the flag value, or prompt for it when interactive.
fn required_field(value: Option<&str>, field: Field, interactive: bool) -> anyhow::Result<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ if interactive => prompt_required(match field {
            Field::Name => "Guest name",
            Field::Phone => "Contact no",
        }),
        _ => Err(CliError::invalid_input_with_hint(
            ValidationError::MissingField(field).to_string(),
            "Hint: Pass --name and --phone, or run interactively.",
        )
        .into()),
    }
}

//! VEVENT and VCALENDAR writers.

use std::borrow::Cow;

use crate::calendar::Calendar;
use crate::error::{IcsError, IcsResult};
use crate::event::Event;

use super::format::{ContentLines, escape_text, format_date};
use super::options::{RenderContext, RenderOptions};

pub(crate) const MISSING_REQUIRED_FIELDS: &str = "one or more required fields are not set";

/// Generate the VEVENT block for one event.
///
/// Fails with [`IcsError::Validation`] when the name, start date or end date
/// is unset; nothing is produced in that case.
pub fn generate_event(event: &Event, ctx: &RenderContext) -> IcsResult<String> {
    let (Some(summary), Some(start), Some(end)) =
        (event.name(), event.start_date(), event.end_date())
    else {
        return Err(IcsError::Validation(MISSING_REQUIRED_FIELDS.to_string()));
    };

    let date = |d| format_date(d, ctx.options.date_style, ctx.timezone);
    let stamp = date(event.created().unwrap_or(start));
    let status = event.status().as_str();

    let mut lines = ContentLines::new();
    lines
        .property("BEGIN", "VEVENT")
        .property("UID", event.guid())
        .property("DTSTART", &date(start))
        .property("DTEND", &date(end))
        .property("DTSTAMP", &stamp)
        .property(
            &format!("ORGANIZER;CN={}", event.from_name().unwrap_or_default()),
            &format!("mailto:{}", event.from_email().unwrap_or_default()),
        );

    for attendee in event.attendees() {
        lines.property(
            &format!(
                "ATTENDEE;PARTSTAT={status};RSVP=TRUE;CN={};X-NUM-GUESTS=0",
                attendee.name().unwrap_or_default()
            ),
            &format!("mailto:{}", attendee.email().unwrap_or_default()),
        );
    }

    lines
        .property("CREATED", &stamp)
        .property("SUMMARY", &text(summary, &ctx.options))
        .property(
            "DESCRIPTION",
            &text(event.description().unwrap_or_default(), &ctx.options),
        )
        .property(
            "LOCATION",
            &text(event.location().unwrap_or_default(), &ctx.options),
        )
        .property("STATUS", status)
        .property("LAST-MODIFIED", &date(start))
        .property("CLASS", event.class().as_str())
        .property("SEQUENCE", "0")
        .property("TRANSP", event.transparency().as_str())
        .property("END", "VEVENT");

    Ok(lines.finish())
}

/// Generate the complete VCALENDAR document.
///
/// Every event is rendered before any output is assembled, so a single
/// invalid event fails the whole calendar.
pub fn generate_calendar(calendar: &Calendar) -> IcsResult<String> {
    let ctx = calendar.render_context();

    let events = calendar
        .events()
        .iter()
        .map(|event| generate_event(event, &ctx))
        .collect::<IcsResult<Vec<_>>>()?;

    let tzid = if ctx.options.formatted_tzid {
        Cow::Owned(calendar.formatted_timezone_id())
    } else {
        Cow::Borrowed(calendar.timezone_id())
    };

    let mut lines = ContentLines::new();
    lines
        .property("BEGIN", "VCALENDAR")
        .property("PRODID", calendar.prod_id())
        .property("VERSION", "2.0")
        .property("CALSCALE", "GREGORIAN")
        .property("METHOD", calendar.method().as_str())
        // Non-standard, read by some clients as the calendar's display zone
        .property("X-WR-TIMEZONE", &tzid)
        .property("BEGIN", "VTIMEZONE")
        .property("TZID", &tzid)
        .property("BEGIN", "STANDARD")
        .property("DTSTART", "20000101T000000")
        .property("RRULE", "FREQ=YEARLY;BYMONTH=1")
        .property("TZNAME", calendar.timezone_name())
        .property("TZOFFSETFROM", calendar.timezone_offset_start())
        .property("TZOFFSETTO", calendar.timezone_offset_end())
        .property("END", "STANDARD")
        .property("END", "VTIMEZONE");

    for event in &events {
        lines.extend(event);
    }

    lines.property("END", "VCALENDAR");

    let output = lines.finish();
    log::debug!(
        "Generated VCALENDAR for {} with {} event(s), {} bytes",
        calendar.timezone_id(),
        events.len(),
        output.len()
    );

    Ok(output)
}

fn text<'a>(value: &'a str, options: &RenderOptions) -> Cow<'a, str> {
    if options.escape_text {
        escape_text(value)
    } else {
        Cow::Borrowed(value)
    }
}

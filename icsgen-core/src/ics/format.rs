//! Low-level formatting helpers shared by the event and calendar writers.

use std::borrow::Cow;

use chrono::{DateTime, LocalResult, NaiveDateTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;

use super::options::DateStyle;

/// Line terminator for every content line.
pub const ICS_EOL: &str = "\r\n";

/// Floating local timestamp.
pub const DATE_FORMAT: &str = "%Y%m%dT%H%M%S";

/// UTC timestamp.
pub const DATE_FORMAT_UTC: &str = "%Y%m%dT%H%M%SZ";

/// Format an event timestamp. `tz` is only consulted for [`DateStyle::Utc`].
pub fn format_date(date: NaiveDateTime, style: DateStyle, tz: Tz) -> String {
    match style {
        DateStyle::Floating => date.format(DATE_FORMAT).to_string(),
        DateStyle::Utc => local_to_utc(date, tz).format(DATE_FORMAT_UTC).to_string(),
    }
}

fn local_to_utc(date: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    match tz.from_local_datetime(&date) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        // Wall-clock time skipped by a DST jump
        LocalResult::None => {
            let offset = tz.offset_from_utc_datetime(&date).fix();
            (date - offset).and_utc()
        }
    }
}

/// Escape a TEXT value per RFC 5545 section 3.3.11.
pub fn escape_text(value: &str) -> Cow<'_, str> {
    if !value.contains(['\\', ';', ',', '\n', '\r']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    let mut chars = value.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\n");
            }
            _ => escaped.push(c),
        }
    }

    Cow::Owned(escaped)
}

/// Accumulates CRLF-terminated content lines.
#[derive(Debug, Default)]
pub(crate) struct ContentLines {
    buf: String,
}

impl ContentLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `NAME:value`. `name` may carry parameters (`ORGANIZER;CN=..`).
    pub fn property(&mut self, name: &str, value: &str) -> &mut Self {
        self.buf.push_str(name);
        self.buf.push(':');
        self.buf.push_str(value);
        self.buf.push_str(ICS_EOL);
        self
    }

    /// Append already-terminated lines verbatim.
    pub fn extend(&mut self, lines: &str) -> &mut Self {
        self.buf.push_str(lines);
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

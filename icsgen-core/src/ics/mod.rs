//! ICS text generation.
//!
//! Output is written line by line with CRLF endings and no line folding.

mod format;
mod generate;
mod options;

pub use format::{DATE_FORMAT, DATE_FORMAT_UTC, ICS_EOL, escape_text, format_date};
pub use generate::{generate_calendar, generate_event};
pub use options::{DateStyle, RenderContext, RenderOptions};

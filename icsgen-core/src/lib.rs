//! Calendar model and iCalendar generation for icsgen.
//!
//! - `Calendar`, `Event` and `Attendee` hold the data
//! - `ics` writes them as RFC 5545 text
//! - `output` saves the text or describes it as a download
//! - `input` and `icsgen_config` load calendars and defaults from files

pub mod attendee;
pub mod calendar;
pub mod error;
pub mod event;
pub mod ics;
pub mod icsgen_config;
pub mod identity;
pub mod input;
pub mod output;
pub mod timezone;

pub use attendee::Attendee;
pub use calendar::{Calendar, Method};
pub use error::{IcsError, IcsResult};
pub use event::{Event, EventClass, EventFields, EventStatus, Transparency};
pub use ics::{DateStyle, RenderOptions};

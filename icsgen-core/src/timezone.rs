//! Timezone lookups backed by the chrono-tz database.

use std::str::FromStr;

use chrono::{DateTime, Offset, Utc};
use chrono_tz::Tz;

use crate::error::{IcsError, IcsResult};

/// Zone used when the host timezone cannot be determined.
pub const FALLBACK_TIMEZONE: &str = "UTC";

/// Resolve an IANA identifier such as `America/Regina`.
///
/// Matching is exact; anything the database does not know is a
/// configuration error.
pub fn resolve(timezone_id: &str) -> IcsResult<Tz> {
    Tz::from_str(timezone_id).map_err(|_| IcsError::Configuration(timezone_id.to_string()))
}

/// The host's configured timezone, or [`FALLBACK_TIMEZONE`].
pub fn host_timezone_id() -> String {
    match iana_time_zone::get_timezone() {
        Ok(id) if resolve(&id).is_ok() => id,
        Ok(id) => {
            log::warn!("Host timezone '{id}' is not in the timezone database, using {FALLBACK_TIMEZONE}");
            FALLBACK_TIMEZONE.to_string()
        }
        Err(e) => {
            log::warn!("Could not determine host timezone ({e}), using {FALLBACK_TIMEZONE}");
            FALLBACK_TIMEZONE.to_string()
        }
    }
}

/// `America/Los Angeles` => `America-Los_Angeles`
pub fn formatted_id(timezone_id: &str) -> String {
    timezone_id.replace('/', "-").replace(' ', "_")
}

/// Render a UTC offset in seconds as `+HHMM` / `-HHMM`.
pub fn format_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let minutes = seconds.unsigned_abs() / 60;
    format!("{sign}{:02}{:02}", minutes / 60, minutes % 60)
}

/// Abbreviation and offset of a zone at one instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneSnapshot {
    /// e.g. "PST", or a numeric name like "-03" where the zone has no letters
    pub name: String,
    pub offset: String,
}

impl ZoneSnapshot {
    pub fn at(tz: Tz, instant: DateTime<Utc>) -> Self {
        let local = instant.with_timezone(&tz);

        ZoneSnapshot {
            name: local.format("%Z").to_string(),
            offset: format_offset(local.offset().fix().local_minus_utc()),
        }
    }
}

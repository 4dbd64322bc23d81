//! Rendering choices that are not part of the model itself.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// How event timestamps are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateStyle {
    /// `YYYYMMDDTHHMMSS`, the wall-clock value as given, no zone marker
    #[default]
    Floating,
    /// Converted from the calendar timezone to UTC, `YYYYMMDDTHHMMSSZ`
    Utc,
}

/// Switches for the generated text. The defaults reproduce the plain
/// generator output byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    pub date_style: DateStyle,
    /// Escape `\`, `;`, `,` and newlines in SUMMARY, DESCRIPTION and LOCATION.
    #[serde(default)]
    pub escape_text: bool,
    /// Write TZID and X-WR-TIMEZONE with `/` and spaces replaced.
    #[serde(default)]
    pub formatted_tzid: bool,
}

/// Everything an event needs to render itself: the options plus the zone its
/// floating dates belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub options: RenderOptions,
    pub timezone: Tz,
}

impl RenderContext {
    pub fn new(options: RenderOptions, timezone: Tz) -> Self {
        RenderContext { options, timezone }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        RenderContext {
            options: RenderOptions::default(),
            timezone: chrono_tz::UTC,
        }
    }
}

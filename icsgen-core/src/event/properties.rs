//! Enumerated VEVENT property values.
//!
//! Each enum converts from a string with a fallback: a value outside the
//! enumerated set becomes the property's default instead of an error.

use std::fmt;

/// STATUS of an event. Also used as the PARTSTAT of every attendee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventStatus {
    #[default]
    NeedsAction,
    InProcess,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub const ALL: [EventStatus; 4] = [
        EventStatus::NeedsAction,
        EventStatus::InProcess,
        EventStatus::Completed,
        EventStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::NeedsAction => "NEEDS-ACTION",
            EventStatus::InProcess => "IN-PROCESS",
            EventStatus::Completed => "COMPLETED",
            EventStatus::Cancelled => "CANCELLED",
        }
    }

    /// Exact, case-sensitive match against the wire literal.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl From<&str> for EventStatus {
    fn from(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            log::debug!("Unknown STATUS '{value}', using {}", Self::default());
            Self::default()
        })
    }
}

impl From<String> for EventStatus {
    fn from(value: String) -> Self {
        EventStatus::from(value.as_str())
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CLASS (access classification) of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EventClass {
    #[default]
    Public,
    Private,
    Confidential,
}

impl EventClass {
    pub const ALL: [EventClass; 3] = [
        EventClass::Public,
        EventClass::Private,
        EventClass::Confidential,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventClass::Public => "PUBLIC",
            EventClass::Private => "PRIVATE",
            EventClass::Confidential => "CONFIDENTIAL",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }
}

impl From<&str> for EventClass {
    fn from(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            log::debug!("Unknown CLASS '{value}', using {}", Self::default());
            Self::default()
        })
    }
}

impl From<String> for EventClass {
    fn from(value: String) -> Self {
        EventClass::from(value.as_str())
    }
}

impl fmt::Display for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TRANSP of an event: whether it shows up in busy-time searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transparency {
    /// Blocks time on the calendar
    #[default]
    Opaque,
    /// Shows as free
    Transparent,
}

impl Transparency {
    pub const ALL: [Transparency; 2] = [Transparency::Opaque, Transparency::Transparent];

    pub fn as_str(self) -> &'static str {
        match self {
            Transparency::Opaque => "OPAQUE",
            Transparency::Transparent => "TRANSPARENT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl From<&str> for Transparency {
    fn from(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            log::debug!("Unknown TRANSP '{value}', using {}", Self::default());
            Self::default()
        })
    }
}

impl From<String> for Transparency {
    fn from(value: String) -> Self {
        Transparency::from(value.as_str())
    }
}

impl fmt::Display for Transparency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

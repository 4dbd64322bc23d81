//! Calendar input documents (TOML or JSON).
//!
//! ```toml
//! timezone = "America/Regina"
//! method = "REQUEST"
//!
//! [[events]]
//! name = "Top Secret Event."
//! startDate = "2014-01-01T09:00:00"
//! endDate = "2014-01-01T10:00:00"
//! attendees = [{ email = "bool.ian@nowhere.com", name = "Ian Bool" }]
//! ```
//!
//! Dates are `YYYY-MM-DDTHH:MM:SS` strings in both formats. TOML documents
//! may also use unquoted local date-times; offset date-times are rejected.

use std::path::Path;

use serde::Deserialize;

use crate::calendar::{Calendar, Method};
use crate::error::{IcsError, IcsResult};
use crate::event::{Event, EventFields};
use crate::icsgen_config::IcsgenConfig;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDocument {
    pub timezone: Option<String>,
    #[serde(alias = "prod_id")]
    pub prod_id: Option<String>,
    pub method: Option<Method>,
    #[serde(default)]
    pub events: Vec<EventFields>,
}

impl CalendarDocument {
    /// Read a document, picking the format from the extension: `.json` is
    /// JSON, anything else is TOML.
    pub fn from_path(path: &Path) -> IcsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> IcsResult<Self> {
        toml::from_str(content).map_err(|e| IcsError::Input(e.to_string()))
    }

    pub fn from_json_str(content: &str) -> IcsResult<Self> {
        serde_json::from_str(content).map_err(|e| IcsError::Input(e.to_string()))
    }

    /// Apply the document's settings and events to `calendar`.
    ///
    /// Returns the number of events added. Events are not validated here;
    /// incomplete ones fail at generation.
    pub fn apply(self, calendar: &mut Calendar) -> IcsResult<usize> {
        if let Some(timezone) = &self.timezone {
            calendar.set_timezone_id(timezone)?;
        }
        if let Some(prod_id) = self.prod_id {
            calendar.set_prod_id(prod_id);
        }
        if let Some(method) = self.method {
            calendar.set_method(method);
        }

        let count = self.events.len();
        for fields in self.events {
            calendar.add_event(Event::from_fields(fields));
        }

        Ok(count)
    }

    /// Build a calendar from configured defaults overridden by this document.
    pub fn into_calendar(self, config: &IcsgenConfig) -> IcsResult<Calendar> {
        let mut calendar = Calendar::from_config(config)?;
        self.apply(&mut calendar)?;
        Ok(calendar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use indoc::indoc;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2014, 1, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    const TOML_DOCUMENT: &str = indoc! {r#"
        timezone = "America/Regina"
        prodId = "-//example//test//EN"
        method = "REQUEST"

        [[events]]
        guid = "top-secret"
        name = "Top Secret Event."
        startDate = "2014-01-01T09:00:00"
        endDate = "2014-01-01T10:00:00"
        class = "PRIVATE"
        attendees = [
            { email = "bool.ian@nowhere.com", name = "Ian Bool" },
            { email = "noone@nowhere.com" },
        ]

        [[events]]
        name = "Debrief"
        start_date = "2014-01-01T11:00:00"
        end_date = "2014-01-01T12:00:00"
    "#};

    #[test]
    fn toml_document_is_parsed() {
        let document = CalendarDocument::from_toml_str(TOML_DOCUMENT).unwrap();

        assert_eq!(document.timezone.as_deref(), Some("America/Regina"));
        assert_eq!(document.prod_id.as_deref(), Some("-//example//test//EN"));
        assert_eq!(document.method, Some(Method::Request));
        assert_eq!(document.events.len(), 2);
        assert_eq!(document.events[1].start_date, Some(at(11)));
    }

    #[test]
    fn json_document_is_parsed() {
        let document = CalendarDocument::from_json_str(
            r#"{
                "method": "SOMETHING",
                "events": [
                    { "name": "Standup", "startDate": "2014-01-01T09:00:00", "endDate": "2014-01-01T09:15:00" }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(document.timezone, None);
        assert_eq!(document.method, Some(Method::Publish));
        assert_eq!(document.events[0].name.as_deref(), Some("Standup"));
    }

    #[test]
    fn toml_native_local_datetimes_are_accepted() {
        let document = CalendarDocument::from_toml_str(indoc! {r#"
            [[events]]
            name = "Top Secret Event."
            startDate = 2014-01-01T09:00:00
            end_date = 2014-01-01T10:00:00
            created = "2014-01-01T08:00:00"
        "#})
        .unwrap();

        let fields = &document.events[0];
        assert_eq!(fields.start_date, Some(at(9)));
        assert_eq!(fields.end_date, Some(at(10)));
        assert_eq!(fields.created, Some(at(8)));
    }

    #[test]
    fn toml_offset_datetimes_are_rejected() {
        let err = CalendarDocument::from_toml_str(indoc! {r#"
            [[events]]
            startDate = 2014-01-01T09:00:00Z
        "#})
        .unwrap_err();

        assert!(matches!(err, IcsError::Input(_)));
    }

    #[test]
    fn malformed_document_is_an_input_error() {
        let err = CalendarDocument::from_toml_str("events = 3").unwrap_err();
        assert!(matches!(err, IcsError::Input(_)));

        let err = CalendarDocument::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, IcsError::Input(_)));
    }

    #[test]
    fn format_follows_extension() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("events.toml");
        std::fs::write(&toml_path, TOML_DOCUMENT).unwrap();
        assert_eq!(
            CalendarDocument::from_path(&toml_path).unwrap().events.len(),
            2
        );

        let json_path = dir.path().join("events.JSON");
        std::fs::write(&json_path, r#"{ "timezone": "UTC" }"#).unwrap();
        assert_eq!(
            CalendarDocument::from_path(&json_path).unwrap().timezone.as_deref(),
            Some("UTC")
        );
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CalendarDocument::from_path(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, IcsError::Io(_)));
    }

    #[test]
    fn apply_builds_events_in_order() {
        let document = CalendarDocument::from_toml_str(TOML_DOCUMENT).unwrap();
        let mut calendar = Calendar::with_timezone("UTC").unwrap();

        let added = document.apply(&mut calendar).unwrap();

        assert_eq!(added, 2);
        assert_eq!(calendar.timezone_id(), "America/Regina");
        assert_eq!(calendar.method(), Method::Request);
        assert_eq!(calendar.prod_id(), "-//example//test//EN");

        let events = calendar.events();
        assert_eq!(events[0].guid(), "top-secret");
        assert_eq!(events[0].attendees().len(), 2);
        assert_eq!(events[0].attendees()[1].name(), Some("noone@nowhere.com"));
        assert_eq!(events[1].name(), Some("Debrief"));

        let ics = calendar.generate().unwrap();
        assert!(ics.contains("SUMMARY:Top Secret Event.\r\n"));
        assert!(ics.contains("CLASS:PRIVATE\r\n"));
        assert!(ics.contains("DTSTART:20140101T110000\r\n"));
    }

    #[test]
    fn apply_rejects_unknown_timezone() {
        let document = CalendarDocument {
            timezone: Some("Nowhere/Special".into()),
            ..CalendarDocument::default()
        };
        let mut calendar = Calendar::with_timezone("UTC").unwrap();

        let err = document.apply(&mut calendar).unwrap_err();
        assert!(matches!(err, IcsError::Configuration(_)));
    }

    #[test]
    fn into_calendar_overrides_config() {
        let config = IcsgenConfig {
            timezone: Some("Europe/Berlin".into()),
            method: Some(Method::Request),
            ..IcsgenConfig::default()
        };
        let document = CalendarDocument {
            method: Some(Method::Publish),
            ..CalendarDocument::default()
        };

        let calendar = document.into_calendar(&config).unwrap();

        assert_eq!(calendar.timezone_id(), "Europe/Berlin");
        assert_eq!(calendar.method(), Method::Publish);
        assert!(calendar.events().is_empty());
    }
}

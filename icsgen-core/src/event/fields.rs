//! Field-by-field event hydration from loosely structured records.
//!
//! Keys use the camelCase names of the event properties (`startDate`,
//! `fromEmail`, ...); snake_case spellings are accepted too. Unknown keys are
//! ignored and missing keys leave the event untouched.
//!
//! Dates are `YYYY-MM-DDTHH:MM:SS` strings, or native local date-times when
//! the record comes from TOML.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

use super::Event;
use crate::attendee::Attendee;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFields {
    pub guid: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    #[serde(alias = "start_date", default, deserialize_with = "local_date_time")]
    pub start_date: Option<NaiveDateTime>,
    #[serde(alias = "end_date", default, deserialize_with = "local_date_time")]
    pub end_date: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "local_date_time")]
    pub created: Option<NaiveDateTime>,
    #[serde(alias = "from_name")]
    pub from_name: Option<String>,
    #[serde(alias = "from_email")]
    pub from_email: Option<String>,
    /// Coerced to NEEDS-ACTION when not a known STATUS value
    pub status: Option<String>,
    pub class: Option<String>,
    pub transparency: Option<String>,
    pub attendees: Option<Vec<AttendeeFields>>,
}

/// Attendee entry inside an [`EventFields`] record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AttendeeFields {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DateValue {
    Text(String),
    Toml(toml::value::Datetime),
}

fn local_date_time<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<DateValue>::deserialize(deserializer)? else {
        return Ok(None);
    };

    let text = match value {
        DateValue::Text(text) => text,
        DateValue::Toml(datetime) => datetime.to_string(),
    };

    text.parse::<NaiveDateTime>().map(Some).map_err(|e| {
        serde::de::Error::custom(format!("invalid local date-time '{text}': {e}"))
    })
}

impl EventFields {
    pub(super) fn apply_to(self, event: &mut Event) {
        if let Some(guid) = self.guid {
            event.set_guid(guid);
        }
        if let Some(name) = self.name {
            event.set_name(name);
        }
        if let Some(description) = self.description {
            event.set_description(description);
        }
        if let Some(location) = self.location {
            event.set_location(location);
        }
        if let Some(start_date) = self.start_date {
            event.set_start_date(start_date);
        }
        if let Some(end_date) = self.end_date {
            event.set_end_date(end_date);
        }
        if let Some(created) = self.created {
            event.set_created(created);
        }
        if let Some(from_name) = self.from_name {
            event.set_from_name(from_name);
        }
        if let Some(from_email) = self.from_email {
            event.set_from_email(from_email);
        }
        if let Some(status) = self.status {
            event.set_status(status);
        }
        if let Some(class) = self.class {
            event.set_class(class);
        }
        if let Some(transparency) = self.transparency {
            event.set_transparency(transparency);
        }
        if let Some(attendees) = self.attendees {
            event.set_attendees(attendees.into_iter().map(Attendee::from));
        }
    }
}

impl From<AttendeeFields> for Attendee {
    fn from(fields: AttendeeFields) -> Self {
        match (fields.email, fields.name) {
            (Some(email), Some(name)) => Attendee::with_name(email, name),
            (Some(email), None) => Attendee::new(email),
            (None, Some(name)) => {
                let mut attendee = Attendee::default();
                attendee.set_name(name);
                attendee
            }
            (None, None) => Attendee::default(),
        }
    }
}

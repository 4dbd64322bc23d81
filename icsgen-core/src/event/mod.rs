//! Calendar events (VEVENT).

mod fields;
mod properties;

pub use fields::{AttendeeFields, EventFields};
pub use properties::{EventClass, EventStatus, Transparency};

use chrono::NaiveDateTime;

use crate::attendee::Attendee;
use crate::error::IcsResult;
use crate::ics::{self, RenderContext};
use crate::identity::Identity;

/// A single calendar event.
///
/// Dates are floating wall-clock values; the generator trusts the caller to
/// supply them in the calendar's zone.
#[derive(Debug, Clone)]
pub struct Event {
    identity: Identity,
    guid: String,
    name: Option<String>,
    description: Option<String>,
    location: Option<String>,
    start_date: Option<NaiveDateTime>,
    end_date: Option<NaiveDateTime>,
    created: Option<NaiveDateTime>,
    from_name: Option<String>,
    from_email: Option<String>,
    status: EventStatus,
    class: EventClass,
    transparency: Transparency,
    attendees: Vec<Attendee>,
}

impl Default for Event {
    fn default() -> Self {
        Self::new()
    }
}

impl Event {
    /// Create an empty event with a freshly generated guid.
    pub fn new() -> Self {
        Self::with_guid(generate_guid())
    }

    pub fn with_guid(guid: impl Into<String>) -> Self {
        Event {
            identity: Identity::next(),
            guid: guid.into(),
            name: None,
            description: None,
            location: None,
            start_date: None,
            end_date: None,
            created: None,
            from_name: None,
            from_email: None,
            status: EventStatus::default(),
            class: EventClass::default(),
            transparency: Transparency::default(),
            attendees: Vec::new(),
        }
    }

    /// Create an event with the three fields generation requires.
    pub fn scheduled(name: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        let mut event = Self::new();
        event.set_name(name).set_start_date(start).set_end_date(end);
        event
    }

    /// True if `other` is this event (or a clone of it).
    pub fn is_same(&self, other: &Event) -> bool {
        self.identity == other.identity
    }

    // IDENTIFICATION:

    pub fn guid(&self) -> &str {
        &self.guid
    }

    pub fn set_guid(&mut self, guid: impl Into<String>) -> &mut Self {
        self.guid = guid.into();
        self
    }

    /// Replace the guid with a newly generated one.
    pub fn regenerate_guid(&mut self) -> &mut Self {
        self.guid = generate_guid();
        self
    }

    // TEXT FIELDS:

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn set_location(&mut self, location: impl Into<String>) -> &mut Self {
        self.location = Some(location.into());
        self
    }

    // DATES:

    pub fn start_date(&self) -> Option<NaiveDateTime> {
        self.start_date
    }

    pub fn set_start_date(&mut self, start_date: NaiveDateTime) -> &mut Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn end_date(&self) -> Option<NaiveDateTime> {
        self.end_date
    }

    pub fn set_end_date(&mut self, end_date: NaiveDateTime) -> &mut Self {
        self.end_date = Some(end_date);
        self
    }

    /// Creation date, falling back to the start date when unset.
    pub fn created(&self) -> Option<NaiveDateTime> {
        self.created.or(self.start_date)
    }

    pub fn set_created(&mut self, created: NaiveDateTime) -> &mut Self {
        self.created = Some(created);
        self
    }

    // ORGANIZER:

    pub fn from_name(&self) -> Option<&str> {
        self.from_name.as_deref()
    }

    pub fn set_from_name(&mut self, from_name: impl Into<String>) -> &mut Self {
        self.from_name = Some(from_name.into());
        self
    }

    pub fn from_email(&self) -> Option<&str> {
        self.from_email.as_deref()
    }

    pub fn set_from_email(&mut self, from_email: impl Into<String>) -> &mut Self {
        self.from_email = Some(from_email.into());
        self
    }

    // ENUMERATED PROPERTIES:
    // String arguments outside the enumerated set fall back to the default.

    pub fn status(&self) -> EventStatus {
        self.status
    }

    pub fn set_status(&mut self, status: impl Into<EventStatus>) -> &mut Self {
        self.status = status.into();
        self
    }

    pub fn class(&self) -> EventClass {
        self.class
    }

    pub fn set_class(&mut self, class: impl Into<EventClass>) -> &mut Self {
        self.class = class.into();
        self
    }

    pub fn transparency(&self) -> Transparency {
        self.transparency
    }

    pub fn set_transparency(&mut self, transparency: impl Into<Transparency>) -> &mut Self {
        self.transparency = transparency.into();
        self
    }

    // ATTENDEES:

    pub fn attendees(&self) -> &[Attendee] {
        &self.attendees
    }

    pub fn attendees_mut(&mut self) -> &mut [Attendee] {
        &mut self.attendees
    }

    /// Replace all attendees. Duplicates (by identity) keep their first position.
    pub fn set_attendees(&mut self, attendees: impl IntoIterator<Item = Attendee>) -> &mut Self {
        self.attendees.clear();
        for attendee in attendees {
            self.add_attendee(attendee);
        }
        self
    }

    /// Append an attendee unless this same attendee is already present.
    pub fn add_attendee(&mut self, attendee: Attendee) -> &mut Self {
        if !self.attendees.iter().any(|a| a.is_same(&attendee)) {
            self.attendees.push(attendee);
        }
        self
    }

    pub fn remove_attendee(&mut self, attendee: &Attendee) -> &mut Self {
        self.attendees.retain(|a| !a.is_same(attendee));
        self
    }

    pub fn clear_attendees(&mut self) -> &mut Self {
        self.attendees.clear();
        self
    }

    // GENERATION:

    /// Name, start date and end date are all set.
    pub fn is_valid(&self) -> bool {
        self.name.is_some() && self.start_date.is_some() && self.end_date.is_some()
    }

    /// Generate the VEVENT block with floating dates and verbatim text.
    pub fn generate(&self) -> IcsResult<String> {
        self.generate_in(&RenderContext::default())
    }

    /// Generate the VEVENT block with explicit render options.
    pub fn generate_in(&self, ctx: &RenderContext) -> IcsResult<String> {
        ics::generate_event(self, ctx)
    }

    /// Build a new event from a field record.
    pub fn from_fields(fields: EventFields) -> Self {
        let mut event = Self::new();
        event.apply_fields(fields);
        event
    }

    /// Apply every field present in `fields` through its setter.
    /// Absent fields leave the current value untouched.
    pub fn apply_fields(&mut self, fields: EventFields) -> &mut Self {
        fields.apply_to(self);
        self
    }
}

fn generate_guid() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IcsError;
    use chrono::NaiveDate;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2014, 1, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn empty_event_has_guid_and_nothing_else() {
        let event = Event::new();

        assert!(event.attendees().is_empty());
        assert_eq!(event.name(), None);
        assert_eq!(event.start_date(), None);
        assert_eq!(event.end_date(), None);
        assert!(!event.guid().is_empty());
    }

    #[test]
    fn generated_guids_are_unique() {
        assert_ne!(Event::new().guid(), Event::new().guid());
    }

    #[test]
    fn explicit_guid_is_kept() {
        let event = Event::with_guid("my-guid");
        assert_eq!(event.guid(), "my-guid");
    }

    #[test]
    fn regenerate_guid_replaces_explicit_guid() {
        let mut event = Event::with_guid("my-guid");
        event.regenerate_guid();
        assert_ne!(event.guid(), "my-guid");
        assert!(!event.guid().is_empty());
    }

    #[test]
    fn created_falls_back_to_start_date() {
        let mut event = Event::new();
        assert_eq!(event.created(), None);

        event.set_start_date(at(9));
        assert_eq!(event.created(), Some(at(9)));

        event.set_created(at(7));
        assert_eq!(event.created(), Some(at(7)));
    }

    #[test]
    fn status_defaults_and_falls_back() {
        let mut event = Event::new();
        assert_eq!(event.status(), EventStatus::NeedsAction);

        event.set_status(EventStatus::Cancelled);
        assert_eq!(event.status(), EventStatus::Cancelled);

        event.set_status("FAKE");
        assert_eq!(event.status(), EventStatus::NeedsAction);

        let from_input = String::from("IN-PROCESS");
        event.set_status(from_input);
        assert_eq!(event.status(), EventStatus::InProcess);
    }

    #[test]
    fn class_defaults_and_falls_back() {
        let mut event = Event::new();
        assert_eq!(event.class(), EventClass::Public);

        event.set_class("PRIVATE");
        assert_eq!(event.class(), EventClass::Private);

        event.set_class("FAKE");
        assert_eq!(event.class(), EventClass::Public);
    }

    #[test]
    fn transparency_defaults_and_falls_back() {
        let mut event = Event::new();
        assert_eq!(event.transparency(), Transparency::Opaque);

        event.set_transparency(Transparency::Transparent);
        assert_eq!(event.transparency(), Transparency::Transparent);

        event.set_transparency("FAKE");
        assert_eq!(event.transparency(), Transparency::Opaque);
    }

    #[test]
    fn same_attendee_is_added_once() {
        let mut event = Event::new();
        let attendee = Attendee::new("noone@nowhere.com");

        event.add_attendee(attendee.clone());
        event.add_attendee(attendee.clone());
        assert_eq!(event.attendees().len(), 1);

        event.remove_attendee(&attendee);
        assert!(event.attendees().is_empty());
    }

    #[test]
    fn equal_but_distinct_attendees_are_both_kept() {
        let mut event = Event::new();
        let a = Attendee::new("noone@nowhere.com");
        let b = Attendee::new("noone@nowhere.com");

        event.add_attendee(a.clone()).add_attendee(b);
        assert_eq!(event.attendees().len(), 2);

        event.remove_attendee(&a);
        assert_eq!(event.attendees().len(), 1);
        assert!(!event.attendees().iter().any(|x| x.is_same(&a)));
    }

    #[test]
    fn removing_absent_attendee_is_a_no_op() {
        let mut event = Event::new();
        event.add_attendee(Attendee::new("noone@nowhere.com"));

        event.remove_attendee(&Attendee::new("someone@nowhere.com"));
        assert_eq!(event.attendees().len(), 1);
    }

    #[test]
    fn set_attendees_replaces_and_clear_empties() {
        let mut event = Event::new();
        event.add_attendee(Attendee::new("old@nowhere.com"));

        event.set_attendees([
            Attendee::new("noone@nowhere.com"),
            Attendee::new("noone_again@nowhere.com"),
        ]);
        assert_eq!(event.attendees().len(), 2);
        assert_eq!(event.attendees()[0].email(), Some("noone@nowhere.com"));

        event.clear_attendees();
        assert!(event.attendees().is_empty());
    }

    #[test]
    fn validity_requires_name_and_both_dates() {
        let mut event = Event::new();
        assert!(!event.is_valid());

        event.set_name("Top Secret Event.").set_start_date(at(9));
        assert!(!event.is_valid());
        assert!(matches!(event.generate(), Err(IcsError::Validation(_))));

        event.set_end_date(at(10));
        assert!(event.is_valid());
        assert!(event.generate().is_ok());
    }

    #[test]
    fn generate_matches_full_example() {
        let mut event = Event::with_guid("my-guid");
        event
            .set_from_name("Jim Nobody")
            .set_from_email("nobody.jim@nowhere.com")
            .set_class(EventClass::Private)
            .set_transparency(Transparency::Transparent)
            .set_description("...")
            .set_created(at(8))
            .set_start_date(at(9))
            .set_end_date(at(10))
            .set_name("Top Secret Event.")
            .set_attendees([
                Attendee::with_name("bool.ian@nowhere.com", "Ian Bool"),
                Attendee::with_name("incognito.bill@nowhere.com", "Bill Incognito"),
            ])
            .set_location("The middle of nowhere");

        let expected = [
            "BEGIN:VEVENT",
            "UID:my-guid",
            "DTSTART:20140101T090000",
            "DTEND:20140101T100000",
            "DTSTAMP:20140101T080000",
            "ORGANIZER;CN=Jim Nobody:mailto:nobody.jim@nowhere.com",
            "ATTENDEE;PARTSTAT=NEEDS-ACTION;RSVP=TRUE;CN=Ian Bool;X-NUM-GUESTS=0:mailto:bool.ian@nowhere.com",
            "ATTENDEE;PARTSTAT=NEEDS-ACTION;RSVP=TRUE;CN=Bill Incognito;X-NUM-GUESTS=0:mailto:incognito.bill@nowhere.com",
            "CREATED:20140101T080000",
            "SUMMARY:Top Secret Event.",
            "DESCRIPTION:...",
            "LOCATION:The middle of nowhere",
            "STATUS:NEEDS-ACTION",
            "LAST-MODIFIED:20140101T090000",
            "CLASS:PRIVATE",
            "SEQUENCE:0",
            "TRANSP:TRANSPARENT",
            "END:VEVENT",
        ]
        .map(|line| format!("{line}\r\n"))
        .concat();

        assert_eq!(event.generate().unwrap(), expected);
    }

    #[test]
    fn scheduled_event_is_valid() {
        let event = Event::scheduled("Standup", at(9), at(10));
        assert!(event.is_valid());
        assert_eq!(event.name(), Some("Standup"));
    }
}

//! Event attendees.

use crate::identity::Identity;

/// A participant invited to an event.
///
/// Neither field is validated: any string is accepted for the email, and an
/// unset field renders as an empty value in the ATTENDEE line.
#[derive(Debug, Clone, Default)]
pub struct Attendee {
    identity: Identity,
    name: Option<String>,
    email: Option<String>,
}

impl Attendee {
    /// Create an attendee whose display name is its email address.
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        Attendee {
            identity: Identity::next(),
            name: Some(email.clone()),
            email: Some(email),
        }
    }

    pub fn with_name(email: impl Into<String>, name: impl Into<String>) -> Self {
        Attendee {
            identity: Identity::next(),
            name: Some(name.into()),
            email: Some(email.into()),
        }
    }

    /// True if `other` is this attendee (or a clone of it).
    pub fn is_same(&self, other: &Attendee) -> bool {
        self.identity == other.identity
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: impl Into<String>) -> &mut Self {
        self.email = Some(email.into());
        self
    }
}

impl PartialEq for Attendee {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.email == other.email
    }
}

impl Eq for Attendee {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_attendee_has_no_fields() {
        let attendee = Attendee::default();
        assert_eq!(attendee.name(), None);
        assert_eq!(attendee.email(), None);
    }

    #[test]
    fn name_defaults_to_email() {
        let attendee = Attendee::new("noone@nowhere.com");
        assert_eq!(attendee.email(), Some("noone@nowhere.com"));
        assert_eq!(attendee.name(), Some("noone@nowhere.com"));
    }

    #[test]
    fn explicit_name_is_kept() {
        let attendee = Attendee::with_name("noone@nowhere.com", "Jim Nobody");
        assert_eq!(attendee.email(), Some("noone@nowhere.com"));
        assert_eq!(attendee.name(), Some("Jim Nobody"));
    }

    #[test]
    fn setters_replace_fields() {
        let mut attendee = Attendee::default();
        attendee
            .set_email("noone@nowhere.com")
            .set_name("Jim Nobody");

        assert_eq!(attendee.email(), Some("noone@nowhere.com"));
        assert_eq!(attendee.name(), Some("Jim Nobody"));
    }

    #[test]
    fn equal_values_are_not_the_same_attendee() {
        let a = Attendee::new("noone@nowhere.com");
        let b = Attendee::new("noone@nowhere.com");

        assert_eq!(a, b);
        assert!(!a.is_same(&b));
        assert!(a.is_same(&a.clone()));
    }
}

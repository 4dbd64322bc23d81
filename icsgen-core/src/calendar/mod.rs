//! The VCALENDAR container.

mod method;

pub use method::Method;

use std::path::Path;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::IcsResult;
use crate::event::Event;
use crate::ics::{self, RenderContext, RenderOptions};
use crate::icsgen_config::IcsgenConfig;
use crate::output::{self, DownloadHeaders, SavedFile};
use crate::timezone::{self, ZoneSnapshot};

pub const DEFAULT_PROD_ID: &str = "-//tentwofour//NONSGML iCal Generator//EN";

/// A calendar: timezone context, method, product id and its events.
///
/// The timezone name and offsets are derived once, from the instant the
/// calendar was created. They describe a single STANDARD period; daylight
/// saving transitions are not modelled.
#[derive(Debug, Clone)]
pub struct Calendar {
    timezone_id: String,
    timezone: Tz,
    timezone_name: String,
    timezone_offset_start: String,
    timezone_offset_end: String,
    created_at: DateTime<Utc>,
    prod_id: String,
    method: Method,
    options: RenderOptions,
    events: Vec<Event>,
}

impl Calendar {
    /// Create a calendar in the host's default timezone.
    pub fn new() -> IcsResult<Self> {
        Self::with_timezone(&timezone::host_timezone_id())
    }

    pub fn with_timezone(timezone_id: &str) -> IcsResult<Self> {
        Self::at(timezone_id, Utc::now())
    }

    /// Create a calendar whose timezone details are taken at `instant`.
    pub fn at(timezone_id: &str, instant: DateTime<Utc>) -> IcsResult<Self> {
        let tz = timezone::resolve(timezone_id)?;
        let snapshot = ZoneSnapshot::at(tz, instant);

        log::debug!(
            "Calendar in {timezone_id}: {} {}",
            snapshot.name,
            snapshot.offset
        );

        Ok(Calendar {
            timezone_id: timezone_id.to_string(),
            timezone: tz,
            timezone_name: snapshot.name,
            timezone_offset_start: snapshot.offset.clone(),
            timezone_offset_end: snapshot.offset,
            created_at: instant,
            prod_id: DEFAULT_PROD_ID.to_string(),
            method: Method::default(),
            options: RenderOptions::default(),
            events: Vec::new(),
        })
    }

    /// Create a calendar from configured defaults.
    pub fn from_config(config: &IcsgenConfig) -> IcsResult<Self> {
        let mut calendar = match config.timezone.as_deref() {
            Some(id) => Self::with_timezone(id)?,
            None => Self::new()?,
        };

        if let Some(prod_id) = &config.prod_id {
            calendar.set_prod_id(prod_id.as_str());
        }
        if let Some(method) = config.method {
            calendar.set_method(method);
        }
        calendar.set_options(config.render_options());

        Ok(calendar)
    }

    // TIMEZONE:

    pub fn timezone_id(&self) -> &str {
        &self.timezone_id
    }

    /// Timezone id safe for TZID values (`America/Regina` => `America-Regina`).
    pub fn formatted_timezone_id(&self) -> String {
        timezone::formatted_id(&self.timezone_id)
    }

    /// Switch zones. Name and offsets are re-derived for the new zone at the
    /// calendar's creation instant.
    pub fn set_timezone_id(&mut self, timezone_id: &str) -> IcsResult<&mut Self> {
        let tz = timezone::resolve(timezone_id)?;
        let snapshot = ZoneSnapshot::at(tz, self.created_at);

        self.timezone_id = timezone_id.to_string();
        self.timezone = tz;
        self.timezone_name = snapshot.name;
        self.timezone_offset_start = snapshot.offset.clone();
        self.timezone_offset_end = snapshot.offset;

        Ok(self)
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn timezone_name(&self) -> &str {
        &self.timezone_name
    }

    pub fn set_timezone_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.timezone_name = name.into();
        self
    }

    pub fn timezone_offset_start(&self) -> &str {
        &self.timezone_offset_start
    }

    pub fn set_timezone_offset_start(&mut self, offset: impl Into<String>) -> &mut Self {
        self.timezone_offset_start = offset.into();
        self
    }

    pub fn timezone_offset_end(&self) -> &str {
        &self.timezone_offset_end
    }

    pub fn set_timezone_offset_end(&mut self, offset: impl Into<String>) -> &mut Self {
        self.timezone_offset_end = offset.into();
        self
    }

    // HEADER FIELDS:

    pub fn prod_id(&self) -> &str {
        &self.prod_id
    }

    pub fn set_prod_id(&mut self, prod_id: impl Into<String>) -> &mut Self {
        self.prod_id = prod_id.into();
        self
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// Strings other than PUBLISH and REQUEST are coerced to PUBLISH.
    pub fn set_method(&mut self, method: impl Into<Method>) -> &mut Self {
        self.method = method.into();
        self
    }

    pub fn options(&self) -> RenderOptions {
        self.options
    }

    pub fn set_options(&mut self, options: RenderOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext::new(self.options, self.timezone)
    }

    // EVENTS:

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut [Event] {
        &mut self.events
    }

    /// Replace all events. Duplicates (by identity) keep their first position.
    pub fn set_events(&mut self, events: impl IntoIterator<Item = Event>) -> &mut Self {
        self.events.clear();
        for event in events {
            self.add_event(event);
        }
        self
    }

    /// Append an event unless this same event is already present.
    pub fn add_event(&mut self, event: Event) -> &mut Self {
        if !self.events.iter().any(|e| e.is_same(&event)) {
            self.events.push(event);
        }
        self
    }

    pub fn remove_event(&mut self, event: &Event) -> &mut Self {
        self.events.retain(|e| !e.is_same(event));
        self
    }

    // OUTPUT:

    /// Generate the complete `.ics` text.
    pub fn generate(&self) -> IcsResult<String> {
        ics::generate_calendar(self)
    }

    /// Generate and write to `dir/filename`, adding `.ics` when missing.
    pub fn save(&self, dir: &Path, filename: &str) -> IcsResult<SavedFile> {
        output::save(&self.generate()?, dir, filename)
    }

    pub fn download_headers(&self, filename: &str) -> DownloadHeaders {
        DownloadHeaders::new(filename)
    }
}

//! Terminal rendering for icsgen-core types.
//!
//! Extension traits that add colored output using owo_colors.

use icsgen_core::output::SavedFile;
use icsgen_core::{Calendar, Event};
use owo_colors::OwoColorize;

/// Extension trait for colored terminal rendering.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Calendar {
    fn render(&self) -> String {
        format!(
            "📅 {} {} {}",
            self.timezone_id(),
            self.method().to_string().dimmed(),
            format!("({} events)", self.events().len()).dimmed()
        )
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let name = self.name().unwrap_or("(untitled)");
        let time = match (self.start_date(), self.end_date()) {
            (Some(start), Some(end)) if start.date() == end.date() => format!(
                "{} {}-{}",
                start.format("%Y-%m-%d"),
                start.format("%H:%M"),
                end.format("%H:%M")
            ),
            (Some(start), Some(end)) => format!(
                "{} - {}",
                start.format("%Y-%m-%d %H:%M"),
                end.format("%Y-%m-%d %H:%M")
            ),
            (Some(start), None) => start.format("%Y-%m-%d %H:%M").to_string(),
            _ => String::new(),
        };

        format!("   {} {}", name, time.dimmed())
    }
}

impl Render for SavedFile {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            "✓".green(),
            self.path.display(),
            format!("({} bytes)", self.size).dimmed()
        )
    }
}

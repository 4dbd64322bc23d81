//! Writing generated calendars to disk and serving them over HTTP.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::IcsResult;

pub const FILE_EXTENSION: &str = ".ics";

/// `meeting` => `meeting.ics`, `meeting.ics` unchanged.
pub fn with_extension(filename: &str) -> String {
    if filename.ends_with(FILE_EXTENSION) {
        filename.to_string()
    } else {
        format!("{filename}{FILE_EXTENSION}")
    }
}

/// Where a calendar was written and how many bytes it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    pub path: PathBuf,
    pub size: u64,
}

/// Write `content` to `dir/filename`, creating `dir` if needed.
pub fn save(content: &str, dir: &Path, filename: &str) -> IcsResult<SavedFile> {
    std::fs::create_dir_all(dir)?;

    let path = dir.join(with_extension(filename));
    std::fs::write(&path, content)?;

    log::debug!("Wrote {} bytes to {}", content.len(), path.display());

    Ok(SavedFile {
        path,
        size: content.len() as u64,
    })
}

/// HTTP headers for offering a calendar as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadHeaders {
    filename: String,
}

impl DownloadHeaders {
    pub fn new(filename: &str) -> Self {
        DownloadHeaders {
            filename: with_extension(filename),
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename())
    }

    /// (name, value) pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, String)> {
        [
            ("Content-type", "text/calendar".to_string()),
            ("Pragma", "public".to_string()),
            ("Content-Disposition", self.content_disposition()),
        ]
        .into_iter()
    }
}

impl fmt::Display for DownloadHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.iter() {
            write!(f, "{name}: {value}\r\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IcsError;

    #[test]
    fn extension_is_added_once() {
        assert_eq!(with_extension("meeting"), "meeting.ics");
        assert_eq!(with_extension("meeting.ics"), "meeting.ics");
        assert_eq!(with_extension("meeting.ical"), "meeting.ical.ics");
    }

    #[test]
    fn save_creates_directory_and_writes_content() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out").join("2014");

        let saved = save("BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n", &target, "meeting").unwrap();

        assert_eq!(saved.path, target.join("meeting.ics"));
        assert_eq!(saved.size, 32);
        assert_eq!(
            std::fs::read_to_string(&saved.path).unwrap(),
            "BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n"
        );
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();

        save("first", dir.path(), "a.ics").unwrap();
        let saved = save("second", dir.path(), "a.ics").unwrap();

        assert_eq!(std::fs::read_to_string(saved.path).unwrap(), "second");
    }

    #[test]
    fn save_into_a_file_path_fails_with_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let err = save("x", &blocker, "a").unwrap_err();
        assert!(matches!(err, IcsError::Io(_)));
    }

    #[test]
    fn download_headers_filename_gets_extension() {
        assert_eq!(DownloadHeaders::new("meeting").filename(), "meeting.ics");
        assert_eq!(DownloadHeaders::new("meeting.ics").filename(), "meeting.ics");
    }

    #[test]
    fn download_headers_in_order() {
        let headers = DownloadHeaders::new("meeting");
        let pairs: Vec<_> = headers.iter().collect();

        assert_eq!(
            pairs,
            [
                ("Content-type", "text/calendar".to_string()),
                ("Pragma", "public".to_string()),
                (
                    "Content-Disposition",
                    "attachment; filename=\"meeting.ics\"".to_string()
                ),
            ]
        );
    }

    #[test]
    fn download_headers_display_as_crlf_lines() {
        let headers = DownloadHeaders::new("team.ics");

        assert_eq!(
            headers.to_string(),
            "Content-type: text/calendar\r\n\
             Pragma: public\r\n\
             Content-Disposition: attachment; filename=\"team.ics\"\r\n"
        );
    }
}

//! Global icsgen configuration.

use std::path::{Path, PathBuf};

use config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::calendar::Method;
use crate::error::{IcsError, IcsResult};
use crate::ics::{DateStyle, RenderOptions};

static DEFAULT_OUTPUT_DIR: &str = "~/calendars";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn is_default_output_dir(p: &PathBuf) -> bool {
    *p == default_output_dir()
}

fn is_false(b: &bool) -> bool {
    !*b
}

/// Global configuration at ~/.config/icsgen/config.toml
///
/// Every key is optional. Calendars built from it fall back to the host
/// timezone, the default product id and PUBLISH.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IcsgenConfig {
    #[serde(default = "default_output_dir", skip_serializing_if = "is_default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prod_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<Method>,

    #[serde(default)]
    pub date_style: DateStyle,

    #[serde(default, skip_serializing_if = "is_false")]
    pub escape_text: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub formatted_tzid: bool,
}

impl Default for IcsgenConfig {
    fn default() -> Self {
        IcsgenConfig {
            output_dir: default_output_dir(),
            timezone: None,
            prod_id: None,
            method: None,
            date_style: DateStyle::default(),
            escape_text: false,
            formatted_tzid: false,
        }
    }
}

impl IcsgenConfig {
    pub fn config_path() -> IcsResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| IcsError::Config("Could not determine config directory".into()))?
            .join("icsgen");

        Ok(config_dir.join("config.toml"))
    }

    /// Load ~/.config/icsgen/config.toml, writing a commented default first
    /// if it does not exist yet.
    pub fn load() -> IcsResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load from an explicit path. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> IcsResult<Self> {
        let config: IcsgenConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .build()
            .map_err(|e| IcsError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| IcsError::Config(e.to_string()))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> IcsResult<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| IcsError::Config(e.to_string()))?;

        std::fs::write(path, content)
            .map_err(|e| IcsError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> IcsResult<()> {
        let contents = format!(
            "\
# icsgen configuration

# Where generated .ics files are written:
# output_dir = \"{}\"

# Timezone for new calendars (defaults to the system timezone):
# timezone = \"America/Regina\"

# PRODID of generated calendars:
# prod_id = \"{}\"

# METHOD of generated calendars, PUBLISH or REQUEST:
# method = \"PUBLISH\"

# Event timestamps as floating local time or converted to UTC:
# date_style = \"floating\"

# Escape ; , \\ and newlines in SUMMARY, DESCRIPTION and LOCATION:
# escape_text = false

# Write TZID as America-Regina instead of America/Regina:
# formatted_tzid = false
",
            DEFAULT_OUTPUT_DIR,
            crate::calendar::DEFAULT_PROD_ID,
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                IcsError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| IcsError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Output directory with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            date_style: self.date_style,
            escape_text: self.escape_text,
            formatted_tzid: self.formatted_tzid,
        }
    }
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use icsgen_core::icsgen_config::IcsgenConfig;
use icsgen_core::input::CalendarDocument;
use icsgen_core::Calendar;

use crate::render::Render;

pub struct GenerateArgs {
    pub input: PathBuf,
    pub output_dir: Option<PathBuf>,
    pub filename: Option<String>,
    pub timezone: Option<String>,
    pub method: Option<String>,
    pub stdout: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let config = IcsgenConfig::load()?;
    let calendar = build_calendar(&args, &config)?;

    if args.stdout {
        print!("{}", calendar.generate()?);
        return Ok(());
    }

    let dir = args.output_dir.unwrap_or_else(|| config.output_path());
    let filename = match args.filename {
        Some(name) => name,
        None => default_filename(&args.input)?,
    };

    let saved = calendar
        .save(&dir, &filename)
        .with_context(|| format!("Could not save calendar to {}", dir.display()))?;

    println!("{}", calendar.render());
    for event in calendar.events() {
        println!("{}", event.render());
    }
    println!();
    println!("{}", saved.render());

    Ok(())
}

/// Config defaults, then the input document, then command-line flags.
fn build_calendar(args: &GenerateArgs, config: &IcsgenConfig) -> Result<Calendar> {
    let document = CalendarDocument::from_path(&args.input)
        .with_context(|| format!("Could not load {}", args.input.display()))?;

    let mut calendar = document.into_calendar(config)?;
    log::debug!(
        "Loaded {} event(s) from {}",
        calendar.events().len(),
        args.input.display()
    );

    if let Some(timezone) = &args.timezone {
        calendar.set_timezone_id(timezone)?;
    }
    if let Some(method) = &args.method {
        calendar.set_method(method.as_str());
    }

    Ok(calendar)
}

fn default_filename(input: &Path) -> Result<String> {
    input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .with_context(|| format!("Cannot derive a file name from {}", input.display()))
}

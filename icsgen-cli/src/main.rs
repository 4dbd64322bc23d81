mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "icsgen")]
#[command(about = "Generate iCalendar (.ics) files from TOML or JSON event lists")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a calendar from an input document and write it out
    Generate {
        /// TOML or JSON document (chosen by extension)
        input: PathBuf,

        /// Directory to write into (defaults to output_dir from the config)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// File name; ".ics" is appended when missing (defaults to the input's name)
        #[arg(short, long)]
        filename: Option<String>,

        /// Timezone identifier, e.g. "America/Regina"
        #[arg(short, long)]
        timezone: Option<String>,

        /// PUBLISH or REQUEST
        #[arg(short, long)]
        method: Option<String>,

        /// Print the calendar instead of saving it
        #[arg(long)]
        stdout: bool,
    },
    /// Print HTTP headers for serving a calendar as a download
    Headers { filename: String },
    /// Show what a timezone resolves to (defaults to the system timezone)
    Timezone { timezone: Option<String> },
    /// Show the config path and effective settings
    Config,
}

fn main() -> Result<()> {
    env_logger::builder().init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output_dir,
            filename,
            timezone,
            method,
            stdout,
        } => commands::generate::run(commands::generate::GenerateArgs {
            input,
            output_dir,
            filename,
            timezone,
            method,
            stdout,
        }),
        Commands::Headers { filename } => commands::headers::run(&filename),
        Commands::Timezone { timezone } => commands::timezone::run(timezone.as_deref()),
        Commands::Config => commands::config::run(),
    }
}

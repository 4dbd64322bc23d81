use anyhow::Result;
use icsgen_core::output::DownloadHeaders;
use owo_colors::OwoColorize;

pub fn run(filename: &str) -> Result<()> {
    let headers = DownloadHeaders::new(filename);

    for (name, value) in headers.iter() {
        println!("{}: {}", name.bold(), value);
    }

    Ok(())
}

use anyhow::Result;
use icsgen_core::calendar::DEFAULT_PROD_ID;
use icsgen_core::icsgen_config::IcsgenConfig;
use icsgen_core::timezone;
use owo_colors::OwoColorize;

pub fn run() -> Result<()> {
    let config_path = IcsgenConfig::config_path()?;
    let config = IcsgenConfig::load()?;

    println!("{}", "Paths".bold());
    println!("  Config:     {}", config_path.display());
    println!("  Output:     {}", config.output_path().display());

    println!();
    println!("{}", "Calendar defaults".bold());
    match &config.timezone {
        Some(tz) => println!("  Timezone:   {tz}"),
        None => println!(
            "  Timezone:   {} {}",
            timezone::host_timezone_id(),
            "(system)".dimmed()
        ),
    }
    println!(
        "  PRODID:     {}",
        config.prod_id.as_deref().unwrap_or(DEFAULT_PROD_ID)
    );
    println!("  Method:     {}", config.method.unwrap_or_default());

    let options = config.render_options();
    println!();
    println!("{}", "Output".bold());
    println!("  Dates:      {:?}", options.date_style);
    println!("  Escaping:   {}", on_off(options.escape_text));
    println!("  TZID:       {}", if options.formatted_tzid { "formatted" } else { "raw" });

    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

use anyhow::Result;
use chrono::Utc;
use icsgen_core::timezone::{self, ZoneSnapshot};
use owo_colors::OwoColorize;

pub fn run(timezone_id: Option<&str>) -> Result<()> {
    let id = match timezone_id {
        Some(id) => id.to_string(),
        None => timezone::host_timezone_id(),
    };

    let tz = timezone::resolve(&id)?;
    let snapshot = ZoneSnapshot::at(tz, Utc::now());

    println!("{}", "Timezone".bold());
    println!("  Id:         {id}");
    println!("  TZID:       {}", timezone::formatted_id(&id));
    println!("  Name:       {}", snapshot.name);
    println!("  Offset:     {}", snapshot.offset);

    Ok(())
}

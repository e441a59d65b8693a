// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

use chrono::{Duration, Local};
use luach::{Almanac, Language, LuachConfig, ProportionalClock, SolarDay, Zman};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let now = Local::now();
    let noon = now
        .date_naive()
        .and_hms_opt(12, 0, 0)
        .and_then(|t| t.and_local_timezone(Local).single())
        .ok_or("local noon is ambiguous")?;
    // Fixed equinox-like day; a real caller supplies computed sunrise/sunset.
    let day = SolarDay::new(noon - Duration::hours(6), noon + Duration::hours(6))?;
    let clock = ProportionalClock::new(day);

    for language in [Language::Hebrew, Language::English] {
        let almanac = Almanac::new(LuachConfig::new().with_language(language))?;
        println!("{}\n", almanac.snapshot(&now, Some(&clock)));
    }

    for zman in Zman::ALL {
        if let Some(at) = clock.zman(zman) {
            println!("{:<24} {}", zman.name().alt, at.with_timezone(&Local).format("%H:%M"));
        }
    }
    Ok(())
}

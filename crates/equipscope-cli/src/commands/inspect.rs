//! `equipscope inspect` — equipment rows with status and forecast.

use std::fmt::Write;

use equipscope_core::{EquipmentFilter, EquipmentRow, equipment_rows};

pub struct InspectCommandConfig<'a> {
    pub path: &'a str,
    pub snapshot: bool,
    pub search: &'a str,
    pub critical_only: bool,
    pub palette_path: Option<&'a str>,
    pub json: bool,
}

pub fn run(config: InspectCommandConfig<'_>) {
    let loaded = super::load_batch(config.path, config.snapshot)
        .unwrap_or_else(|e| super::fail(&format!("Failed to read {}", config.path), e));
    let palette = super::load_palette(config.palette_path)
        .unwrap_or_else(|e| super::fail("Failed to load palette", e));

    let filter = EquipmentFilter::new(config.search, config.critical_only);
    let rows = equipment_rows(filter.apply(&loaded.records), &palette);
    log::debug!(
        "{}: {} of {} rows pass the filter",
        loaded.label,
        rows.len(),
        loaded.records.len()
    );

    if config.json {
        match serde_json::to_string_pretty(&rows) {
            Ok(s) => println!("{s}"),
            Err(e) => super::fail("Failed to encode rows", e),
        }
        return;
    }

    print!("{}", render_rows(&rows));
    println!("\n{} of {} units shown", rows.len(), loaded.records.len());
}

/// Fixed-width table of equipment rows.
pub fn render_rows(rows: &[EquipmentRow]) -> String {
    let mut s = String::new();
    let _ = writeln!(
        s,
        "{:<18} {:<14} {:<8} {:>8} {:>8} {:>9} {:>6} {:<9} {:>5}",
        "NAME", "TYPE", "COLOR", "FLOW", "TEMP", "PRESSURE", "GAUGE", "STATUS", "TTF"
    );
    let _ = writeln!(s, "{}", "-".repeat(94));
    for row in rows {
        let ttf = match row.hours_to_failure {
            Some(h) => format!("{h}h"),
            None => "-".to_string(),
        };
        let _ = writeln!(
            s,
            "{:<18} {:<14} {:<8} {:>8.1} {:>8.1} {:>9.2} {:>5.0}% {:<9} {:>5}",
            super::truncate(&row.name, 18),
            super::truncate(&row.category, 14),
            row.category_color,
            row.flow_rate,
            row.temperature,
            row.pressure,
            row.gauge_pct,
            row.status.to_string(),
            ttf
        );
    }
    s
}

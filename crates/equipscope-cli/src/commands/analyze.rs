//! `equipscope analyze` — full derived view of a batch.

use std::fmt::Write;

use equipscope_core::thermal::THERMAL_FALLBACK_CATEGORY;
use equipscope_core::{
    AnalysisResult, CategoryMap, EquipmentRecord, Palette, analyze_with, distribution_slices,
};

pub struct AnalyzeCommandConfig<'a> {
    pub path: &'a str,
    pub snapshot: bool,
    pub penalty: u32,
    pub palette_path: Option<&'a str>,
    pub json: bool,
    pub output: Option<&'a str>,
}

/// Run the analyze command.
pub fn run(cfg: AnalyzeCommandConfig<'_>) {
    let loaded = super::load_batch(cfg.path, cfg.snapshot)
        .unwrap_or_else(|e| super::fail(&format!("Failed to read {}", cfg.path), e));
    let palette = super::load_palette(cfg.palette_path)
        .unwrap_or_else(|e| super::fail("Failed to load palette", e));
    let result = analyze_with(&loaded.records, &super::analysis_config(cfg.penalty));

    let result_json = serde_json::to_string_pretty(&result)
        .unwrap_or_else(|e| super::fail("Failed to encode result", e));

    if cfg.json {
        println!("{result_json}");
    } else {
        print!(
            "{}",
            render_tables(&loaded.label, &loaded.records, &result, &palette, cfg.penalty)
        );
    }

    if let Some(out) = cfg.output {
        match std::fs::write(out, &result_json) {
            Ok(()) => eprintln!("Result written to {out}"),
            Err(e) => super::fail(&format!("Failed to write {out}"), e),
        }
    }
}

/// Human-readable tables for an analysis result.
pub fn render_tables(
    label: &str,
    records: &[EquipmentRecord],
    r: &AnalysisResult,
    palette: &Palette,
    penalty: u32,
) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "Batch: {label} ({} units)", r.total_count);
    let _ = writeln!(
        s,
        "  System health:  {}%  ({} unstable, -{penalty}/unit)",
        r.health_score, r.unstable_count
    );
    let _ = writeln!(s, "  Avg flow:       {:.2} m³/h", r.avg_flow);
    let _ = writeln!(s, "  Avg pressure:   {:.2} bar", r.avg_pressure);
    let _ = writeln!(s, "  Avg temp:       {:.2} °C", r.avg_temperature);
    let _ = writeln!(s, "  Yield:          {:.1}%", r.yield_pct);

    if r.total_count == 0 {
        let _ = writeln!(s, "\nNo equipment rows in this batch.");
        return s;
    }

    let units = thermal_group_units(records);
    let _ = writeln!(s, "\n{:<20} {:>6} {:>10}", "Category", "Units", "Avg °C");
    let _ = writeln!(s, "{}", "-".repeat(38));
    for (category, avg) in r.thermal_profile.iter() {
        let _ = writeln!(
            s,
            "{:<20} {:>6} {:>10.1}",
            super::truncate(category, 20),
            units.get(category).copied().unwrap_or(0),
            avg
        );
    }

    let slices = distribution_slices(&r.type_distribution, palette);
    if !slices.is_empty() {
        let labeled: usize = slices.iter().map(|sl| sl.count).sum();
        let _ = writeln!(
            s,
            "\n{:<20} {:>6} {:>7} {:<8}",
            "Equipment mix", "Units", "Share", "Color"
        );
        let _ = writeln!(s, "{}", "-".repeat(44));
        for slice in &slices {
            let share = slice.count as f64 / labeled as f64 * 100.0;
            let _ = writeln!(
                s,
                "{:<20} {:>6} {:>6.1}% {:<8}",
                super::truncate(&slice.category, 20),
                slice.count,
                share,
                slice.color
            );
        }
    }

    let _ = writeln!(s, "\n{:<20} {:>6} {:>12}", "Inventory", "Qty", "Status");
    let _ = writeln!(s, "{}", "-".repeat(40));
    for line in &r.inventory_status {
        let _ = writeln!(
            s,
            "{:<20} {:>6} {:>12}",
            super::truncate(&line.category, 20),
            line.qty,
            line.status.to_string()
        );
    }
    s
}

/// Rows behind each thermal profile entry, unlabeled ones included.
fn thermal_group_units(records: &[EquipmentRecord]) -> CategoryMap<usize> {
    let mut units = CategoryMap::new();
    for r in records {
        let group = if r.is_labeled() {
            r.category.as_str()
        } else {
            THERMAL_FALLBACK_CATEGORY
        };
        *units.entry_or_insert_with(group, || 0) += 1;
    }
    units
}

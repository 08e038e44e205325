//! `equipscope report` — plain-text parameter report.

use std::fmt::Write;

use equipscope_core::{AnalysisResult, analyze_with};

pub fn run(path: &str, from_snapshot: bool, penalty: u32, output: Option<&str>) {
    let loaded = super::load_batch(path, from_snapshot)
        .unwrap_or_else(|e| super::fail(&format!("Failed to read {path}"), e));
    let result = analyze_with(&loaded.records, &super::analysis_config(penalty));
    let report = render_report(&loaded.label, &result);

    match output {
        Some(out) => match std::fs::write(out, &report) {
            Ok(()) => eprintln!("Report written to {out}"),
            Err(e) => super::fail(&format!("Failed to write {out}"), e),
        },
        None => print!("{report}"),
    }
}

pub fn render_report(file_name: &str, r: &AnalysisResult) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "Chemical Equipment Parameter Report");
    let _ = writeln!(s, "===================================");
    let _ = writeln!(s);
    let _ = writeln!(s, "File Name: {file_name}");
    let _ = writeln!(s, "Total Equipment Count: {}", r.total_count);
    let _ = writeln!(s, "Average Temperature: {:.2} C", r.avg_temperature);
    let _ = writeln!(s, "Average Flowrate: {:.2} m3/h", r.avg_flow);
    let _ = writeln!(s, "Average Pressure: {:.2} bar", r.avg_pressure);
    let _ = writeln!(s, "System Health: {}%", r.health_score);
    let _ = writeln!(s, "Yield: {:.1}%", r.yield_pct);
    let _ = writeln!(s, "Unstable Units: {}", r.unstable_count);

    if !r.inventory_status.is_empty() {
        let _ = writeln!(s);
        let _ = writeln!(s, "Inventory:");
        for line in &r.inventory_status {
            let _ = writeln!(s, "  {}: {} ({})", line.category, line.qty, line.status);
        }
    }
    s
}

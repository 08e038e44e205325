//! `equipscope snapshot` — capture a history snapshot for a batch.

use equipscope_core::{HistorySnapshot, analyze};

pub fn run(path: &str, file_name: Option<&str>, output: Option<&str>) {
    let loaded = super::load_batch(path, false)
        .unwrap_or_else(|e| super::fail(&format!("Failed to read {path}"), e));
    let snap = capture(file_name.unwrap_or(&loaded.label), &loaded.records);

    let json = snap
        .to_json_pretty()
        .unwrap_or_else(|e| super::fail("Failed to encode snapshot", e));

    match output {
        Some(out) => match std::fs::write(out, &json) {
            Ok(()) => eprintln!("Snapshot {} written to {out}\n  {}", snap.id, snap.summary()),
            Err(e) => super::fail(&format!("Failed to write {out}"), e),
        },
        None => println!("{json}"),
    }
}

fn capture(file_name: &str, records: &[equipscope_core::EquipmentRecord]) -> HistorySnapshot {
    HistorySnapshot::capture(file_name, records, &analyze(records))
}

//! `equipscope predict` — hours-to-failure for raw pressure readings.

use equipscope_core::predict_hours_to_failure;

pub fn run(pressures: &[f64]) {
    for &p in pressures {
        println!("{}", forecast_line(p));
    }
}

pub fn forecast_line(pressure: f64) -> String {
    match predict_hours_to_failure(pressure) {
        Some(h) => format!("{pressure:>8.2} bar → {h} h"),
        None => format!("{pressure:>8.2} bar → stable"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_line() {
        assert_eq!(forecast_line(9.0), "    9.00 bar → 21 h");
        assert_eq!(forecast_line(8.0), "    8.00 bar → stable");
        assert_eq!(forecast_line(-1.5), "   -1.50 bar → stable");
        assert!(forecast_line(30.0).ends_with("→ 1 h"));
    }
}

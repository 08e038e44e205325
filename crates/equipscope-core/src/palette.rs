//! Category display colours.
//!
//! A [`Palette`] is plain configuration owned by whoever renders. Unknown
//! categories are legal and resolve to the fallback colour.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::health::StabilityStatus;

/// Colour for categories the palette does not list.
pub const FALLBACK_COLOR: &str = "#6B7280";
/// Accent for units above the critical pressure threshold.
pub const CRITICAL_COLOR: &str = "#FF4D8D";
/// Accent for stable units.
pub const STABLE_COLOR: &str = "#00FFB2";

/// Category → hex colour mapping with a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub colors: HashMap<String, String>,
    pub fallback: String,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = [
            ("Pump", "#22C1EE"),
            ("Compressor", "#FFCE56"),
            ("Reactor", "#00FFB2"),
            ("HeatExchanger", "#9D50BB"),
            ("Valve", "#FF4D8D"),
            ("Condenser", "#4E79F3"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self {
            colors,
            fallback: FALLBACK_COLOR.to_string(),
        }
    }
}

impl Palette {
    /// Colour for `category`, or the fallback.
    pub fn color_for(&self, category: &str) -> &str {
        self.colors
            .get(category)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Load from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Accent colour for a stability status.
pub fn status_color(status: StabilityStatus) -> &'static str {
    match status {
        StabilityStatus::Stable => STABLE_COLOR,
        StabilityStatus::Critical => CRITICAL_COLOR,
    }
}

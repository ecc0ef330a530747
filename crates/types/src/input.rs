use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Flat milling parameters as supplied by the job description JSON.
///
/// Every field is optional. A key missing from the source document deserializes to
/// [`Value::Null`], and present values are kept exactly as written (no coercion, no range checks).
/// Keys outside this set are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MillingParameters {
    pub plunge_feedrate: Value,
    pub safety_height: Value,
    pub unit: Value,
    pub ngs_output: Value,
    pub model_input: Value,
    pub fine_feed: Value,
    pub fine_height: Value,
    pub fine_radius: Value,
    pub fine_shape: Value,
    pub fine_spindle_speed: Value,
    pub rough_feed: Value,
    pub rough_height: Value,
    pub rough_radius: Value,
    pub rough_shape: Value,
    pub rough_spindle_speed: Value,
}

impl MillingParameters {
    /// Names of the keys read from the source document.
    pub const KEYS: [&'static str; 15] = [
        "plunge_feedrate",
        "safety_height",
        "unit",
        "ngs_output",
        "model_input",
        "fine_feed",
        "fine_height",
        "fine_radius",
        "fine_shape",
        "fine_spindle_speed",
        "rough_feed",
        "rough_height",
        "rough_radius",
        "rough_shape",
        "rough_spindle_speed",
    ];

    /// Look up a recognized parameter by its JSON key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        let value = match key {
            "plunge_feedrate" => &self.plunge_feedrate,
            "safety_height" => &self.safety_height,
            "unit" => &self.unit,
            "ngs_output" => &self.ngs_output,
            "model_input" => &self.model_input,
            "fine_feed" => &self.fine_feed,
            "fine_height" => &self.fine_height,
            "fine_radius" => &self.fine_radius,
            "fine_shape" => &self.fine_shape,
            "fine_spindle_speed" => &self.fine_spindle_speed,
            "rough_feed" => &self.rough_feed,
            "rough_height" => &self.rough_height,
            "rough_radius" => &self.rough_radius,
            "rough_shape" => &self.rough_shape,
            "rough_spindle_speed" => &self.rough_spindle_speed,
            _ => return None,
        };
        Some(value)
    }

    /// Recognized keys that carry a non-null value.
    pub fn provided_keys(&self) -> Vec<&'static str> {
        Self::KEYS
            .iter()
            .copied()
            .filter(|key| self.get(key).is_some_and(|value| !value.is_null()))
            .collect()
    }
}

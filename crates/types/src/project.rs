//! PyCAM project document.
//!
//! Field order in every struct follows the sorted key order PyCAM itself writes, so the derived
//! serializers emit keys in the same order (`X-Application` sorts first).
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Complete project file: eight sections, each keyed by an item identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub bounds: BTreeMap<String, Bounds>,
    pub export_settings: BTreeMap<String, ExportSettings>,
    pub exports: BTreeMap<String, Export>,
    pub models: BTreeMap<String, Model>,
    pub processes: BTreeMap<String, Process>,
    pub tasks: BTreeMap<String, Task>,
    pub toolpaths: BTreeMap<String, Toolpath>,
    pub tools: BTreeMap<String, Tool>,
}

impl ProjectDocument {
    /// Top-level section names, in emitted order.
    pub const SECTIONS: [&'static str; 8] = [
        "bounds",
        "export_settings",
        "exports",
        "models",
        "processes",
        "tasks",
        "toolpaths",
        "tools",
    ];
}

/// Vendor extension block carried by most project items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationMeta {
    #[serde(rename = "pycam-gtk")]
    pub gtk: GtkMeta,
}

impl ApplicationMeta {
    pub fn named(name: &str) -> Self {
        Self {
            gtk: GtkMeta {
                color: None,
                name: name.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GtkMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub name: String,
}

/// RGBA display color, components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub alpha: f64,
    pub blue: f64,
    pub green: f64,
    pub red: f64,
}

/// Working envelope expressed as margins around the reference models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    #[serde(rename = "X-Application")]
    pub application: ApplicationMeta,
    pub lower: [i64; 3],
    pub reference_models: Vec<String>,
    pub specification: String,
    pub tool_boundary: String,
    pub upper: [i64; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSettings {
    #[serde(rename = "X-Application")]
    pub application: ApplicationMeta,
    pub gcode: GcodeSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GcodeSettings {
    pub corner_style: CornerStyle,
    pub plunge_feedrate: Value,
    pub safety_height: Value,
    pub step_width: StepWidth,
    pub unit: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerStyle {
    pub mode: String,
    pub motion_tolerance: f64,
    pub naive_tolerance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepWidth {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// G-code export of one or more toolpaths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Export {
    pub format: ExportFormat,
    pub source: ExportSource,
    pub target: ExportTarget,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportFormat {
    pub comment: String,
    pub dialect: String,
    pub export_settings: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSource {
    pub items: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportTarget {
    pub location: Value,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(rename = "X-Application")]
    pub application: ApplicationMeta,
    pub source: ModelSource,
    pub transformations: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSource {
    pub location: Value,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Milling strategy and its geometric parameters.
///
/// `radius_compensation` and `rounded_corners` are stored as the strings `"true"`/`"false"` in
/// the project format, not as YAML booleans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    #[serde(rename = "X-Application")]
    pub application: ApplicationMeta,
    pub grid_direction: String,
    pub milling_style: String,
    pub overlap: f64,
    pub path_pattern: String,
    pub radius_compensation: String,
    pub rounded_corners: String,
    pub spiral_direction: String,
    pub step_down: f64,
    pub strategy: String,
}

/// Binds a tool, a process and a bounds entry into one milling operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "X-Application")]
    pub application: ApplicationMeta,
    pub bounds: String,
    pub collision_models: Vec<String>,
    pub process: String,
    pub tool: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toolpath {
    pub source: ToolpathSource,
    pub transformations: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolpathSource {
    pub item: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "X-Application")]
    pub application: ApplicationMeta,
    pub feed: Value,
    pub height: Value,
    pub radius: Value,
    pub shape: Value,
    pub spindle: Spindle,
    pub tool_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spindle {
    pub speed: Value,
    pub spin_up_delay: String,
    pub spin_up_enabled: String,
}

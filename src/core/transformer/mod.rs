//! Builds the PyCAM project document from flat milling parameters.
//!
//! Everything except the parameter-derived leaves is fixed: the same template is emitted for every
//! job, and missing parameters show up as `null` in the output instead of failing.
use camflow_types::{
    ApplicationMeta, Bounds, Color, CornerStyle, Export, ExportFormat, ExportSettings,
    ExportSource, ExportTarget, GcodeSettings, GtkMeta, MillingParameters, Model, ModelSource,
    Process, ProjectDocument, Spindle, StepWidth, Task, Tool, Toolpath, ToolpathSource,
};
use serde_json::Value;
use std::collections::BTreeMap;

/// Key of the single G-code export.
///
/// PyCAM addresses exports and toolpaths by content hash. These are fixed values copied from a
/// PyCAM-generated project and do not change between runs.
pub const EXPORT_ID: &str = "728de392bf74440486fb862eb9692eff";
/// Key of the toolpath produced by the `rough` task.
pub const ROUGH_TOOLPATH_ID: &str = "819bdee87f134ca9a23ba05af4258972";
/// Key of the toolpath produced by the `fine` task.
pub const FINE_TOOLPATH_ID: &str = "bab6daf625d94288ad8caf134736eb5e";

pub const BOUNDS_ID: &str = "minimal";
pub const EXPORT_SETTINGS_ID: &str = "milling";
pub const MODEL_ID: &str = "model";
pub const SLICING_PROCESS_ID: &str = "process_slicing";
pub const SURFACING_PROCESS_ID: &str = "process_surfacing";
pub const ROUGH_ID: &str = "rough";
pub const FINE_ID: &str = "fine";

pub const EXPORT_COMMENT: &str =
    "Generated by PyCAM 0.7.0~pre0~requirements.589.gc127f00a.dirty: 2021-07-29";

const ROUGH_TOOL_NUMBER: u32 = 1;
const FINE_TOOL_NUMBER: u32 = 2;
const SPIN_UP_DELAY: &str = "2.0";
const STEP_WIDTH: f64 = 0.0001;

/// Assemble the full project document. Pure and total: never fails, never reads global state.
pub fn build_project(params: &MillingParameters) -> ProjectDocument {
    ProjectDocument {
        bounds: bounds(),
        export_settings: export_settings(params),
        exports: exports(params),
        models: models(params),
        processes: processes(),
        tasks: tasks(),
        toolpaths: toolpaths(),
        tools: tools(params),
    }
}

fn bounds() -> BTreeMap<String, Bounds> {
    BTreeMap::from([(
        BOUNDS_ID.to_string(),
        Bounds {
            application: ApplicationMeta::named(BOUNDS_ID),
            lower: [5, 5, 0],
            reference_models: vec![MODEL_ID.to_string()],
            specification: "margins".to_string(),
            tool_boundary: "along".to_string(),
            upper: [5, 5, 1],
        },
    )])
}

fn export_settings(params: &MillingParameters) -> BTreeMap<String, ExportSettings> {
    BTreeMap::from([(
        EXPORT_SETTINGS_ID.to_string(),
        ExportSettings {
            application: ApplicationMeta::named("Milling Settings"),
            gcode: GcodeSettings {
                corner_style: CornerStyle {
                    mode: "optimize_tolerance".to_string(),
                    motion_tolerance: 0.0,
                    naive_tolerance: 0.0,
                },
                plunge_feedrate: params.plunge_feedrate.clone(),
                safety_height: params.safety_height.clone(),
                step_width: StepWidth {
                    x: STEP_WIDTH,
                    y: STEP_WIDTH,
                    z: STEP_WIDTH,
                },
                unit: params.unit.clone(),
            },
        },
    )])
}

fn exports(params: &MillingParameters) -> BTreeMap<String, Export> {
    BTreeMap::from([(
        EXPORT_ID.to_string(),
        Export {
            format: ExportFormat {
                comment: EXPORT_COMMENT.to_string(),
                dialect: "linuxcnc".to_string(),
                export_settings: EXPORT_SETTINGS_ID.to_string(),
                kind: "gcode".to_string(),
            },
            source: ExportSource {
                items: vec![ROUGH_TOOLPATH_ID.to_string(), FINE_TOOLPATH_ID.to_string()],
                kind: "toolpath".to_string(),
            },
            target: ExportTarget {
                location: params.ngs_output.clone(),
                kind: "file".to_string(),
            },
        },
    )])
}

fn models(params: &MillingParameters) -> BTreeMap<String, Model> {
    BTreeMap::from([(
        MODEL_ID.to_string(),
        Model {
            application: ApplicationMeta {
                gtk: GtkMeta {
                    color: Some(Color {
                        alpha: 0.8,
                        blue: 1.0,
                        green: 0.4,
                        red: 0.1,
                    }),
                    name: "cli_part".to_string(),
                },
            },
            source: ModelSource {
                location: params.model_input.clone(),
                kind: "file".to_string(),
            },
            transformations: Vec::new(),
        },
    )])
}

fn processes() -> BTreeMap<String, Process> {
    BTreeMap::from([
        (
            SLICING_PROCESS_ID.to_string(),
            process("Slice (rough)", "y", 0.1, 3.0, "slice"),
        ),
        (
            SURFACING_PROCESS_ID.to_string(),
            process("Surface (fine)", "x", 0.8, 1.0, "surface"),
        ),
    ])
}

fn process(
    name: &str,
    grid_direction: &str,
    overlap: f64,
    step_down: f64,
    strategy: &str,
) -> Process {
    Process {
        application: ApplicationMeta::named(name),
        grid_direction: grid_direction.to_string(),
        milling_style: "ignore".to_string(),
        overlap,
        path_pattern: "grid".to_string(),
        radius_compensation: "false".to_string(),
        rounded_corners: "true".to_string(),
        spiral_direction: "out".to_string(),
        step_down,
        strategy: strategy.to_string(),
    }
}

fn tasks() -> BTreeMap<String, Task> {
    BTreeMap::from([
        (FINE_ID.to_string(), task("Finishing", SURFACING_PROCESS_ID, FINE_ID)),
        (ROUGH_ID.to_string(), task("Quick Removal", SLICING_PROCESS_ID, ROUGH_ID)),
    ])
}

fn task(name: &str, process: &str, tool: &str) -> Task {
    Task {
        application: ApplicationMeta::named(name),
        bounds: BOUNDS_ID.to_string(),
        collision_models: vec![MODEL_ID.to_string()],
        process: process.to_string(),
        tool: tool.to_string(),
        kind: "milling".to_string(),
    }
}

fn toolpaths() -> BTreeMap<String, Toolpath> {
    BTreeMap::from([
        (ROUGH_TOOLPATH_ID.to_string(), toolpath(ROUGH_ID)),
        (FINE_TOOLPATH_ID.to_string(), toolpath(FINE_ID)),
    ])
}

fn toolpath(task: &str) -> Toolpath {
    Toolpath {
        source: ToolpathSource {
            item: task.to_string(),
            kind: "task".to_string(),
        },
        transformations: Vec::new(),
    }
}

fn tools(params: &MillingParameters) -> BTreeMap<String, Tool> {
    BTreeMap::from([
        (
            FINE_ID.to_string(),
            tool(
                "Small Tool",
                FINE_TOOL_NUMBER,
                [
                    &params.fine_feed,
                    &params.fine_height,
                    &params.fine_radius,
                    &params.fine_shape,
                    &params.fine_spindle_speed,
                ],
            ),
        ),
        (
            ROUGH_ID.to_string(),
            tool(
                "Big Tool",
                ROUGH_TOOL_NUMBER,
                [
                    &params.rough_feed,
                    &params.rough_height,
                    &params.rough_radius,
                    &params.rough_shape,
                    &params.rough_spindle_speed,
                ],
            ),
        ),
    ])
}

/// `settings` is `[feed, height, radius, shape, spindle speed]`.
fn tool(name: &str, tool_id: u32, settings: [&Value; 5]) -> Tool {
    let [feed, height, radius, shape, speed] = settings;
    Tool {
        application: ApplicationMeta::named(name),
        feed: feed.clone(),
        height: height.clone(),
        radius: radius.clone(),
        shape: shape.clone(),
        spindle: Spindle {
            speed: speed.clone(),
            spin_up_delay: SPIN_UP_DELAY.to_string(),
            spin_up_enabled: "true".to_string(),
        },
        tool_id,
    }
}

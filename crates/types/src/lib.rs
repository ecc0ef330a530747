//! Records exchanged by the camflow pipeline: the flat milling parameters read from JSON and the
//! PyCAM project document written as YAML.
pub mod input;
pub mod project;

pub use input::MillingParameters;
pub use project::{
    ApplicationMeta, Bounds, Color, CornerStyle, Export, ExportFormat, ExportSettings,
    ExportSource, ExportTarget, GcodeSettings, GtkMeta, Model, ModelSource, Process,
    ProjectDocument, Spindle, StepWidth, Task, Tool, Toolpath, ToolpathSource,
};

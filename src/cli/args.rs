use clap::Parser;
use std::path::PathBuf;

use super::HELP_TEMPLATE;

#[derive(Parser, Debug)]
#[command(name = "camflow")]
#[command(version = crate::VERSION)]
#[command(about = "Convert flat milling parameters (JSON) into a PyCAM project file (YAML)")]
#[command(help_template = HELP_TEMPLATE)]
#[command(
    after_long_help = "Example:\n    camflow -i job.json -o job.yml\n\nRecognized input keys: plunge_feedrate, safety_height, unit, ngs_output, model_input,\nfine_feed, fine_height, fine_radius, fine_shape, fine_spindle_speed, rough_feed,\nrough_height, rough_radius, rough_shape, rough_spindle_speed. Missing keys become null."
)]
pub struct Args {
    /// JSON file holding the milling parameters
    #[arg(short = 'i', long = "input", value_name = "FILE")]
    pub input: PathBuf,

    /// Destination of the generated PyCAM project (YAML)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: PathBuf,
}

pub mod args;
pub mod commands;

pub use args::Args;

use crate::core::AppError;

const HELP_TEMPLATE: &str = "\
{name} {version}\n\
{about-with-newline}\n\
USAGE:\n    {usage}\n\
\nOPTIONS:\n{options}\n\
{after-help}";

#[allow(clippy::result_large_err)]
pub fn run(args: Args) -> Result<(), AppError> {
    commands::convert(&args.input, &args.output)
}

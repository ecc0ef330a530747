pub mod error;
pub mod loader;
pub mod transformer;
pub mod types;
pub mod writer;

pub use error::{AppError, DefaultErrorReporter, ErrorReporter};
pub use loader::load_parameters;
pub use transformer::build_project;
pub use types::*;
pub use writer::write_project;

//! Utility helpers: JSON/YAML serializers and atomic file replacement.
pub mod files;
pub mod serialization;

pub use serialization::FileSerializer;
pub use serialization::FileUtils;
pub use serialization::JsonSerializer;
pub use serialization::Serializer;
pub use serialization::YamlSerializer;

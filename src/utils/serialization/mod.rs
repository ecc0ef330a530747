use crate::utils::files::atomic_write;
use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;

pub trait Serializer {
    fn serialize<T: serde::Serialize>(&self, data: &T) -> Result<Vec<u8>>;
    fn deserialize<T: serde::de::DeserializeOwned>(&self, data: &[u8]) -> Result<T>;
}

pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize<T: serde::Serialize>(&self, data: &T) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(data).map_err(Into::into)
    }

    fn deserialize<T: serde::de::DeserializeOwned>(&self, data: &[u8]) -> Result<T> {
        serde_json::from_slice(data).map_err(Into::into)
    }
}

/// Block-style YAML, the format PyCAM reads and writes project files in.
pub struct YamlSerializer;

impl Serializer for YamlSerializer {
    fn serialize<T: serde::Serialize>(&self, data: &T) -> Result<Vec<u8>> {
        let text = serde_yaml::to_string(data)?;
        Ok(text.into_bytes())
    }

    fn deserialize<T: serde::de::DeserializeOwned>(&self, data: &[u8]) -> Result<T> {
        serde_yaml::from_slice(data).map_err(Into::into)
    }
}

pub trait FileSerializer {
    fn save_to_file<T, S: Serializer>(&self, path: &Path, data: &T, serializer: &S) -> Result<()>
    where
        T: Serialize;
    fn load_from_file<T, S: Serializer>(&self, path: &Path, serializer: &S) -> Result<T>
    where
        T: DeserializeOwned;
}

pub struct FileUtils;

impl FileSerializer for FileUtils {
    fn save_to_file<T, S: Serializer>(&self, path: &Path, data: &T, serializer: &S) -> Result<()>
    where
        T: serde::Serialize,
    {
        let content = serializer.serialize(data)?;
        atomic_write(path, &content)?;
        Ok(())
    }

    fn load_from_file<T, S: Serializer>(&self, path: &Path, serializer: &S) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut file = fs::File::open(path)?;
        let mut content = Vec::new();
        file.read_to_end(&mut content)?;
        serializer.deserialize(&content)
    }
}

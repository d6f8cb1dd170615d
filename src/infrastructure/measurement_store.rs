//! Persistence for the shopper's last-entered measurements
//!
//! The file store keeps a JSON object and owns a single key, `measurements`.
//! Any other keys already in the file are left untouched on save.

use crate::domain::UserMeasurements;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

const MEASUREMENTS_KEY: &str = "measurements";

#[async_trait]
pub trait MeasurementStore: Send + Sync {
    /// Last saved measurements, if any were ever saved.
    async fn load(&self) -> Result<Option<UserMeasurements>>;

    async fn save(&self, measurements: &UserMeasurements) -> Result<()>;
}

/// JSON file store shared with other settings in the same file.
#[derive(Debug, Clone)]
pub struct JsonFileMeasurementStore {
    path: PathBuf,
}

impl JsonFileMeasurementStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read measurements file {:?}", self.path))?;

        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content)
            .with_context(|| format!("Measurements file {:?} is not valid JSON", self.path))?
        {
            Value::Object(map) => Ok(map),
            _ => anyhow::bail!("Measurements file {:?} does not hold a JSON object", self.path),
        }
    }
}

#[async_trait]
impl MeasurementStore for JsonFileMeasurementStore {
    async fn load(&self) -> Result<Option<UserMeasurements>> {
        let document = self.read_document().await?;

        let Some(value) = document.get(MEASUREMENTS_KEY) else {
            debug!("No stored measurements in {:?}", self.path);
            return Ok(None);
        };

        match serde_json::from_value::<UserMeasurements>(value.clone()) {
            Ok(measurements) => Ok(Some(measurements)),
            Err(e) => {
                warn!("Ignoring unreadable stored measurements: {}", e);
                Ok(None)
            }
        }
    }

    async fn save(&self, measurements: &UserMeasurements) -> Result<()> {
        let mut document = self.read_document().await?;
        document.insert(
            MEASUREMENTS_KEY.to_string(),
            serde_json::to_value(measurements).context("Failed to serialize measurements")?,
        );

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("Failed to create directory {dir:?}"))?;
        }

        let content = serde_json::to_string_pretty(&Value::Object(document))
            .context("Failed to serialize measurements file")?;
        fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write measurements file {:?}", self.path))?;

        info!("Saved measurements to {:?}", self.path);
        Ok(())
    }
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct InMemoryMeasurementStore {
    measurements: RwLock<Option<UserMeasurements>>,
}

impl InMemoryMeasurementStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MeasurementStore for InMemoryMeasurementStore {
    async fn load(&self) -> Result<Option<UserMeasurements>> {
        Ok(*self.measurements.read().await)
    }

    async fn save(&self, measurements: &UserMeasurements) -> Result<()> {
        *self.measurements.write().await = Some(*measurements);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_loads_nothing() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileMeasurementStore::new(dir.path().join("measurements.json"));
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_keeps_unrelated_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let store = JsonFileMeasurementStore::new(&path);
        let measurements = UserMeasurements {
            chest: Some(39.0),
            shoulders: None,
            length: Some(28.0),
        };
        store.save(&measurements).await.unwrap();

        let raw: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(store.load().await.unwrap(), Some(measurements));
    }

    #[tokio::test]
    async fn non_object_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let store = JsonFileMeasurementStore::new(&path);
        assert!(store.load().await.is_err());
    }

    #[tokio::test]
    async fn in_memory_store_round_trips() {
        let store = InMemoryMeasurementStore::new();
        assert_eq!(store.load().await.unwrap(), None);

        store.save(&UserMeasurements::with_chest(41.0)).await.unwrap();
        assert_eq!(
            store.load().await.unwrap().and_then(|m| m.chest),
            Some(41.0)
        );
    }
}

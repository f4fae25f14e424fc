use crate::config::{test_or_create_path, FileError};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use surgeapi::SurgeConfig;

/// Bumped: v3->v4 for the empty-subscriptions default template.
pub const SCHEMA_VERSION: u32 = 4;

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
struct StoredProfile {
    version: u32,
    config: SurgeConfig,
    updated_at: String,
}

/// On-disk profile at a fixed path. Writes are best-effort: a failed save is
/// logged and the in-memory configuration stays authoritative.
pub struct ProfileStore {
    path: PathBuf,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, config: &SurgeConfig) {
        if let Err(e) = self.try_save(config) {
            tracing::error!(
                "Failed to save profile {}: {}",
                self.path.to_string_lossy(),
                e
            );
        }
    }

    fn try_save(&self, config: &SurgeConfig) -> Result<(), FileError> {
        if let Some(parent) = self.path.parent() {
            test_or_create_path(parent)?;
        }
        let stored = StoredProfile {
            version: SCHEMA_VERSION,
            config: config.clone(),
            updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        let text = serde_json::to_string(&stored)
            .map_err(|e| FileError::Serde(self.path.to_string_lossy().to_string(), e))?;
        fs::write(&self.path, text)
            .map_err(|e| FileError::Io(self.path.to_string_lossy().to_string(), e))
    }

    /// None when the file is missing, malformed, or carries an older schema
    /// version. There is no migration; stale profiles are ignored wholesale.
    pub fn load(&self) -> Option<SurgeConfig> {
        let text = fs::read_to_string(&self.path).ok()?;
        let stored: StoredProfile = match serde_json::from_str(&text) {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(
                    "Ignored malformed profile {}: {}",
                    self.path.to_string_lossy(),
                    e
                );
                return None;
            }
        };
        if stored.version < SCHEMA_VERSION {
            tracing::warn!(
                "Profile schema version {} is outdated; starting from the template",
                stored.version
            );
            return None;
        }
        Some(stored.config)
    }

    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::error!(
                "Failed to remove profile {}: {}",
                self.path.to_string_lossy(),
                e
            ),
        }
    }
}

pub fn export_json(config: &SurgeConfig) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config)
}

/// None when the text is not valid JSON or misses the required top-level
/// fields (general settings and a rule array).
pub fn import_json(text: &str) -> Option<SurgeConfig> {
    match serde_json::from_str::<SurgeConfig>(text) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config JSON: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surgeapi::{default_config, fresh_id};

    fn scratch_store() -> ProfileStore {
        let path = std::env::temp_dir().join(format!("surgegen-test-{}.json", fresh_id()));
        ProfileStore::new(path)
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = scratch_store();
        let config = default_config();
        store.save(&config);
        let loaded = store.load().unwrap();
        assert_eq!(loaded, config);
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn missing_profile_loads_nothing() {
        let store = scratch_store();
        assert!(store.load().is_none());
    }

    #[test]
    fn malformed_profile_loads_nothing() {
        let store = scratch_store();
        fs::write(store.path(), "not json at all").unwrap();
        assert!(store.load().is_none());
        store.clear();
    }

    #[test]
    fn outdated_schema_loads_nothing() {
        let store = scratch_store();
        let config = default_config();
        let stored = StoredProfile {
            version: SCHEMA_VERSION - 1,
            config: config.clone(),
            updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        fs::write(store.path(), serde_json::to_string(&stored).unwrap()).unwrap();
        assert!(store.load().is_none());

        let current = StoredProfile {
            version: SCHEMA_VERSION,
            ..stored
        };
        fs::write(store.path(), serde_json::to_string(&current).unwrap()).unwrap();
        assert_eq!(store.load().unwrap(), config);
        store.clear();
    }

    #[test]
    fn export_import_round_trips() {
        let config = default_config();
        let json = export_json(&config).unwrap();
        assert_eq!(import_json(&json).unwrap(), config);
    }

    #[test]
    fn import_rejects_incomplete_documents() {
        assert!(import_json("{}").is_none());
        assert!(import_json(r#"{"general":{}}"#).is_none());
        assert!(import_json(r#"{"general":{},"rules":{}}"#).is_none());
        assert!(import_json(r#"{"general":{},"rules":[]}"#).is_some());
    }
}

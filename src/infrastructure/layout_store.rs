// File-backed store for layout preferences
use crate::domain::layout::{LayoutPatch, LayoutPreferences};
use anyhow::{Context, Result};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::sync::Mutex;

pub struct LayoutStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl LayoutStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Read, validate and fall back: a missing or unreadable file yields the
    /// defaults, and each invalid field falls back on its own.
    pub async fn load(&self) -> LayoutPreferences {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return LayoutPreferences::default(),
            Err(e) => {
                tracing::warn!("Could not read layout preferences {}: {}", self.path.display(), e);
                return LayoutPreferences::default();
            }
        };

        match serde_json::from_slice::<LayoutPatch>(&raw) {
            Ok(patch) => LayoutPreferences::default().merged(patch),
            Err(e) => {
                tracing::warn!("Ignoring corrupt layout preferences {}: {}", self.path.display(), e);
                LayoutPreferences::default()
            }
        }
    }

    pub async fn save(&self, prefs: &LayoutPreferences) -> Result<()> {
        let json = serde_json::to_vec_pretty(prefs)?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("Failed to write layout preferences to {}", self.path.display()))
    }

    /// Merge a patch into the stored preferences and persist the result.
    pub async fn update(&self, patch: LayoutPatch) -> Result<LayoutPreferences> {
        let _guard = self.write_lock.lock().await;
        let updated = self.load().await.merged(patch);
        self.save(&updated).await?;
        tracing::info!("Saved layout preferences: {:?}", updated);
        Ok(updated)
    }
}

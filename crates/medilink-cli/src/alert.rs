//! The "recent alert" banner: the latest triage result, kept under a single key on disk
//! and ignored once it is more than an hour old.
use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use medilink::models::triage::TriageResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const ALERT_FILE: &str = "recent_triage.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentAlert {
    pub result: TriageResult,
    pub saved_at: DateTime<Utc>,
}

impl RecentAlert {
    pub fn new(result: TriageResult, saved_at: DateTime<Utc>) -> Self {
        Self { result, saved_at }
    }

    pub fn is_stale_at(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.saved_at) > Duration::hours(1)
    }
}

pub struct AlertStore {
    path: PathBuf,
}

impl AlertStore {
    pub fn at<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn default_location() -> Result<Self> {
        let data_dir =
            dirs::data_dir().ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(Self::at(data_dir.join("medilink").join(ALERT_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, result: &TriageResult) -> Result<()> {
        self.save_alert(&RecentAlert::new(result.clone(), Utc::now()))
    }

    pub fn save_alert(&self, alert: &RecentAlert) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(alert)?;
        fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write alert file {}", self.path.display()))
    }

    /// The stored alert if it exists, parses and is still fresh at `now`
    pub fn load_fresh_at(&self, now: DateTime<Utc>) -> Option<RecentAlert> {
        let contents = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<RecentAlert>(&contents) {
            Ok(alert) if !alert.is_stale_at(now) => Some(alert),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring unreadable alert file");
                None
            }
        }
    }

    pub fn load_fresh(&self) -> Option<RecentAlert> {
        self.load_fresh_at(Utc::now())
    }
}

//! The persisted session identifier.
//!
//! The backend uses the identifier to avoid recommending the same songs
//! twice to one client. It is generated once per installation, written to
//! a small TOML file, and reused on every request from then on.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use uuid::Uuid;

use crate::storage::error::StorageError;

/// Contents of the session file. `created_at` is informational only;
/// nothing rotates or expires the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

/// File-backed home of the session identifier.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the persisted record, generating and saving a fresh one on
    /// first use. Repeated calls against the same path always agree.
    ///
    /// A file that exists but does not parse is an error rather than a
    /// trigger for regeneration, so a corrupted file cannot silently drop
    /// an installation's identifier.
    pub fn load_or_create(&self) -> Result<SessionRecord, StorageError> {
        if self.path.exists() {
            let contents = fs::read_to_string(&self.path)?;
            return Ok(toml::from_str(&contents)?);
        }

        let record = SessionRecord {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        };
        self.save(&record)?;
        info!("created session {} at {}", record.id, self.path.display());

        Ok(record)
    }

    fn save(&self, record: &SessionRecord) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, toml::to_string_pretty(record)?)?;
        Ok(())
    }
}

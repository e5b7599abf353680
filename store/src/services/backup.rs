//! Timestamped backups of the collection files
//!
//! A backup is a snapshot directory named by its creation time,
//! holding copies of whichever collection files exist. Restore copies
//! the snapshot's files back over the live ones; prune keeps the
//! newest N snapshots.

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use chrono::Utc;
use std::fs;
use tracing::{debug, info};

/// Backup management service
pub struct BackupService;

impl BackupService {
    /// Snapshot the collection files into a new timestamped directory.
    ///
    /// Returns the snapshot name. Fails when there is nothing to back
    /// up.
    pub fn create(config: &StoreConfig) -> StoreResult<String> {
        let stamp = Utc::now().format("%Y%m%d_%H%M%S_%6f").to_string();
        let dir = config.backups_dir().join(&stamp);

        let sources = [config.nutrition_path(), config.routines_path()];
        let existing: Vec<_> = sources.iter().filter(|p| p.exists()).collect();
        if existing.is_empty() {
            return Err(StoreError::Backup(
                "no collection files to back up".to_string(),
            ));
        }

        fs::create_dir_all(&dir)?;
        for source in existing {
            // file_name is always present here; the paths come from config
            if let Some(name) = source.file_name() {
                fs::copy(source, dir.join(name))?;
            }
        }
        info!(snapshot = %stamp, "backup created");
        Ok(stamp)
    }

    /// Snapshot names, newest first
    pub fn list(config: &StoreConfig) -> StoreResult<Vec<String>> {
        let root = config.backups_dir();
        if !root.exists() {
            return Ok(Vec::new());
        }
        let mut snapshots = Vec::new();
        for entry in fs::read_dir(&root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                snapshots.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        // Names sort chronologically by construction
        snapshots.sort_by(|a, b| b.cmp(a));
        Ok(snapshots)
    }

    /// Copy a snapshot's collection files back over the live ones
    pub fn restore(config: &StoreConfig, snapshot: &str) -> StoreResult<()> {
        let dir = config.backups_dir().join(snapshot);
        if !dir.is_dir() {
            return Err(StoreError::Backup(format!(
                "backup '{}' not found",
                snapshot
            )));
        }
        for target in [config.nutrition_path(), config.routines_path()] {
            if let Some(name) = target.file_name() {
                let source = dir.join(name);
                if source.exists() {
                    if let Some(parent) = target.parent() {
                        fs::create_dir_all(parent)?;
                    }
                    fs::copy(&source, &target)?;
                    debug!(snapshot, file = %source.display(), "file restored");
                }
            }
        }
        info!(snapshot, "backup restored");
        Ok(())
    }

    /// Delete all but the newest `keep` snapshots.
    ///
    /// Returns how many were removed.
    pub fn prune(config: &StoreConfig, keep: usize) -> StoreResult<usize> {
        let snapshots = Self::list(config)?;
        let mut removed = 0;
        for stale in snapshots.iter().skip(keep) {
            fs::remove_dir_all(config.backups_dir().join(stale))?;
            removed += 1;
        }
        if removed > 0 {
            info!(removed, keep, "old backups pruned");
        }
        Ok(removed)
    }
}

//! # catpoint-adapter-storage-json
//!
//! Repository adapter that keeps the whole security state in one snapshot
//! and, optionally, mirrors it to a JSON file.
//!
//! ## Responsibilities
//! - Implement the `SecurityRepository` port defined in `catpoint-app`
//! - Load the snapshot at startup (a missing file means defaults)
//! - Rewrite the file after every mutation (write to a temp file, then rename)
//!
//! ## Dependency rule
//! Depends on `catpoint-app` (port traits) and `catpoint-domain` only.
//! The app layer never sees the file format.

mod error;

pub use error::StorageError;

use std::collections::BTreeSet;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use catpoint_app::ports::SecurityRepository;
use catpoint_domain::error::CatpointError;
use catpoint_domain::sensor::Sensor;
use catpoint_domain::status::{AlarmStatus, ArmingStatus};

/// Everything the repository stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub arming_status: ArmingStatus,
    pub alarm_status: AlarmStatus,
    pub sensors: BTreeSet<Sensor>,
}

/// [`SecurityRepository`] backed by an in-memory [`Snapshot`], optionally
/// persisted as JSON.
pub struct JsonFileSecurityRepository {
    path: Option<PathBuf>,
    state: Mutex<Snapshot>,
}

impl JsonFileSecurityRepository {
    /// Create a repository that never touches the filesystem.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            state: Mutex::new(Snapshot::default()),
        }
    }

    /// Open (or start) a snapshot file at `path`.
    ///
    /// A missing file yields the default snapshot; it is created on the
    /// first mutation.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the file exists but cannot be read,
    /// or [`StorageError::Json`] if it is not a valid snapshot.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let snapshot = match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no snapshot file, starting empty");
                Snapshot::default()
            }
            Err(err) => return Err(err.into()),
        };
        tracing::debug!(
            path = %path.display(),
            sensors = snapshot.sensors.len(),
            "snapshot loaded"
        );
        Ok(Self {
            path: Some(path),
            state: Mutex::new(snapshot),
        })
    }

    /// The backing file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Snapshot> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `change` to a copy of the snapshot and publish it only once it
    /// is persisted, so a failed write leaves the previous state in place.
    fn mutate(&self, change: impl FnOnce(&mut Snapshot)) -> Result<(), CatpointError> {
        let mut state = self.lock();
        let mut next = state.clone();
        change(&mut next);
        self.persist(&next)?;
        *state = next;
        Ok(())
    }

    fn persist(&self, snapshot: &Snapshot) -> Result<(), StorageError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_string_pretty(snapshot)?;
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl SecurityRepository for JsonFileSecurityRepository {
    fn get_arming_status(
        &self,
    ) -> impl Future<Output = Result<ArmingStatus, CatpointError>> + Send {
        let status = self.lock().arming_status;
        async move { Ok(status) }
    }

    fn set_arming_status(
        &self,
        status: ArmingStatus,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        let result = self.mutate(|s| s.arming_status = status);
        async move { result }
    }

    fn get_alarm_status(&self) -> impl Future<Output = Result<AlarmStatus, CatpointError>> + Send {
        let status = self.lock().alarm_status;
        async move { Ok(status) }
    }

    fn set_alarm_status(
        &self,
        status: AlarmStatus,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        let result = self.mutate(|s| s.alarm_status = status);
        async move { result }
    }

    fn get_sensors(&self) -> impl Future<Output = Result<BTreeSet<Sensor>, CatpointError>> + Send {
        let sensors = self.lock().sensors.clone();
        async move { Ok(sensors) }
    }

    fn add_sensor(&self, sensor: Sensor) -> impl Future<Output = Result<(), CatpointError>> + Send {
        let result = self.mutate(|s| {
            s.sensors.replace(sensor);
        });
        async move { result }
    }

    fn remove_sensor(
        &self,
        sensor: &Sensor,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        let result = self.mutate(|s| {
            s.sensors.remove(sensor);
        });
        async move { result }
    }

    fn update_sensor(
        &self,
        sensor: Sensor,
    ) -> impl Future<Output = Result<(), CatpointError>> + Send {
        let result = self.mutate(|s| {
            s.sensors.replace(sensor);
        });
        async move { result }
    }
}

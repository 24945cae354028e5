//! Access to the low-level runtime's per-container state files.
//!
//! The blob is opaque: nothing here parses or validates it. It is only
//! valid for a container whose namespace-sharing configuration matches
//! the one it was captured from; writing it anywhere else is a caller
//! error this layer does not guard against.

use std::path::{Path, PathBuf};

use nsclone_common::constants;
use nsclone_common::types::ContainerId;

use crate::error::{CloneError, Result};

/// Raw read/write access to runtime state blobs, keyed by container ID.
///
/// Narrow on purpose so tests can substitute an in-memory store instead
/// of touching real host paths.
pub trait RuntimeStateStore: Send + Sync {
    /// Reads the state blob for a container.
    ///
    /// Returns `Ok(None)` when no state file exists; absence is a soft
    /// condition in flows that only opportunistically forward state.
    ///
    /// # Errors
    ///
    /// Returns [`CloneError::StateRead`] if the file exists but cannot
    /// be read.
    fn read(&self, id: &ContainerId) -> Result<Option<Vec<u8>>>;

    /// Overwrites the state blob for a container verbatim.
    ///
    /// No merge, no backup, no atomic replace-then-rename: a crash
    /// mid-write can leave a corrupt state file. The caller is
    /// responsible for only writing while the runtime is not reading.
    ///
    /// # Errors
    ///
    /// Returns [`CloneError::StateWrite`] if the file cannot be written.
    fn write(&self, id: &ContainerId, blob: &[u8]) -> Result<()>;
}

/// Filesystem-backed store rooted at the runtime's state directory,
/// laid out as `<root>/<container-id>/state.json`.
///
/// Assumes the invoking process shares the engine daemon's view of that
/// directory (same host, same mount namespace); this is privileged,
/// host-local filesystem access outside the engine's API surface.
pub struct FsStateStore {
    root: PathBuf,
}

impl FsStateStore {
    /// Creates a store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of a container's state file under this store's root.
    #[must_use]
    pub fn state_path(&self, id: &ContainerId) -> PathBuf {
        self.root
            .join(id.as_str())
            .join(constants::STATE_FILE_NAME)
    }

    /// Returns the store's root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RuntimeStateStore for FsStateStore {
    fn read(&self, id: &ContainerId) -> Result<Option<Vec<u8>>> {
        let path = self.state_path(id);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no runtime state file");
            return Ok(None);
        }
        let blob = std::fs::read(&path).map_err(|source| CloneError::StateRead {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = blob.len(), "runtime state read");
        Ok(Some(blob))
    }

    fn write(&self, id: &ContainerId, blob: &[u8]) -> Result<()> {
        let path = self.state_path(id);
        std::fs::write(&path, blob).map_err(|source| CloneError::StateWrite {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = blob.len(), "runtime state written");
        Ok(())
    }
}

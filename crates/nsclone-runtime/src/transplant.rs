//! Runtime state transplantation.

use nsclone_common::types::ContainerId;

use crate::engine::EngineClient;
use crate::error::{CloneError, Result};
use crate::statestore::RuntimeStateStore;

/// Copies a captured state blob onto a destination container and
/// restarts it so the runtime re-reads the transplanted state.
///
/// The destination must already exist and must not yet have an active
/// process tree tracked by the runtime; otherwise the write/restart
/// produces undefined runtime behavior. That precondition is the
/// caller's responsibility and is not enforced here.
pub struct Transplanter<'a> {
    engine: &'a dyn EngineClient,
    store: &'a dyn RuntimeStateStore,
}

impl<'a> Transplanter<'a> {
    /// Creates a transplanter over the given engine and state store.
    #[must_use]
    pub fn new(engine: &'a dyn EngineClient, store: &'a dyn RuntimeStateStore) -> Self {
        Self { engine, store }
    }

    /// Writes `blob` to the destination's state path, then starts the
    /// destination.
    ///
    /// # Errors
    ///
    /// [`CloneError::StateWrite`] if the overwrite fails (nothing is
    /// rolled back; the destination container keeps whatever state the
    /// partial write left behind). [`CloneError::Restart`] if the
    /// destination cannot be started afterwards.
    pub fn transplant(
        &self,
        source: &ContainerId,
        destination: &ContainerId,
        blob: &[u8],
    ) -> Result<()> {
        self.store.write(destination, blob)?;
        tracing::info!(source = %source, destination = %destination, "runtime state transplanted");

        self.engine
            .start(destination)
            .map_err(|err| CloneError::Restart {
                id: destination.clone(),
                source: err,
            })?;
        tracing::info!(id = %destination, "destination restarted with transplanted state");
        Ok(())
    }
}

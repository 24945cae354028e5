//! Clone provisioning: the create → start sequence.

use nsclone_common::types::{ContainerId, ContainerSpec};

use crate::engine::EngineClient;
use crate::error::{CloneError, Result};

/// Drives the create → start lifecycle for one container.
///
/// Owns exactly that transition: the provisioner neither tracks nor
/// removes containers once their ID has been handed back to the caller.
pub struct Provisioner<'a> {
    engine: &'a dyn EngineClient,
}

impl<'a> Provisioner<'a> {
    /// Creates a provisioner over the given engine client.
    #[must_use]
    pub fn new(engine: &'a dyn EngineClient) -> Self {
        Self { engine }
    }

    /// Creates and starts a container from a fully determined spec.
    ///
    /// Namespace sharing is expressed at creation time; the engine does
    /// not allow joining namespaces after the fact. `start` is only
    /// issued once `create` has returned an ID, and each step runs
    /// exactly once.
    ///
    /// # Errors
    ///
    /// [`CloneError::Create`] if creation fails (nothing exists, nothing
    /// to roll back). [`CloneError::Start`] if the created container
    /// cannot be started: no cleanup is performed, and the orphan's ID
    /// travels in the error so the operator can remove it manually.
    pub fn provision(&self, spec: &ContainerSpec) -> Result<ContainerId> {
        let id = self
            .engine
            .create(spec)
            .map_err(|source| CloneError::Create { source })?;
        tracing::info!(id = %id, name = %spec.name, "container created");

        self.engine.start(&id).map_err(|source| CloneError::Start {
            id: id.clone(),
            source,
        })?;
        tracing::info!(id = %id, "container started");

        Ok(id)
    }
}

//! Clone orchestration.
//!
//! Drives the full sequence: resolve the source, optionally capture its
//! runtime state, provision a namespace-sharing clone, and transplant
//! the captured state. Every step runs at most once, strictly after the
//! previous step's result is known; there are no retries anywhere.
//!
//! Resolution and provisioning failures abort the run. State capture
//! and transplantation failures are downgraded to warnings: a
//! successful namespace-sharing clone stands on its own even when the
//! exact process snapshot could not be mirrored.

use nsclone_common::config::{tokenize_command, CloneDefaults};
use nsclone_common::types::{
    ContainerDescriptor, ContainerId, ContainerSpec, NamespaceShareSpec,
};

use crate::engine::EngineClient;
use crate::error::Result;
use crate::provision::Provisioner;
use crate::resolver;
use crate::statestore::RuntimeStateStore;
use crate::transplant::Transplanter;

/// A fully specified clone operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRequest {
    /// Identifier of the source container (full/partial ID or name).
    pub target: String,
    /// Image for the new container.
    pub image: String,
    /// Name for the new container.
    pub name: String,
    /// Argument vector for the new container's primary process.
    pub command: Vec<String>,
    /// Whether the new container is interactive (stdio + TTY).
    pub interactive: bool,
    /// Whether to capture and transplant the source's runtime state.
    pub copy_state: bool,
}

impl CloneRequest {
    /// Builds a request for `target` with everything else from defaults.
    #[must_use]
    pub fn from_defaults(target: impl Into<String>, defaults: &CloneDefaults) -> Self {
        Self {
            target: target.into(),
            image: defaults.image.clone(),
            name: defaults.name.clone(),
            command: tokenize_command(&defaults.command),
            interactive: defaults.interactive,
            copy_state: false,
        }
    }
}

/// Result of a completed clone operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOutcome {
    /// ID of the newly provisioned container.
    pub id: ContainerId,
    /// Descriptor of the source container the clone shares namespaces with.
    pub source: ContainerDescriptor,
    /// Whether the source's runtime state was transplanted onto the clone.
    pub transplanted: bool,
    /// Soft failures encountered along the way (state capture/transplant).
    pub warnings: Vec<String>,
}

/// Runs the full clone sequence, resolving the source first.
///
/// # Errors
///
/// Returns the resolver's or provisioner's error unchanged; see
/// [`run_with_source`] for the post-resolution semantics.
pub fn run(
    engine: &dyn EngineClient,
    store: &dyn RuntimeStateStore,
    request: &CloneRequest,
) -> Result<CloneOutcome> {
    let source = resolver::resolve(engine, &request.target)?;
    run_with_source(engine, store, request, source)
}

/// Runs the clone sequence against an already resolved source.
///
/// # Errors
///
/// Returns [`crate::error::CloneError::Create`] or
/// [`crate::error::CloneError::Start`] when provisioning fails; a start
/// failure carries the orphaned container's ID, which is left behind
/// deliberately. State capture and transplant failures never surface as
/// errors — they are recorded in [`CloneOutcome::warnings`] and the
/// provisioned clone keeps running on its own namespace-shared identity.
pub fn run_with_source(
    engine: &dyn EngineClient,
    store: &dyn RuntimeStateStore,
    request: &CloneRequest,
    source: ContainerDescriptor,
) -> Result<CloneOutcome> {
    let mut warnings = Vec::new();

    // Capture before provisioning; the blob is forwarded opportunistically
    // and its absence only disables the transplant step.
    let blob = if request.copy_state {
        match store.read(&source.id) {
            Ok(Some(blob)) => Some(blob),
            Ok(None) => {
                tracing::warn!(id = %source.id, "source has no runtime state file; transplant skipped");
                warnings.push(format!(
                    "source container {} has no runtime state file; cloning without state",
                    source.id
                ));
                None
            }
            Err(err) => {
                tracing::warn!(id = %source.id, error = %err, "could not read source runtime state; transplant skipped");
                warnings.push(format!("could not read source runtime state: {err}"));
                None
            }
        }
    } else {
        None
    };

    let spec = ContainerSpec {
        image: request.image.clone(),
        command: request.command.clone(),
        interactive: request.interactive,
        namespace_share: NamespaceShareSpec::from_source(&source.id),
        name: request.name.clone(),
    };
    let id = Provisioner::new(engine).provision(&spec)?;

    let mut transplanted = false;
    if let Some(blob) = blob {
        match Transplanter::new(engine, store).transplant(&source.id, &id, &blob) {
            Ok(()) => transplanted = true,
            Err(err) => {
                tracing::warn!(id = %id, error = %err, "state transplant failed; clone keeps its own runtime state");
                warnings.push(format!("state transplant failed: {err}"));
            }
        }
    }

    tracing::info!(id = %id, source = %source.id, transplanted, "clone complete");
    Ok(CloneOutcome {
        id,
        source,
        transplanted,
        warnings,
    })
}

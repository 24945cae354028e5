//! Source container resolution.

use nsclone_common::types::ContainerDescriptor;

use crate::engine::EngineClient;
use crate::error::{CloneError, Result};

/// Resolves a container identifier into a full descriptor.
///
/// Read-only and attempted exactly once; an inspection failure is fatal
/// to the whole clone operation. The engine handles partial-ID and name
/// resolution, so anything it accepts for inspection is accepted here.
///
/// # Errors
///
/// Returns [`CloneError::EmptyTarget`] for a blank identifier and
/// [`CloneError::Resolve`] when inspection fails, with the original
/// identifier attached.
pub fn resolve(engine: &dyn EngineClient, target: &str) -> Result<ContainerDescriptor> {
    if target.trim().is_empty() {
        return Err(CloneError::EmptyTarget);
    }
    tracing::debug!(id = target, "inspecting source container");
    let descriptor = engine.inspect(target).map_err(|source| CloneError::Resolve {
        id: target.to_owned(),
        source,
    })?;
    tracing::info!(
        id = %descriptor.id,
        name = %descriptor.name,
        status = %descriptor.status,
        "source container resolved"
    );
    Ok(descriptor)
}

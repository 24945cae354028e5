//! Container engine client boundary.
//!
//! The clone flow only needs three engine operations; everything behind
//! them (transport, API version, response decoding) is an implementation
//! detail of the adapter. [`docker::DockerEngine`] is the production
//! implementation; tests substitute in-memory mocks.

pub mod docker;

use nsclone_common::types::{ContainerDescriptor, ContainerId, ContainerSpec};

use crate::error::EngineError;

/// Minimal engine capability consumed by the clone flow.
///
/// All calls are blocking and are issued strictly sequentially; no call
/// is made before the previous one's result is known.
pub trait EngineClient: Send + Sync {
    /// Inspects a container by full or partial ID, or by name.
    ///
    /// The returned descriptor carries the canonical full ID, which is
    /// required for namespace-share directives and state paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the container is unknown or the engine is
    /// unreachable.
    fn inspect(&self, id: &str) -> Result<ContainerDescriptor, EngineError>;

    /// Creates a container from a fully determined spec, returning the
    /// engine-assigned ID. The namespace-share directives in the spec are
    /// immutable after this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is unknown, a namespace-share
    /// reference is invalid, or the engine rejects the configuration.
    fn create(&self, spec: &ContainerSpec) -> Result<ContainerId, EngineError>;

    /// Starts a previously created container.
    ///
    /// # Errors
    ///
    /// Returns an error if the container cannot be started, e.g. a
    /// referenced namespace source is already gone.
    fn start(&self, id: &ContainerId) -> Result<(), EngineError>;
}

//! Error taxonomy for the clone flow.
//!
//! Resolution and provisioning failures are fatal to the run. State-file
//! failures (`StateRead`, `StateWrite`, `Restart`) are returned by the
//! lower layers like any other error; only the orchestration flow
//! downgrades them to warnings, so that a successful namespace-sharing
//! clone is not undone by an unrelated state-file problem.

use std::path::PathBuf;

use nsclone_common::types::ContainerId;
use thiserror::Error;

/// Failure reported by the container engine boundary.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine does not know the requested container.
    #[error("container not found: {message}")]
    NotFound {
        /// Engine-supplied detail.
        message: String,
    },

    /// Any other engine API failure.
    #[error("{message}")]
    Api {
        /// Engine-supplied detail.
        message: String,
    },
}

/// Errors produced by the clone flow.
#[derive(Debug, Error)]
pub enum CloneError {
    /// No source container identifier was supplied.
    #[error("no source container identifier supplied")]
    EmptyTarget,

    /// Inspecting the source container failed. Fatal; nothing was created.
    #[error("failed to inspect container {id}: {source}")]
    Resolve {
        /// Identifier as supplied by the caller.
        id: String,
        /// Underlying engine failure.
        source: EngineError,
    },

    /// Creating the destination container failed. Fatal; nothing to
    /// roll back.
    #[error("failed to create container: {source}")]
    Create {
        /// Underlying engine failure.
        source: EngineError,
    },

    /// Starting the freshly created container failed. The created
    /// container is left behind; `id` is surfaced so the operator can
    /// inspect or remove it manually.
    #[error("failed to start container {id}: {source}")]
    Start {
        /// ID of the created-but-not-started container.
        id: ContainerId,
        /// Underlying engine failure.
        source: EngineError,
    },

    /// Reading a runtime state file failed.
    #[error("failed to read runtime state at {path}: {source}")]
    StateRead {
        /// Path of the unreadable state file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Writing the destination's runtime state file failed. Not rolled
    /// back; a crash mid-write can leave a corrupt state file.
    #[error("failed to write runtime state to {path}: {source}")]
    StateWrite {
        /// Path of the state file that could not be written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Restarting the destination after the state write failed. The
    /// destination keeps running on its own namespace-shared identity.
    #[error("failed to restart container {id} after state transplant: {source}")]
    Restart {
        /// Destination container ID.
        id: ContainerId,
        /// Underlying engine failure.
        source: EngineError,
    },

    /// The engine endpoint could not be reached at all.
    #[error("failed to connect to the container engine: {message}")]
    Connect {
        /// Connection failure detail.
        message: String,
    },
}

/// Convenience alias for clone-flow results.
pub type Result<T> = std::result::Result<T, CloneError>;

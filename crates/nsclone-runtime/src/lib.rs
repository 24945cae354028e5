//! Clone provisioning runtime for nsclone.
//!
//! Resolves a source container, provisions a new container that joins the
//! source's PID, network, and IPC namespaces, and optionally transplants
//! the source's low-level runtime state onto the new container.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod engine;
pub mod error;
pub mod flow;
pub mod provision;
pub mod resolver;
pub mod statestore;
pub mod transplant;

//! # nsclone-common
//!
//! Shared types, defaults, and constants used across the nsclone
//! workspace.
//!
//! This crate is the leaf of the dependency graph — it depends on no other
//! internal crate and provides the foundational primitives that the runtime
//! and CLI crates build upon. The error taxonomy lives in
//! `nsclone-runtime`, next to the operations that produce it.

pub mod config;
pub mod constants;
pub mod types;

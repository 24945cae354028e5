//! Integration tests for the clone flow.
//!
//! These tests are implemented in:
//! `crates/nsclone-runtime/tests/clone_flow_test.rs`
//!
//! Covered scenarios:
//! - `clone_shares_all_three_namespaces_with_source`: pid/net/ipc all reference the source
//! - `start_is_only_issued_after_create_returns`: create → start ordering
//! - `start_failure_surfaces_the_orphan_id_without_cleanup`: no automatic rollback
//! - `copy_state_transplants_blob_and_restarts_destination`: transplant ordering and verbatim copy
//! - `missing_source_state_skips_transplant_with_warning`: soft miss, success-with-warning
//! - `state_write_failure_does_not_undo_the_provisioned_clone`: failure isolation

//! End-to-end tests for the clone flow against mock collaborators.
//!
//! A recording engine client and an in-memory state store share one event
//! log, so call ordering across the engine and filesystem boundaries can
//! be asserted directly:
//! 1. Namespace-share derivation from the resolved source
//! 2. create → start ordering and the no-cleanup orphan contract
//! 3. Opportunistic state capture and transplantation
//! 4. Failure isolation between provisioning and transplantation

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use nsclone_common::types::{ContainerDescriptor, ContainerId, ContainerSpec, ContainerStatus};
use nsclone_runtime::engine::EngineClient;
use nsclone_runtime::error::{CloneError, EngineError};
use nsclone_runtime::flow::{self, CloneRequest};
use nsclone_runtime::statestore::RuntimeStateStore;

// ── Mock collaborators ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Inspect(String),
    Create(String),
    Start(String),
    StateRead(String),
    StateWrite(String),
}

type EventLog = Arc<Mutex<Vec<Event>>>;

struct MockEngine {
    log: EventLog,
    source: ContainerDescriptor,
    created: Mutex<Vec<ContainerSpec>>,
    new_id: &'static str,
    fail_create: bool,
    /// 1-based index of the `start` call that should fail, if any.
    fail_start_on_call: Option<usize>,
    start_calls: Mutex<usize>,
}

impl MockEngine {
    fn new(log: EventLog) -> Self {
        Self {
            log,
            source: ContainerDescriptor {
                id: ContainerId::new("abc123"),
                name: "web".to_owned(),
                status: ContainerStatus::Running,
                image: "ubuntu".to_owned(),
            },
            created: Mutex::new(Vec::new()),
            new_id: "def456",
            fail_create: false,
            fail_start_on_call: None,
            start_calls: Mutex::new(0),
        }
    }

    fn created_specs(&self) -> Vec<ContainerSpec> {
        self.created.lock().unwrap().clone()
    }
}

impl EngineClient for MockEngine {
    fn inspect(&self, id: &str) -> Result<ContainerDescriptor, EngineError> {
        self.log.lock().unwrap().push(Event::Inspect(id.to_owned()));
        if id == self.source.id.as_str() || id == self.source.name {
            Ok(self.source.clone())
        } else {
            Err(EngineError::NotFound {
                message: format!("no such container: {id}"),
            })
        }
    }

    fn create(&self, spec: &ContainerSpec) -> Result<ContainerId, EngineError> {
        self.log.lock().unwrap().push(Event::Create(spec.name.clone()));
        if self.fail_create {
            return Err(EngineError::Api {
                message: "no such image".to_owned(),
            });
        }
        self.created.lock().unwrap().push(spec.clone());
        Ok(ContainerId::new(self.new_id))
    }

    fn start(&self, id: &ContainerId) -> Result<(), EngineError> {
        self.log.lock().unwrap().push(Event::Start(id.to_string()));
        let mut calls = self.start_calls.lock().unwrap();
        *calls += 1;
        if self.fail_start_on_call == Some(*calls) {
            return Err(EngineError::Api {
                message: "namespace source is gone".to_owned(),
            });
        }
        Ok(())
    }
}

struct MemoryStore {
    log: EventLog,
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    fail_write: bool,
}

impl MemoryStore {
    fn new(log: EventLog) -> Self {
        Self {
            log,
            blobs: Mutex::new(HashMap::new()),
            fail_write: false,
        }
    }

    fn with_blob(log: EventLog, id: &str, blob: &[u8]) -> Self {
        let store = Self::new(log);
        let _ = store
            .blobs
            .lock()
            .unwrap()
            .insert(id.to_owned(), blob.to_vec());
        store
    }

    fn blob(&self, id: &str) -> Option<Vec<u8>> {
        self.blobs.lock().unwrap().get(id).cloned()
    }
}

impl RuntimeStateStore for MemoryStore {
    fn read(&self, id: &ContainerId) -> Result<Option<Vec<u8>>, CloneError> {
        self.log
            .lock()
            .unwrap()
            .push(Event::StateRead(id.to_string()));
        Ok(self.blobs.lock().unwrap().get(id.as_str()).cloned())
    }

    fn write(&self, id: &ContainerId, blob: &[u8]) -> Result<(), CloneError> {
        self.log
            .lock()
            .unwrap()
            .push(Event::StateWrite(id.to_string()));
        if self.fail_write {
            return Err(CloneError::StateWrite {
                path: std::path::PathBuf::from(id.as_str()).join("state.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        let _ = self
            .blobs
            .lock()
            .unwrap()
            .insert(id.as_str().to_owned(), blob.to_vec());
        Ok(())
    }
}

fn request(target: &str) -> CloneRequest {
    CloneRequest {
        target: target.to_owned(),
        image: "alpine".to_owned(),
        name: "clone1".to_owned(),
        command: vec!["/bin/sh".to_owned(), "-c".to_owned(), "sleep infinity".to_owned()],
        interactive: false,
        copy_state: false,
    }
}

// ── Provisioning ─────────────────────────────────────────────────────

#[test]
fn clone_shares_all_three_namespaces_with_source() {
    let log: EventLog = EventLog::default();
    let engine = MockEngine::new(log.clone());
    let store = MemoryStore::new(log);

    let outcome = flow::run(&engine, &store, &request("abc123")).expect("clone succeeds");

    assert_eq!(outcome.id.as_str(), "def456");
    assert_ne!(outcome.id, outcome.source.id);
    assert_eq!(outcome.source.image, "ubuntu");
    assert!(!outcome.transplanted);
    assert!(outcome.warnings.is_empty());

    let specs = engine.created_specs();
    assert_eq!(specs.len(), 1);
    let share = &specs[0].namespace_share;
    assert_eq!(share.pid_mode().as_deref(), Some("container:abc123"));
    assert_eq!(share.network_mode().as_deref(), Some("container:abc123"));
    assert_eq!(share.ipc_mode().as_deref(), Some("container:abc123"));
    assert_eq!(specs[0].command, vec!["/bin/sh", "-c", "sleep infinity"]);
    assert_eq!(specs[0].image, "alpine");
}

#[test]
fn start_is_only_issued_after_create_returns() {
    let log: EventLog = EventLog::default();
    let engine = MockEngine::new(log.clone());
    let store = MemoryStore::new(log.clone());

    let _outcome = flow::run(&engine, &store, &request("abc123")).expect("clone succeeds");

    let events = log.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            Event::Inspect("abc123".to_owned()),
            Event::Create("clone1".to_owned()),
            Event::Start("def456".to_owned()),
        ]
    );
}

#[test]
fn resolve_failure_is_fatal_and_creates_nothing() {
    let log: EventLog = EventLog::default();
    let engine = MockEngine::new(log.clone());
    let store = MemoryStore::new(log.clone());

    let err = flow::run(&engine, &store, &request("nope")).unwrap_err();

    assert!(matches!(err, CloneError::Resolve { .. }));
    let events = log.lock().unwrap().clone();
    assert_eq!(events, vec![Event::Inspect("nope".to_owned())]);
}

#[test]
fn create_failure_is_terminal_with_nothing_to_start() {
    let log: EventLog = EventLog::default();
    let mut engine = MockEngine::new(log.clone());
    engine.fail_create = true;
    let store = MemoryStore::new(log.clone());

    let err = flow::run(&engine, &store, &request("abc123")).unwrap_err();

    assert!(matches!(err, CloneError::Create { .. }));
    let events = log.lock().unwrap().clone();
    assert!(!events.iter().any(|e| matches!(e, Event::Start(_))));
}

#[test]
fn start_failure_surfaces_the_orphan_id_without_cleanup() {
    let log: EventLog = EventLog::default();
    let mut engine = MockEngine::new(log.clone());
    engine.fail_start_on_call = Some(1);
    let store = MemoryStore::new(log);

    let err = flow::run(&engine, &store, &request("abc123")).unwrap_err();

    match err {
        CloneError::Start { id, .. } => assert_eq!(id.as_str(), "def456"),
        other => panic!("expected Start error, got {other}"),
    }
    // The created container stays behind; nothing in the flow removes it.
    assert_eq!(engine.created_specs().len(), 1);
}

// ── State transplantation ────────────────────────────────────────────

#[test]
fn copy_state_transplants_blob_and_restarts_destination() {
    let log: EventLog = EventLog::default();
    let engine = MockEngine::new(log.clone());
    let store = MemoryStore::with_blob(log.clone(), "abc123", b"{\"init_process_pid\":42}");

    let mut req = request("abc123");
    req.copy_state = true;
    let outcome = flow::run(&engine, &store, &req).expect("clone succeeds");

    assert!(outcome.transplanted);
    assert!(outcome.warnings.is_empty());
    assert_eq!(
        store.blob("def456").as_deref(),
        Some(b"{\"init_process_pid\":42}".as_slice())
    );

    let events = log.lock().unwrap().clone();
    assert_eq!(
        events,
        vec![
            Event::Inspect("abc123".to_owned()),
            Event::StateRead("abc123".to_owned()),
            Event::Create("clone1".to_owned()),
            Event::Start("def456".to_owned()),
            Event::StateWrite("def456".to_owned()),
            Event::Start("def456".to_owned()),
        ]
    );
}

#[test]
fn missing_source_state_skips_transplant_with_warning() {
    let log: EventLog = EventLog::default();
    let engine = MockEngine::new(log.clone());
    let store = MemoryStore::new(log);

    let mut req = request("abc123");
    req.copy_state = true;
    let outcome = flow::run(&engine, &store, &req).expect("clone still succeeds");

    assert_eq!(outcome.id.as_str(), "def456");
    assert!(!outcome.transplanted);
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("no runtime state file"));
    assert_eq!(store.blob("def456"), None);
}

#[test]
fn state_write_failure_does_not_undo_the_provisioned_clone() {
    let log: EventLog = EventLog::default();
    let engine = MockEngine::new(log.clone());
    let mut store = MemoryStore::with_blob(log.clone(), "abc123", b"{}");
    store.fail_write = true;

    let mut req = request("abc123");
    req.copy_state = true;
    let outcome = flow::run(&engine, &store, &req).expect("provisioning outcome is unchanged");

    assert_eq!(outcome.id.as_str(), "def456");
    assert!(!outcome.transplanted);
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("state transplant failed"));

    // The clone was started during provisioning and stays running.
    let events = log.lock().unwrap().clone();
    assert!(events.contains(&Event::Start("def456".to_owned())));
}

#[test]
fn restart_failure_after_transplant_is_a_warning() {
    let log: EventLog = EventLog::default();
    let mut engine = MockEngine::new(log.clone());
    engine.fail_start_on_call = Some(2);
    let store = MemoryStore::with_blob(log, "abc123", b"{}");

    let mut req = request("abc123");
    req.copy_state = true;
    let outcome = flow::run(&engine, &store, &req).expect("clone outcome stands");

    assert!(!outcome.transplanted);
    assert_eq!(outcome.warnings.len(), 1);
    assert!(outcome.warnings[0].contains("state transplant failed"));
}

#[test]
fn state_is_never_touched_unless_requested() {
    let log: EventLog = EventLog::default();
    let engine = MockEngine::new(log.clone());
    let store = MemoryStore::with_blob(log.clone(), "abc123", b"{}");

    let _outcome = flow::run(&engine, &store, &request("abc123")).expect("clone succeeds");

    let events = log.lock().unwrap().clone();
    assert!(!events
        .iter()
        .any(|e| matches!(e, Event::StateRead(_) | Event::StateWrite(_))));
}

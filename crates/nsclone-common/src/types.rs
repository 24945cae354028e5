//! Domain primitive types used across the nsclone workspace.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a container instance, assigned by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(String);

impl ContainerId {
    /// Creates a container ID from a string value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether the identifier is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle state of a container as reported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContainerStatus {
    /// Container has been created but not yet started.
    Created,
    /// Container is actively running.
    Running,
    /// Container is paused.
    Paused,
    /// Container is restarting.
    Restarting,
    /// Container has exited.
    Exited,
    /// Container is dead (failed teardown).
    Dead,
    /// Engine reported a state this client does not recognize.
    Unknown,
}

impl ContainerStatus {
    /// Maps an engine-reported state string onto the known set.
    /// Unrecognized values become [`Self::Unknown`] rather than an error;
    /// the status is informational only.
    #[must_use]
    pub fn from_engine(s: &str) -> Self {
        match s {
            "created" => Self::Created,
            "running" => Self::Running,
            "paused" => Self::Paused,
            "restarting" => Self::Restarting,
            "exited" => Self::Exited,
            "dead" => Self::Dead,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for ContainerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "created"),
            Self::Running => write!(f, "running"),
            Self::Paused => write!(f, "paused"),
            Self::Restarting => write!(f, "restarting"),
            Self::Exited => write!(f, "exited"),
            Self::Dead => write!(f, "dead"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Snapshot of a container produced by engine inspection.
///
/// The `id` field is always the canonical full ID, which is what
/// namespace-share directives and state paths are keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerDescriptor {
    /// Canonical full container ID.
    pub id: ContainerId,
    /// Human-readable container name.
    pub name: String,
    /// Lifecycle state at inspection time.
    pub status: ContainerStatus,
    /// Image the container was created from.
    pub image: String,
}

/// Namespace-sharing directives for a new container.
///
/// Either all three subsystems join the same source container, or none do.
/// The constructors are the only way to build one, so partial sharing is
/// not expressible even though the underlying directive format allows it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceShareSpec {
    /// Container whose PID namespace the clone joins.
    pub pid_source: Option<ContainerId>,
    /// Container whose network namespace the clone joins.
    pub net_source: Option<ContainerId>,
    /// Container whose IPC namespace the clone joins.
    pub ipc_source: Option<ContainerId>,
}

impl NamespaceShareSpec {
    /// Derives a share spec that joins all three namespaces of `source`.
    ///
    /// An empty source ID yields no directives at all, i.e. the clone
    /// gets private namespaces.
    #[must_use]
    pub fn from_source(source: &ContainerId) -> Self {
        if source.is_empty() {
            return Self::default();
        }
        Self {
            pid_source: Some(source.clone()),
            net_source: Some(source.clone()),
            ipc_source: Some(source.clone()),
        }
    }

    /// A spec with no share directives: the clone gets private namespaces.
    #[must_use]
    pub fn private() -> Self {
        Self::default()
    }

    /// Returns whether any share directive is set.
    #[must_use]
    pub fn is_shared(&self) -> bool {
        self.pid_source.is_some() || self.net_source.is_some() || self.ipc_source.is_some()
    }

    /// Engine directive for the PID namespace, e.g. `container:<id>`.
    #[must_use]
    pub fn pid_mode(&self) -> Option<String> {
        self.pid_source.as_ref().map(container_mode)
    }

    /// Engine directive for the network namespace.
    #[must_use]
    pub fn network_mode(&self) -> Option<String> {
        self.net_source.as_ref().map(container_mode)
    }

    /// Engine directive for the IPC namespace.
    #[must_use]
    pub fn ipc_mode(&self) -> Option<String> {
        self.ipc_source.as_ref().map(container_mode)
    }
}

fn container_mode(id: &ContainerId) -> String {
    format!("container:{id}")
}

/// Full specification of a container to be created.
///
/// Determined before creation and immutable afterwards; namespace sharing
/// cannot be changed on an existing container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerSpec {
    /// Image to create the container from.
    pub image: String,
    /// Argument vector for the container's primary process.
    pub command: Vec<String>,
    /// Whether stdio attachment and a pseudo-terminal are enabled.
    /// The four underlying engine flags are not independently settable.
    pub interactive: bool,
    /// Namespace-sharing directives.
    pub namespace_share: NamespaceShareSpec,
    /// Name for the new container.
    pub name: String,
}

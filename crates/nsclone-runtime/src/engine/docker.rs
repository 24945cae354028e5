//! Docker Engine API adapter.
//!
//! Wraps the async `bollard` client behind the blocking [`EngineClient`]
//! trait. A dedicated current-thread tokio runtime drives each call to
//! completion before the next one is issued, so the flow stays strictly
//! sequential. The client is pinned to one API version and never
//! negotiates.

use bollard::container::{
    Config, CreateContainerOptions, InspectContainerOptions, StartContainerOptions,
};
use bollard::models::HostConfig;
use bollard::{ClientVersion, Docker};

use nsclone_common::constants;
use nsclone_common::types::{ContainerDescriptor, ContainerId, ContainerSpec, ContainerStatus};

use super::EngineClient;
use crate::error::{CloneError, EngineError};

/// Pinned engine API version.
const API_VERSION: ClientVersion = ClientVersion {
    major_version: constants::DOCKER_API_MAJOR,
    minor_version: constants::DOCKER_API_MINOR,
};

/// Per-request timeout applied by the HTTP client.
const CLIENT_TIMEOUT_SECS: u64 = 120;

/// Blocking engine client backed by the local Docker daemon.
pub struct DockerEngine {
    docker: Docker,
    runtime: tokio::runtime::Runtime,
}

impl DockerEngine {
    /// Connects to the Docker daemon on the default Unix socket.
    ///
    /// # Errors
    ///
    /// Returns [`CloneError::Connect`] if the client cannot be built.
    pub fn connect() -> Result<Self, CloneError> {
        Self::connect_to(constants::DEFAULT_DOCKER_SOCKET)
    }

    /// Connects to the Docker daemon on an explicit Unix socket path.
    ///
    /// # Errors
    ///
    /// Returns [`CloneError::Connect`] if the client cannot be built.
    pub fn connect_to(socket: &str) -> Result<Self, CloneError> {
        let docker = Docker::connect_with_socket(socket, CLIENT_TIMEOUT_SECS, &API_VERSION)
            .map_err(|err| CloneError::Connect {
                message: err.to_string(),
            })?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| CloneError::Connect {
                message: format!("failed to build client runtime: {err}"),
            })?;
        let version = format!(
            "{}.{}",
            API_VERSION.major_version, API_VERSION.minor_version
        );
        tracing::debug!(socket, %version, "engine client connected");
        Ok(Self { docker, runtime })
    }
}

impl EngineClient for DockerEngine {
    fn inspect(&self, id: &str) -> Result<ContainerDescriptor, EngineError> {
        let response = self
            .runtime
            .block_on(self.docker.inspect_container(id, None::<InspectContainerOptions>))?;

        // Only the ID is load-bearing; everything else is informational
        // and degrades to empty/unknown when the engine omits it.
        let full_id = response.id.ok_or_else(|| EngineError::Api {
            message: format!("inspect response for {id} carries no container ID"),
        })?;
        let name = response
            .name
            .map(|n| n.trim_start_matches('/').to_owned())
            .unwrap_or_default();
        let status = response
            .state
            .and_then(|s| s.status)
            .map_or(ContainerStatus::Unknown, |s| {
                ContainerStatus::from_engine(&s.to_string())
            });
        let image = response.config.and_then(|c| c.image).unwrap_or_default();

        Ok(ContainerDescriptor {
            id: ContainerId::new(full_id),
            name,
            status,
            image,
        })
    }

    fn create(&self, spec: &ContainerSpec) -> Result<ContainerId, EngineError> {
        let host_config = HostConfig {
            auto_remove: Some(false),
            pid_mode: spec.namespace_share.pid_mode(),
            network_mode: spec.namespace_share.network_mode(),
            ipc_mode: spec.namespace_share.ipc_mode(),
            ..HostConfig::default()
        };

        // Interactive maps onto all four stdio flags plus the TTY at once;
        // they are not independently settable.
        let config = Config {
            image: Some(spec.image.clone()),
            cmd: Some(spec.command.clone()),
            attach_stdin: Some(spec.interactive),
            attach_stdout: Some(spec.interactive),
            attach_stderr: Some(spec.interactive),
            open_stdin: Some(spec.interactive),
            stdin_once: Some(false),
            tty: Some(spec.interactive),
            host_config: Some(host_config),
            ..Config::default()
        };

        let options = CreateContainerOptions {
            name: spec.name.clone(),
            platform: None,
        };

        let response = self
            .runtime
            .block_on(self.docker.create_container(Some(options), config))?;
        for warning in &response.warnings {
            tracing::warn!(name = %spec.name, warning, "engine warning during create");
        }
        Ok(ContainerId::new(response.id))
    }

    fn start(&self, id: &ContainerId) -> Result<(), EngineError> {
        self.runtime.block_on(
            self.docker
                .start_container(id.as_str(), None::<StartContainerOptions<String>>),
        )?;
        Ok(())
    }
}

impl From<bollard::errors::Error> for EngineError {
    fn from(err: bollard::errors::Error) -> Self {
        match err {
            bollard::errors::Error::DockerResponseServerError {
                status_code: 404,
                message,
            } => Self::NotFound { message },
            other => Self::Api {
                message: other.to_string(),
            },
        }
    }
}

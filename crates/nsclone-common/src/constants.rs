//! System-wide constants and default paths.

/// Directory where the low-level runtime (runc, as driven by the Docker
/// daemon) keeps per-container state on a stock Linux install.
pub const RUNTIME_STATE_ROOT: &str = "/var/run/docker/runtime-runc/moby";

/// File name of the opaque runtime state blob inside a container's
/// state directory.
pub const STATE_FILE_NAME: &str = "state.json";

/// Unix socket the Docker daemon listens on by default.
pub const DEFAULT_DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// Engine API version the client is pinned to. The client never
/// negotiates a different version.
pub const DOCKER_API_MAJOR: usize = 1;
/// Minor component of the pinned engine API version.
pub const DOCKER_API_MINOR: usize = 45;

/// Image used for the clone when none is requested.
pub const DEFAULT_IMAGE: &str = "alpine";

/// Name given to the clone when none is requested.
pub const DEFAULT_CONTAINER_NAME: &str = "cloned-cont";

/// Command tokens used when the operator supplies no command line.
/// Keeps the clone alive indefinitely so it can be attached to.
pub const FALLBACK_COMMAND: [&str; 3] = ["/bin/sh", "-c", "sleep infinity"];

/// Application name used in CLI output.
pub const APP_NAME: &str = "nsclone";

/// Binary name for the CLI.
pub const BIN_NAME: &str = "nscl";

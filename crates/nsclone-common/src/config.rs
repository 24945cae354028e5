//! Default configuration for the clone flow.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Defaults applied to a clone request when the operator leaves a field
/// unset. Passed explicitly into the flow so tests can substitute
/// arbitrary values; nothing reads these as ambient globals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloneDefaults {
    /// Image for the new container.
    pub image: String,
    /// Name for the new container.
    pub name: String,
    /// Command line for the new container, tokenized on whitespace.
    pub command: String,
    /// Whether the new container is interactive (stdio + TTY).
    pub interactive: bool,
    /// Root of the low-level runtime's per-container state directory.
    pub runtime_state_root: PathBuf,
}

impl Default for CloneDefaults {
    fn default() -> Self {
        Self {
            image: constants::DEFAULT_IMAGE.to_owned(),
            name: constants::DEFAULT_CONTAINER_NAME.to_owned(),
            command: String::new(),
            interactive: false,
            runtime_state_root: PathBuf::from(constants::RUNTIME_STATE_ROOT),
        }
    }
}

/// Splits a command line into an argument vector on whitespace.
///
/// No quoting or escaping is supported. Empty input falls back to an
/// indefinite-sleep shell command so the clone stays attachable.
#[must_use]
pub fn tokenize_command(cmd: &str) -> Vec<String> {
    if cmd.trim().is_empty() {
        return constants::FALLBACK_COMMAND.iter().map(|s| (*s).to_owned()).collect();
    }
    cmd.split_whitespace().map(str::to_owned).collect()
}

//! # nscl — nsclone CLI
//!
//! Clones the runtime identity of a running container: attaches a fresh
//! container to an existing workload's PID, network, and IPC namespaces
//! without disturbing it.

mod commands;
mod output;

use clap::Parser;

use crate::commands::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
        )
        .init();

    let cli = Cli::parse();
    commands::execute(cli)
}

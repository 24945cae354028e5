//! CLI command definitions and dispatch.

pub mod clone;
pub mod inspect;

use clap::{Parser, Subcommand};

/// nsclone — attach a fresh container to a running workload's namespaces.
#[derive(Parser, Debug)]
#[command(name = "nscl", version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,

    /// Unix socket of the container engine daemon.
    #[arg(long, global = true, default_value = nsclone_common::constants::DEFAULT_DOCKER_SOCKET)]
    pub socket: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Clone a container's namespace identity into a new container.
    Clone(clone::CloneArgs),
    /// Resolve a container and print its descriptor.
    Inspect(inspect::InspectArgs),
}

/// Dispatches the parsed CLI command to its handler.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Clone(args) => clone::execute(args, &cli.socket),
        Command::Inspect(args) => inspect::execute(&args, &cli.socket),
    }
}

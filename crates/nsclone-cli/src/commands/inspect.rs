//! `nscl inspect` — Resolve a container and print its descriptor.

use clap::Args;
use nsclone_runtime::engine::docker::DockerEngine;
use nsclone_runtime::resolver;

use crate::output;

/// Arguments for the `inspect` command.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Container ID or name to inspect.
    #[arg(value_name = "TARGET")]
    pub target: String,
}

/// Executes the `inspect` command.
///
/// # Errors
///
/// Returns an error if the container cannot be resolved.
pub fn execute(args: &InspectArgs, socket: &str) -> anyhow::Result<()> {
    let engine = DockerEngine::connect_to(socket)?;
    let descriptor = resolver::resolve(&engine, &args.target)?;
    eprintln!();
    output::print_descriptor(&descriptor);
    println!("{}", descriptor.id);
    Ok(())
}

//! `nscl clone` — Provision a container that joins a source container's
//! PID, network, and IPC namespaces.

use std::io::{BufRead, Write};

use clap::Args;
use nsclone_common::config::{tokenize_command, CloneDefaults};
use nsclone_runtime::engine::docker::DockerEngine;
use nsclone_runtime::error::CloneError;
use nsclone_runtime::flow::{self, CloneRequest};
use nsclone_runtime::resolver;
use nsclone_runtime::statestore::FsStateStore;

use crate::output::{self, BOLD, DIM, GREEN, RESET};

/// Arguments for the `clone` command.
#[derive(Args, Debug)]
pub struct CloneArgs {
    /// Source container ID or name.
    #[arg(value_name = "TARGET")]
    pub target: Option<String>,

    /// Source container ID, overriding the positional argument.
    #[arg(long = "target", value_name = "ID")]
    pub target_flag: Option<String>,

    /// Image to use for the new container.
    #[arg(long, default_value = nsclone_common::constants::DEFAULT_IMAGE)]
    pub image: String,

    /// Name for the new container.
    #[arg(long, default_value = nsclone_common::constants::DEFAULT_CONTAINER_NAME)]
    pub name: String,

    /// Command to run in the new container (whitespace-tokenized;
    /// empty keeps the container alive with an indefinite sleep).
    #[arg(long, default_value = "")]
    pub cmd: String,

    /// Run the new container in interactive mode with a TTY.
    #[arg(short, long)]
    pub interactive: bool,

    /// Also transplant the source's low-level runtime state onto the clone.
    #[arg(long)]
    pub copy_state: bool,
}

/// Executes the `clone` command.
///
/// # Errors
///
/// Returns an error if the source cannot be resolved or the clone cannot
/// be provisioned. Transplant-phase failures are reported as warnings
/// and do not fail the command.
pub fn execute(args: CloneArgs, socket: &str) -> anyhow::Result<()> {
    let target = resolve_target(&args)?;
    let defaults = CloneDefaults::default();

    let engine = DockerEngine::connect_to(socket)?;
    let store = FsStateStore::new(defaults.runtime_state_root.clone());
    tracing::debug!(source = %target, socket, copy_state = args.copy_state, "starting clone");

    let source = resolver::resolve(&engine, &target)?;
    eprintln!();
    eprintln!("  Cloning namespaces of:");
    output::print_descriptor(&source);

    let request = CloneRequest {
        target: source.id.to_string(),
        image: args.image,
        name: args.name,
        command: tokenize_command(&args.cmd),
        interactive: args.interactive,
        copy_state: args.copy_state,
    };

    let outcome = match flow::run_with_source(&engine, &store, &request, source) {
        Ok(outcome) => outcome,
        Err(err) => {
            if let CloneError::Start { ref id, .. } = err {
                // The created container is left behind on purpose; hand
                // the operator its ID for manual inspection or removal.
                eprintln!();
                eprintln!(
                    "  Container {BOLD}{}{RESET} was created but not started; remove it manually if unwanted.",
                    id
                );
            }
            return Err(err.into());
        }
    };

    eprintln!();
    eprintln!(
        "  {GREEN}{BOLD}Cloned{RESET} {BOLD}{}{RESET} {DIM}[{}]{RESET}",
        request.name,
        output::short_id(outcome.id.as_str())
    );
    if outcome.transplanted {
        eprintln!("  Runtime state transplanted from {}.", output::short_id(outcome.source.id.as_str()));
    }
    for warning in &outcome.warnings {
        output::print_warning(warning);
    }
    println!("{}", outcome.id);
    Ok(())
}

/// Picks the source container identifier: flag first, then the
/// positional argument, then an interactive prompt.
fn resolve_target(args: &CloneArgs) -> anyhow::Result<String> {
    if let Some(target) = args.target_flag.clone().or_else(|| args.target.clone()) {
        return Ok(target);
    }
    prompt_for_target()
}

fn prompt_for_target() -> anyhow::Result<String> {
    eprint!("Enter container ID: ");
    std::io::stderr().flush()?;
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line)?;
    let target = line.trim().to_owned();
    if target.is_empty() {
        anyhow::bail!("no container ID supplied");
    }
    Ok(target)
}

//! YAML command scripts and the runner that replays them.

use serde::Deserialize;
use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};
use wl_core::{ContainerId, Real, Tolerances};
use wl_network::{NetworkResult, WaterNetwork};

use crate::error::{CliError, CliResult};
use crate::render;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Script {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    AddContainer { id: ContainerId },
    AddWater { id: ContainerId, amount: Real },
    Connect { a: ContainerId, b: ContainerId },
    Disconnect { a: ContainerId, b: ContainerId },
    Status,
}

impl Step {
    /// Apply to the network. `Status` is a no-op here; the runner prints it.
    pub fn apply(&self, network: &WaterNetwork) -> NetworkResult<()> {
        match *self {
            Step::AddContainer { id } => network.add_container(id),
            Step::AddWater { id, amount } => network.add_water(id, amount),
            Step::Connect { a, b } => network.connect(a, b),
            Step::Disconnect { a, b } => network.disconnect(a, b),
            Step::Status => Ok(()),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::AddContainer { id } => write!(f, "add container {id}"),
            Step::AddWater { id, amount } => write!(f, "add {amount} to container {id}"),
            Step::Connect { a, b } => write!(f, "connect {a} and {b}"),
            Step::Disconnect { a, b } => write!(f, "disconnect {a} and {b}"),
            Step::Status => write!(f, "status"),
        }
    }
}

pub fn load_script(path: &Path) -> CliResult<Script> {
    let text = std::fs::read_to_string(path).map_err(|source| CliError::ScriptRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&text)
}

pub fn parse_script(text: &str) -> CliResult<Script> {
    Ok(serde_yaml::from_str(text)?)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub json: bool,
    /// Verify network invariants after every step.
    pub check: Option<Tolerances>,
    /// Report failed steps and continue instead of stopping.
    pub keep_going: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub applied: usize,
    pub failed: usize,
}

/// Replay `script` against `network`, writing a transcript to `out`.
///
/// Step numbers in the transcript and in errors are 1-based. With
/// `options.json` only status documents are written to `out`; failed steps
/// are logged instead.
pub fn run_script(
    network: &WaterNetwork,
    script: &Script,
    options: RunOptions,
    out: &mut impl Write,
) -> CliResult<RunSummary> {
    info!(script = %script.name, steps = script.steps.len(), "running script");
    if !options.json {
        writeln!(out, "== {}", script.name)?;
    }

    let mut summary = RunSummary::default();
    for (i, step) in script.steps.iter().enumerate() {
        let index = i + 1;
        match step {
            Step::Status => {
                let status = network.status()?;
                render::write_status(out, &status, options.json)?;
            }
            _ => match step.apply(network) {
                Ok(()) => {
                    summary.applied += 1;
                    if !options.json {
                        writeln!(out, "step {index}: {step}")?;
                    }
                }
                Err(source) if options.keep_going => {
                    summary.failed += 1;
                    if options.json {
                        warn!(index, step = %step, error = %source, "step failed, continuing");
                    } else {
                        writeln!(out, "step {index}: {step} failed: {source}")?;
                    }
                }
                Err(source) => {
                    return Err(CliError::StepFailed {
                        index,
                        step: step.to_string(),
                        source,
                    });
                }
            },
        }

        if let Some(tol) = options.check {
            network
                .check_invariants(tol)
                .map_err(|source| CliError::InvariantViolated { index, source })?;
        }
    }
    Ok(summary)
}

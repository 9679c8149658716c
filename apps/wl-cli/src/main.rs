use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::Level;
use wl_core::Tolerances;
use wl_network::WaterNetwork;

mod demo;
mod error;
mod render;
mod script;

use error::CliResult;
use script::{RunOptions, RunSummary, Script, load_script, run_script};

#[derive(Parser)]
#[command(name = "wl-cli")]
#[command(about = "WaterLevel CLI - connected container leveling", long_about = None)]
struct Cli {
    /// Log every network operation
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the built-in four-container demonstration
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run a YAML command script
    Run {
        /// Path to the script YAML file
        script_path: PathBuf,
        /// Report failed steps and continue
        #[arg(long)]
        keep_going: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Print status snapshots as JSON
    #[arg(long)]
    json: bool,
    /// Verify network invariants after every step
    #[arg(long)]
    check: bool,
    /// Absolute tolerance for the invariant check
    #[arg(long, default_value_t = Tolerances::default().abs)]
    abs_tol: f64,
    /// Relative tolerance for the invariant check
    #[arg(long, default_value_t = Tolerances::default().rel)]
    rel_tol: f64,
}

impl OutputArgs {
    fn run_options(&self, keep_going: bool) -> RunOptions {
        RunOptions {
            json: self.json,
            check: self.check.then_some(Tolerances {
                abs: self.abs_tol,
                rel: self.rel_tol,
            }),
            keep_going,
        }
    }
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for status output
    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Demo { output } => cmd_demo(&output),
        Commands::Run {
            script_path,
            keep_going,
            output,
        } => cmd_run(&script_path, keep_going, &output),
    }
}

fn cmd_demo(output: &OutputArgs) -> CliResult<()> {
    let script = demo::demo_script();
    execute(&script, output.run_options(false))
}

fn cmd_run(script_path: &Path, keep_going: bool, output: &OutputArgs) -> CliResult<()> {
    let script = load_script(script_path)?;
    execute(&script, output.run_options(keep_going))
}

fn execute(script: &Script, options: RunOptions) -> CliResult<()> {
    let network = WaterNetwork::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let RunSummary { applied, failed } = run_script(&network, script, options, &mut out)?;
    if !options.json {
        writeln!(out, "✓ {applied} steps applied, {failed} failed")?;
    }
    Ok(())
}

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod error;
mod report;
mod script;

use error::CliResult;
use report::{SchemeReport, render_text, snapshot};

#[derive(Parser)]
#[command(name = "aw-cli")]
#[command(about = "AWiring CLI - replay wiring scripts and inspect potentials", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate script syntax and pole references
    Check {
        /// Path to the wiring script YAML file
        script_path: PathBuf,
    },
    /// Apply the script steps and report the resulting potentials
    Replay {
        /// Path to the wiring script YAML file
        script_path: PathBuf,
        /// Print the potentials after every step
        #[arg(long)]
        verbose: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { script_path } => cmd_check(&script_path),
        Commands::Replay {
            script_path,
            verbose,
            format,
        } => cmd_replay(&script_path, verbose, format),
    }
}

fn cmd_check(script_path: &Path) -> CliResult<()> {
    println!("Checking script: {}", script_path.display());
    let script = script::load_script(script_path)?;
    let scheme = script::build_scheme(&script)?;
    script::validate_steps(&scheme, &script)?;
    println!(
        "✓ Script is valid ({} elements, {} steps)",
        script.elements.len(),
        script.steps.len()
    );
    Ok(())
}

fn cmd_replay(script_path: &Path, verbose: bool, format: Format) -> CliResult<()> {
    let script = script::load_script(script_path)?;
    let mut scheme = script::build_scheme(&script)?;
    script::validate_steps(&scheme, &script)?;

    let mut reports = Vec::new();
    for step in &script.steps {
        script::apply_step(&mut scheme, step)?;
        if verbose {
            reports.push((step.to_string(), snapshot(&scheme)?));
        }
    }
    let last = snapshot(&scheme)?;

    match format {
        Format::Text => {
            for (step, report) in &reports {
                println!("> {step}");
                print!("{}", render_text(report));
            }
            print!("{}", render_text(&last));
        }
        Format::Json => {
            let steps: Vec<&SchemeReport> = reports.iter().map(|(_, r)| r).collect();
            let value = serde_json::json!({ "steps": steps, "result": last });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

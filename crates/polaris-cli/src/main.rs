//! Polaris CLI - command-line interface for the SAT solver.

use anyhow::Context;
use clap::Parser;
use polaris_dpll::{DpllSolver, VsidsConfig};
use polaris_portfolio::{builtin_configs, config_by_name, run_portfolio, Decision};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "polaris")]
#[command(author, version, about = "Parallel-portfolio DPLL SAT solver", long_about = None)]
struct Cli {
    /// Path to a DIMACS CNF file
    #[arg(short, long)]
    file: PathBuf,

    /// Verbosity level (-v, -vv, -vvv); on SAT also dumps the assignment
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Race all built-in configurations and take the first answer
    #[arg(short, long)]
    portfolio: bool,

    /// Single-config mode: one of mc|ga|sl|ih
    #[arg(short, long, default_value = "mc", conflicts_with = "portfolio")]
    config: String,

    /// Custom portfolio: path to a JSON array of heuristic configurations
    #[arg(long, requires = "portfolio")]
    configs: Option<PathBuf>,

    /// Deadline in seconds for portfolio mode
    #[arg(short, long, default_value_t = 30)]
    timeout: u64,
}

fn load_configs(path: &Path) -> anyhow::Result<Vec<VsidsConfig>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let configs: Vec<VsidsConfig> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    anyhow::ensure!(
        !configs.is_empty(),
        "config file {} holds no configurations",
        path.display()
    );
    Ok(configs)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let cnf = polaris_format::parse_path(&cli.file)
        .with_context(|| format!("failed to parse {}", cli.file.display()))?;
    tracing::info!(
        vars = cnf.num_vars,
        clauses = cnf.clauses.len(),
        "parsed {}",
        cli.file.display()
    );

    let start = Instant::now();
    let (decision, assignment, config_name) = if cli.portfolio {
        let configs = match &cli.configs {
            Some(path) => load_configs(path)?,
            None => builtin_configs(),
        };
        let outcome = run_portfolio(
            cnf.num_vars,
            &cnf.clauses,
            &configs,
            Duration::from_secs(cli.timeout),
        );
        (outcome.decision, outcome.assignment, outcome.config_name)
    } else {
        let config = config_by_name(&cli.config)?;
        let mut solver = DpllSolver::new(cnf.num_vars, &config);
        solver.init_activity(&cnf.clauses);
        let (sat, state) = solver.solve(&cnf.clauses);
        let decision = if sat { Decision::Sat } else { Decision::Unsat };
        (decision, Some(state), config.name)
    };
    let elapsed = start.elapsed();

    println!(
        "Filename: {}\tResult: {}\tElapsed time: {:?}\tConfig: {}",
        cli.file.display(),
        decision,
        elapsed,
        config_name
    );

    if cli.verbose > 0 && decision == Decision::Sat {
        if let Some(assignment) = &assignment {
            let pairs: Vec<String> = assignment
                .assigned_pairs()
                .map(|(var, value)| format!("{var}={value}"))
                .collect();
            println!("Assignments: {}", pairs.join(" "));
        }
    }

    Ok(())
}

//! random-walk-msd — simulate a 2D random walk and report its diffusion
//! coefficient and log-log MSD slope.
use clap::Parser;
use clap::error::ErrorKind as ClapErrorKind;
use log::debug;
use random_walk_msd::diffusion::{AnalysisOptions, DiffusionAnalysis, WalkOptions};
use random_walk_msd::{plot, report};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

/// Simulate a 2D Gaussian random walk and estimate its diffusion coefficient
/// from the mean squared displacement.
#[derive(Parser, Debug)]
#[command(name = "random-walk-msd", version, about, long_about = None)]
struct Cli {
    /// Number of walk steps
    steps: usize,

    /// RNG seed for a reproducible walk
    #[arg(long)]
    seed: Option<u64>,

    /// Largest MSD time lag (default: steps / 2)
    #[arg(long)]
    max_lag: Option<usize>,

    /// Write the trajectory and log-log MSD figure to this SVG file
    #[arg(long, value_name = "PATH")]
    plot: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    // Usage errors exit with 1 rather than clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let opts = AnalysisOptions::new(WalkOptions::new(cli.seed), cli.max_lag);
    debug!("parsed arguments: {cli:?}");

    let analysis = DiffusionAnalysis::run(cli.steps, &opts)?;
    report::write_summary(&mut std::io::stdout().lock(), analysis.fit())?;
    debug!("slope regime: {}", analysis.fit().regime());

    if let Some(path) = &cli.plot {
        plot::render_analysis(path, &analysis)?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use belvedere::{check_file, Verdict};

/// Check a Skyscrapers board file against the puzzle rules.
#[derive(Debug, Parser)]
#[command(name = "checker", version)]
struct Args {
    /// Path to the board file, one row per line.
    path: PathBuf,

    /// Log rule decisions while checking.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let verdict = check_file(&args.path)
        .with_context(|| format!("could not check {}", args.path.display()))?;

    println!("{}", verdict);

    Ok(match verdict {
        Verdict::Valid => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    })
}

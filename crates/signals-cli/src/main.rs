mod render;

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use signals_core::Solver;
use thiserror::Error;

use render::Mode;

/// Enumerate traffic-signal setups on an n×n road grid.
///
/// Finds every way to place one signal per row so that no two signals
/// share a column or a diagonal, then prints all of them.
#[derive(Parser, Debug)]
#[command(name = "signals", version)]
struct Args {
    /// Grid size (n x n); prompted for interactively when omitted
    size: Option<usize>,

    /// Visualization mode: 'text' or 'summary'
    #[arg(long, default_value = "text")]
    mode: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    InvalidMode(#[from] render::InvalidMode),
    #[error("please enter a valid integer for the grid size (got {0:?})")]
    MalformedSize(String),
    #[error("the grid size must be a positive integer")]
    NonPositiveSize,
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let mode = Mode::from_str(&args.mode)?;

    let n = match args.size {
        Some(n) => n,
        None => prompt_for_size()?,
    };
    if n == 0 {
        return Err(CliError::NonPositiveSize);
    }

    let setups = Solver::new().solve(n);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render::print_solutions(&mut out, &setups, n, mode)?;
    out.flush()?;
    Ok(())
}

fn prompt_for_size() -> Result<usize, CliError> {
    print!("Enter the grid size for traffic control system (n x n): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    parse_size(line.trim())
}

/// Classify raw prompt input: non-integer text is malformed, while an
/// integer that is zero or negative is a non-positive size.
fn parse_size(input: &str) -> Result<usize, CliError> {
    let value: i64 = input
        .parse()
        .map_err(|_| CliError::MalformedSize(input.to_string()))?;
    if value <= 0 {
        return Err(CliError::NonPositiveSize);
    }
    Ok(value as usize)
}

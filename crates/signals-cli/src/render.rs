use std::io::{self, Write};
use std::str::FromStr;

use signals_core::Placement;
use thiserror::Error;

/// How each setup is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Full n×n grid with row/column headers, `S` for a signal and `.`
    /// for an empty cell.
    Text,
    /// One line per setup listing the signal column for each row.
    Summary,
}

#[derive(Debug, Error)]
#[error("invalid visualization type {0:?}: please choose 'text' or 'summary'")]
pub struct InvalidMode(String);

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Mode::Text),
            "summary" => Ok(Mode::Summary),
            other => Err(InvalidMode(other.to_string())),
        }
    }
}

/// Print the total count followed by every setup.
///
/// Each setup gets a banner of `=` characters sized to `2n + 3`, its
/// 1-based index, the mode-specific body, and a trailing blank line.
pub fn print_solutions<W: Write>(
    out: &mut W,
    solutions: &[Placement],
    n: usize,
    mode: Mode,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total setups found: {}", solutions.len())?;
    writeln!(out)?;

    let banner = "=".repeat(2 * n + 3);
    for (idx, setup) in solutions.iter().enumerate() {
        writeln!(out, "{banner}")?;
        writeln!(out, " Setup {} {banner}", idx + 1)?;

        match mode {
            Mode::Text => print_grid(out, setup, n)?,
            Mode::Summary => print_summary(out, setup)?,
        }

        writeln!(out)?;
    }
    Ok(())
}

fn print_grid<W: Write>(out: &mut W, setup: &Placement, n: usize) -> io::Result<()> {
    write!(out, "   ")?;
    for col in 0..n {
        write!(out, "{col:2} ")?;
    }
    writeln!(out)?;
    writeln!(out, "  {}-", "--".repeat(n))?;

    for (row, &placed) in setup.columns().iter().enumerate() {
        write!(out, "{row:2} | ")?;
        for col in 0..n {
            write!(out, "{} ", if col == placed { 'S' } else { '.' })?;
        }
        writeln!(out)?;
    }

    writeln!(out, "  {}-", "--".repeat(n))?;
    Ok(())
}

fn print_summary<W: Write>(out: &mut W, setup: &Placement) -> io::Result<()> {
    write!(out, "Row positions of signals: ")?;
    for col in setup.columns() {
        write!(out, "{col} ")?;
    }
    writeln!(out)?;
    Ok(())
}

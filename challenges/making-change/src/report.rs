//! Console output for solved amounts and failed runs.

use std::io::Write;
use std::time::Duration;

use crate::Writer;
use crate::error::{ChangeError, Result};
use crate::solver::Table;

pub const SEPARATOR: &str = "---";
pub const ZERO_CASE: &str = "No coins are used for the zero case.";
pub const NO_SOLUTION: &str =
    "Error: No solution was found. Ensure you have pennies as a minimum denomination.";

/// Render `n` with a comma between every group of three digits.
pub fn with_commas(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Everything to the right of `<amount> cents = `.
pub fn describe(denominations: &[usize], table: &Table) -> String {
    match table.target() {
        Some(row) if row.total() > 0 => row
            .mix(denominations)
            .iter()
            .map(|(denomination, count)| format!("{denomination}:{count}"))
            .collect::<Vec<_>>()
            .join(" "),
        Some(_) => ZERO_CASE.to_string(),
        None => NO_SOLUTION.to_string(),
    }
}

pub fn problem_set_header<W: Write>(out: &mut Writer<W>, id: usize) -> Result<()> {
    out.println(format_args!("--Problem Set #{id}--"))
}

pub fn problem_set_footer<W: Write>(out: &mut Writer<W>) -> Result<()> {
    out.println("")
}

/// Print one solved amount; `last` closes the problem set's block.
pub fn solution<W: Write>(
    out: &mut Writer<W>,
    denominations: &[usize],
    table: &Table,
    elapsed: Duration,
    last: bool,
) -> Result<()> {
    out.println(SEPARATOR)?;
    out.println(format_args!(
        "{} cents = {}",
        with_commas(table.amount() as u128),
        describe(denominations, table)
    ))?;
    out.println(format_args!("Total Time: {} ns", with_commas(elapsed.as_nanos())))?;
    if last {
        out.println(SEPARATOR)?;
    }
    Ok(())
}

/// Heading and explanation shown when a run fails.
pub fn error_banner(error: &ChangeError) -> String {
    let (heading, guidance) = match error {
        ChangeError::FileNotFound { .. } => (
            "--Error: File Not Found--",
            "If this is not the correct filename, pass the path of the input\n\
             file as the first argument.",
        ),
        ChangeError::Format { .. } => (
            "--Error: Invalid Number Format--",
            "Every line must hold one integer. Denominations must be positive,\n\
             counts and values must not be negative, and each problem set must\n\
             contain as many denominations and values as its counts announce.",
        ),
        ChangeError::RecursionLimit { .. } => (
            "---Error: Stack Overflow---",
            "Memoized recursion builds one call per coin on the way down. Use a\n\
             smaller value, raise --max-depth, or switch to the bottom-up strategy.",
        ),
        ChangeError::AmountTooLarge { .. } => (
            "---Error: Value Too Large---",
            "Plain recursion takes exponential time. Use a smaller value, raise\n\
             --naive-limit, or switch to a memoized or bottom-up strategy.",
        ),
        ChangeError::CallLimit { .. } => (
            "---Error: Value Too Large---",
            "Plain recursion takes exponential time, and more denominations make it\n\
             slower. Use a smaller value, raise --naive-calls, or switch to a\n\
             memoized or bottom-up strategy.",
        ),
        ChangeError::TableTooLarge { .. } => (
            "---Error: Out Of Memory---",
            "The value is too large to hold a solution table for every amount\n\
             below it. Use a smaller value.",
        ),
        ChangeError::Io(_) => (
            "--Error: Unknown Input/Output Fault--",
            "An unknown error occurred while reading the input or writing the\n\
             results.",
        ),
    };
    format!("{heading}\n{error}\n{guidance}\n")
}

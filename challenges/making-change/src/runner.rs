use std::fs::File;
use std::io::{BufReader, Write};
use std::time::Instant;

use log::{debug, info};

use crate::config::Settings;
use crate::error::{ChangeError, Result};
use crate::input::ProblemSets;
use crate::{Scanner, Writer, report, solver};

/// What a completed run got through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub problem_sets: usize,
    pub values: usize,
}

/// Open `settings.input` and report every problem set in it.
pub fn run_file<W: Write>(settings: &Settings, out: &mut Writer<W>) -> Result<RunSummary> {
    let file = File::open(&settings.input).map_err(|source| ChangeError::FileNotFound {
        path: settings.input.clone(),
        source,
    })?;
    info!("reading problem sets from {}", settings.input.display());
    let mut scanner = Scanner::new(BufReader::new(file));
    run(&mut scanner, out, settings)
}

/// Solve and report every problem set left in `scan`.
///
/// A set is parsed in full before anything about it is printed, so a
/// malformed set produces no output at all. The first error ends the run.
pub fn run<W: Write>(
    scan: &mut Scanner,
    out: &mut Writer<W>,
    settings: &Settings,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for set in ProblemSets::new(scan) {
        let set = set?;
        report::problem_set_header(out, set.id)?;

        for (i, &value) in set.values.iter().enumerate() {
            let start = Instant::now();
            let table =
                solver::solve(settings.strategy, &set.denominations, value, &settings.limits)?;
            let elapsed = start.elapsed();
            debug!(
                "set #{} value {value}: {:?} in {elapsed:?} ({})",
                set.id,
                table.target().map(|row| row.total()),
                settings.strategy
            );

            let last = i + 1 == set.values.len();
            report::solution(out, &set.denominations, &table, elapsed, last)?;
        }

        report::problem_set_footer(out)?;
        out.flush()?;
        summary.problem_sets += 1;
        summary.values += set.values.len();
    }

    info!(
        "solved {} values in {} problem sets with the {} strategy",
        summary.values, summary.problem_sets, settings.strategy
    );
    Ok(summary)
}

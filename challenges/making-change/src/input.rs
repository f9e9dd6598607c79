//! Problem-set parsing.
//!
//! A problem set is laid out one integer per line:
//!
//! ```text
//! <denomination count>
//! <denomination>...
//! <value count>
//! <value>...
//! ```
//!
//! and the file repeats that layout until it ends.

use log::debug;

use crate::Scanner;
use crate::error::{ChangeError, FormatErrorKind, Result};

/// One batch of denominations and the amounts to solve with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemSet {
    /// 1-based position of the set in the input.
    pub id: usize,
    pub denominations: Vec<usize>,
    pub values: Vec<usize>,
}

/// Parse the set whose header is the next line, or `None` if the input is exhausted.
pub fn parse_problem_set(scan: &mut Scanner, id: usize) -> Result<Option<ProblemSet>> {
    let Some(header) = scan.next_line()? else {
        return Ok(None);
    };

    let count = parse_int(scan, &header)?;
    let count = to_index(scan, count, FormatErrorKind::NegativeDenominationCount)?;
    let mut denominations = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let denomination = next_int(scan, "a denomination")?;
        if denomination <= 0 {
            let kind = FormatErrorKind::NonPositiveDenomination(denomination);
            return Err(format_error(scan, kind));
        }
        let denomination = to_index(scan, denomination, FormatErrorKind::NonPositiveDenomination)?;
        denominations.push(denomination);
    }

    let count = next_int(scan, "the value count")?;
    let count = to_index(scan, count, FormatErrorKind::NegativeValueCount)?;
    let mut values = Vec::with_capacity(count.min(1024));
    for _ in 0..count {
        let value = next_int(scan, "a value")?;
        values.push(to_index(scan, value, FormatErrorKind::NegativeValue)?);
    }

    debug!(
        "parsed problem set #{id}: {} denominations, {} values, ending on line {}",
        denominations.len(),
        values.len(),
        scan.line()
    );

    Ok(Some(ProblemSet {
        id,
        denominations,
        values,
    }))
}

/// Iterator over every problem set left in the input.
///
/// Stops for good after the first error.
pub struct ProblemSets<'a> {
    scan: &'a mut Scanner,
    next_id: usize,
    failed: bool,
}

impl<'a> ProblemSets<'a> {
    pub fn new(scan: &'a mut Scanner) -> Self {
        Self {
            scan,
            next_id: 1,
            failed: false,
        }
    }
}

impl Iterator for ProblemSets<'_> {
    type Item = Result<ProblemSet>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match parse_problem_set(self.scan, self.next_id) {
            Ok(Some(set)) => {
                self.next_id += 1;
                Some(Ok(set))
            }
            Ok(None) => None,
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

fn next_int(scan: &mut Scanner, what: &'static str) -> Result<i64> {
    match scan.next_line()? {
        Some(line) => parse_int(scan, &line),
        None => Err(format_error(scan, FormatErrorKind::UnexpectedEof(what))),
    }
}

fn parse_int(scan: &Scanner, line: &str) -> Result<i64> {
    line.parse::<i64>()
        .map_err(|_| format_error(scan, FormatErrorKind::NotAnInteger(line.to_string())))
}

// Rejects negatives with `negative` and values that cannot index a table.
fn to_index(scan: &Scanner, n: i64, negative: fn(i64) -> FormatErrorKind) -> Result<usize> {
    if n < 0 {
        return Err(format_error(scan, negative(n)));
    }
    usize::try_from(n).map_err(|_| format_error(scan, FormatErrorKind::OutOfRange(n)))
}

fn format_error(scan: &Scanner, kind: FormatErrorKind) -> ChangeError {
    // End-of-input errors point one past the last line read.
    let line = if matches!(kind, FormatErrorKind::UnexpectedEof(_)) {
        scan.line() + 1
    } else {
        scan.line()
    };
    ChangeError::Format { line, kind }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::Strategy;

/// Everything that can end a run early.
#[derive(Debug, Error)]
pub enum ChangeError {
    #[error("could not open input file {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid input on line {line}: {kind}")]
    Format { line: usize, kind: FormatErrorKind },

    #[error("amount {amount} needs more than {limit} nested calls")]
    RecursionLimit { amount: usize, limit: usize },

    #[error("the {strategy} solver only accepts amounts up to {limit}, got {amount}")]
    AmountTooLarge {
        strategy: Strategy,
        amount: usize,
        limit: usize,
    },

    #[error("the naive solver gave up on amount {amount} after {limit} calls")]
    CallLimit { amount: usize, limit: u64 },

    #[error("a solution table for amount {amount} does not fit in memory")]
    TableTooLarge { amount: usize },

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Why a line of the input file was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatErrorKind {
    #[error("`{0}` is not an integer")]
    NotAnInteger(String),

    #[error("{0} does not fit in a machine word")]
    OutOfRange(i64),

    #[error("denomination count {0} is negative")]
    NegativeDenominationCount(i64),

    #[error("denomination {0} is not positive")]
    NonPositiveDenomination(i64),

    #[error("value count {0} is negative")]
    NegativeValueCount(i64),

    #[error("value {0} is negative")]
    NegativeValue(i64),

    #[error("input ended while reading {0}")]
    UnexpectedEof(&'static str),
}

pub type Result<T> = std::result::Result<T, ChangeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn format_error_names_line_and_token() {
        let e = ChangeError::Format {
            line: 3,
            kind: FormatErrorKind::NotAnInteger("abc".into()),
        };
        assert_eq!(e.to_string(), "invalid input on line 3: `abc` is not an integer");
    }

    #[test]
    fn file_not_found_keeps_source() {
        let e = ChangeError::FileNotFound {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(e.to_string().contains("missing.txt"));
        assert!(e.source().is_some());
    }

    #[test]
    fn amount_too_large_names_strategy() {
        let e = ChangeError::AmountTooLarge {
            strategy: Strategy::Naive,
            amount: 90,
            limit: 40,
        };
        assert_eq!(e.to_string(), "the naive solver only accepts amounts up to 40, got 90");
    }

    #[test]
    fn call_limit_names_budget() {
        let e = ChangeError::CallLimit {
            amount: 34,
            limit: 1_000_000,
        };
        assert_eq!(e.to_string(), "the naive solver gave up on amount 34 after 1000000 calls");
    }

    #[test]
    fn io_error_converts() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "closed");
        let e: ChangeError = io_err.into();
        assert!(e.to_string().contains("io error"));
    }
}

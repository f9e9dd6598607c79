use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

/// File read when no input path is given.
pub const DEFAULT_INPUT: &str = "input.txt";

/// Deepest call chain the memoized solver may build before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Largest amount the naive solver will attempt.
pub const DEFAULT_NAIVE_LIMIT: usize = 40;

/// Most recursive calls the naive solver makes for one value.
pub const DEFAULT_NAIVE_CALLS: u64 = 1_000_000;

/// Which algorithm fills the solution table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Strategy {
    /// Iterative dynamic programming over increasing amounts.
    #[default]
    BottomUp,
    /// Top-down recursion that caches every subproblem.
    Memoized,
    /// Top-down recursion without a cache. Exponential.
    Naive,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::BottomUp => "bottom-up",
            Strategy::Memoized => "memoized",
            Strategy::Naive => "naive",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resource guards for the recursive strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    pub max_depth: usize,
    pub naive_limit: usize,
    pub naive_calls: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            naive_limit: DEFAULT_NAIVE_LIMIT,
            naive_calls: DEFAULT_NAIVE_CALLS,
        }
    }
}

/// Everything a run needs to know, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub strategy: Strategy,
    pub limits: Limits,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            strategy: Strategy::default(),
            limits: Limits::default(),
        }
    }
}

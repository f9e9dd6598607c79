use std::io::{BufRead, Write};

pub mod config;
pub mod error;
pub mod input;
pub mod report;
pub mod runner;
pub mod solver;

pub use config::{Limits, Settings, Strategy};
pub use error::{ChangeError, FormatErrorKind, Result};
pub use runner::{RunSummary, run, run_file};

/// Line reader that remembers where it is in the input.
pub struct Scanner {
    reader: Box<dyn BufRead>,
    line: usize,
}

impl Scanner {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            line: 0,
        }
    }

    /// Next line with surrounding whitespace removed, or `None` at end of input.
    ///
    /// A line that is not valid UTF-8 is a format error on that line.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        let mut input = Vec::new();
        if self.reader.read_until(b'\n', &mut input)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        match String::from_utf8(input) {
            Ok(text) => Ok(Some(text.trim().to_string())),
            Err(e) => Err(ChangeError::Format {
                line: self.line,
                kind: FormatErrorKind::NotAnInteger(
                    String::from_utf8_lossy(e.as_bytes()).trim().to_string(),
                ),
            }),
        }
    }

    /// 1-based number of the line most recently returned.
    pub fn line(&self) -> usize {
        self.line
    }
}

/// Output writer that formats straight into any `io::Write`.
pub struct Writer<W: Write>(W);

impl<W: Write> Writer<W> {
    pub fn new(inner: W) -> Self {
        Self(inner)
    }

    pub fn print<T: std::fmt::Display>(&mut self, value: T) -> Result<()> {
        write!(self.0, "{}", value)?;
        Ok(())
    }

    pub fn println<T: std::fmt::Display>(&mut self, value: T) -> Result<()> {
        writeln!(self.0, "{}", value)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.0.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.0
    }
}

impl Writer<Vec<u8>> {
    /// In-memory writer, used by tests and the golden-case harness.
    pub fn buffer() -> Self {
        Self(Vec::new())
    }

    pub(crate) fn into_string(self) -> std::result::Result<String, std::string::FromUtf8Error> {
        String::from_utf8(self.0)
    }
}

/// Test utilities for running and verifying golden cases
pub mod testing {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};

    /// Placeholder substituted for every measured duration.
    pub const MASKED_TIME: &str = "Total Time: _ ns";

    /// Replace the timing figures, the only part of a report that varies between runs.
    pub fn mask_timings(report: &str) -> String {
        report
            .lines()
            .map(|line| {
                if line.starts_with("Total Time:") {
                    MASKED_TIME
                } else {
                    line
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Discover all case numbers stored under `root/category`
    pub fn discover_cases(root: &Path, category: &str) -> Vec<usize> {
        let case_dir = root.join(category);

        let mut case_numbers = Vec::new();
        if let Ok(entries) = fs::read_dir(&case_dir) {
            for entry in entries.flatten() {
                if let Some(file_name) = entry.file_name().to_str() {
                    if let Some(num_str) = file_name.strip_suffix(".in") {
                        if let Ok(num) = num_str.parse::<usize>() {
                            case_numbers.push(num);
                        }
                    }
                }
            }
        }

        case_numbers.sort_unstable();
        case_numbers
    }

    /// Run a single case and return (expected, actual) output, both masked
    pub fn run_case(
        root: &Path,
        category: &str,
        case_num: usize,
        settings: &Settings,
    ) -> std::result::Result<(String, String), String> {
        let case_dir: PathBuf = root.join(category);
        let in_file = case_dir.join(format!("{}.in", case_num));
        let out_file = case_dir.join(format!("{}.out", case_num));

        let input = fs::read_to_string(&in_file)
            .map_err(|e| format!("Failed to read {}: {}", in_file.display(), e))?;
        let expected = fs::read_to_string(&out_file)
            .map_err(|e| format!("Failed to read {}: {}", out_file.display(), e))?;

        let mut scanner = Scanner::new(Cursor::new(input));
        let mut writer = Writer::buffer();
        run(&mut scanner, &mut writer, settings)
            .map_err(|e| format!("{} failed: {}", in_file.display(), e))?;

        let actual = writer
            .into_string()
            .map_err(|e| format!("Output is not valid UTF-8: {}", e))?;

        Ok((
            mask_timings(expected.trim()),
            mask_timings(actual.trim()),
        ))
    }

    /// Verify all cases of a category
    pub fn verify_all_cases(root: &Path, category: &str, settings: &Settings) {
        let cases = discover_cases(root, category);
        assert!(
            !cases.is_empty(),
            "No cases found under {}/{}",
            root.display(),
            category
        );

        for case_num in cases {
            match run_case(root, category, case_num, settings) {
                Ok((expected, actual)) => {
                    assert_eq!(
                        actual, expected,
                        "Case {} failed with the {} strategy\nExpected:\n{}\nActual:\n{}",
                        case_num, settings.strategy, expected, actual
                    );
                }
                Err(e) => panic!("Case {} error: {}", case_num, e),
            }
        }
    }
}

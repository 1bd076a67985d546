use crate::error::{LogReportError, Result};
use crate::parser::{TIMESTAMP_KEY, date_portion, is_truthy, parse_record};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Lazy reader over one or more log files, in the order given.
///
/// Files are opened only when iteration reaches them. Blank lines are
/// skipped. With a date filter, lines that fail to decode or whose
/// `@timestamp` date differs from the filter are skipped too; without one,
/// every non-blank line is yielded verbatim, malformed or not.
pub struct LineLoader {
    paths: std::vec::IntoIter<PathBuf>,
    current: Option<(PathBuf, Lines<BufReader<File>>)>,
    date_filter: Option<String>,
    failed: bool,
}

impl LineLoader {
    pub fn new<P: AsRef<Path>>(paths: &[P], date_filter: Option<&str>) -> Self {
        Self {
            paths: paths
                .iter()
                .map(|p| p.as_ref().to_path_buf())
                .collect::<Vec<_>>()
                .into_iter(),
            current: None,
            // An empty filter means "no filter"
            date_filter: date_filter.filter(|d| !d.is_empty()).map(String::from),
            failed: false,
        }
    }

    fn open_next(&mut self) -> Option<Result<()>> {
        let path = self.paths.next()?;
        debug!(path = %path.display(), "opening log file");

        match File::open(&path) {
            Ok(file) => {
                self.current = Some((path, BufReader::new(file).lines()));
                Some(Ok(()))
            }
            Err(source) => Some(Err(LogReportError::Open { path, source })),
        }
    }

    fn keep(&self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }

        match &self.date_filter {
            None => true,
            Some(date) => matches_date(line, date),
        }
    }
}

impl Iterator for LineLoader {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        // Stop for good after the first I/O error
        if self.failed {
            return None;
        }

        loop {
            if self.current.is_none() {
                match self.open_next()? {
                    Ok(()) => {}
                    Err(e) => {
                        self.failed = true;
                        return Some(Err(e));
                    }
                }
            }

            let (path, lines) = self.current.as_mut()?;
            match lines.next() {
                Some(Ok(line)) => {
                    if self.keep(&line) {
                        return Some(Ok(line));
                    }
                    trace!(line = %line, "line excluded by loader");
                }
                Some(Err(source)) => {
                    let path = path.clone();
                    self.failed = true;
                    self.current = None;
                    return Some(Err(LogReportError::Read { path, source }));
                }
                None => self.current = None,
            }
        }
    }
}

/// Date filter check for a single raw line.
///
/// The line must decode as a record. A missing, null or empty `@timestamp`
/// passes; a present one must have a date portion equal to `date`. A
/// timestamp that is present but not text never matches.
pub fn matches_date(line: &str, date: &str) -> bool {
    let Some(record) = parse_record(line) else {
        return false;
    };

    match record.get(TIMESTAMP_KEY) {
        Some(ts) if is_truthy(ts) => match ts {
            Value::String(ts) => date_portion(ts) == date,
            _ => false,
        },
        _ => true,
    }
}

/// Lazily load lines from `paths`, see [`LineLoader`]
pub fn load_lines<P: AsRef<Path>>(paths: &[P], date_filter: Option<&str>) -> LineLoader {
    LineLoader::new(paths, date_filter)
}

/// Load every line up front so several reports can scan the same input.
/// Fails on the first file that cannot be opened or read.
pub fn collect_lines<P: AsRef<Path>>(paths: &[P], date_filter: Option<&str>) -> Result<Vec<String>> {
    let lines = load_lines(paths, date_filter).collect::<Result<Vec<_>>>()?;
    debug!(lines = lines.len(), files = paths.len(), "loaded log lines");
    Ok(lines)
}

use super::{Distribution, Report, ReportData, ReportKind};
use crate::parser::{STATUS_KEY, parse_record, value_to_text};
use serde_json::Value;

/// Distribution of HTTP status codes
pub struct StatusReport;

impl StatusReport {
    /// Count lines per status code. Any non-null `status` is counted,
    /// including `0`; numeric and textual codes share one key.
    pub fn aggregate<S: AsRef<str>>(&self, lines: &[S]) -> Distribution {
        let mut counts = Distribution::default();

        for line in lines {
            let Some(record) = parse_record(line.as_ref()) else {
                continue;
            };

            match record.get(STATUS_KEY) {
                None | Some(Value::Null) => {}
                Some(code) => *counts.entry(value_to_text(code)).or_insert(0) += 1,
            }
        }

        counts
    }
}

impl Report for StatusReport {
    fn kind(&self) -> ReportKind {
        ReportKind::StatusCode
    }

    fn generate(&self, lines: &[String]) -> ReportData {
        ReportData::StatusCode(self.aggregate(lines))
    }
}

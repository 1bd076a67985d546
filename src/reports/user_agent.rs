use super::{Distribution, Report, ReportData, ReportKind};
use crate::parser::{USER_AGENT_KEY, parse_record};
use serde_json::Value;

/// Distribution of client User-Agent strings
pub struct UserAgentReport;

impl UserAgentReport {
    /// Count lines per exact `http_user_agent` text. Empty or non-text
    /// values are not counted; no trimming or normalization is applied.
    pub fn aggregate<S: AsRef<str>>(&self, lines: &[S]) -> Distribution {
        let mut counts = Distribution::default();

        for line in lines {
            let Some(record) = parse_record(line.as_ref()) else {
                continue;
            };

            if let Some(Value::String(ua)) = record.get(USER_AGENT_KEY) {
                if !ua.is_empty() {
                    *counts.entry(ua.clone()).or_insert(0) += 1;
                }
            }
        }

        counts
    }
}

impl Report for UserAgentReport {
    fn kind(&self) -> ReportKind {
        ReportKind::UserAgent
    }

    fn generate(&self, lines: &[String]) -> ReportData {
        ReportData::UserAgent(self.aggregate(lines))
    }
}

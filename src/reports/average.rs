use super::{EndpointSummary, Report, ReportData, ReportKind};
use crate::parser::{RESPONSE_TIME_KEY, URL_KEY, coerce_number, parse_record};
use rustc_hash::FxHashMap;
use serde_json::Value;
use tracing::trace;

/// Running totals for one endpoint while lines are being consumed
#[derive(Debug, Default, Clone, Copy)]
struct EndpointStats {
    count: usize,
    total_time: f64,
}

/// Average response time per endpoint URL
pub struct AverageReport;

impl AverageReport {
    /// Aggregate lines into `url -> {count, avg_time}`.
    ///
    /// A line contributes only if it decodes, has a non-empty string `url`
    /// and a non-null `response_time` that coerces to a number. Averages are
    /// divided out once, after the last line.
    pub fn aggregate<S: AsRef<str>>(&self, lines: &[S]) -> FxHashMap<String, EndpointSummary> {
        let mut stats: FxHashMap<String, EndpointStats> = FxHashMap::default();

        for line in lines {
            let line = line.as_ref();
            let Some(record) = parse_record(line) else {
                continue;
            };

            let url = match record.get(URL_KEY) {
                Some(Value::String(url)) if !url.is_empty() => url,
                _ => continue,
            };

            let response_time = match record.get(RESPONSE_TIME_KEY) {
                None | Some(Value::Null) => continue,
                Some(value) => value,
            };

            let Some(seconds) = coerce_number(response_time) else {
                trace!(url = %url, value = %response_time, "non-numeric response_time skipped");
                continue;
            };

            let entry = stats.entry(url.clone()).or_default();
            entry.count += 1;
            entry.total_time += seconds;
        }

        stats
            .into_iter()
            .map(|(url, s)| {
                (
                    url,
                    EndpointSummary {
                        count: s.count,
                        avg_time: s.total_time / s.count as f64,
                    },
                )
            })
            .collect()
    }
}

impl Report for AverageReport {
    fn kind(&self) -> ReportKind {
        ReportKind::Average
    }

    fn generate(&self, lines: &[String]) -> ReportData {
        ReportData::Average(self.aggregate(lines))
    }
}

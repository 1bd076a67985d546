use lazy_static::lazy_static;
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Occurrence count per distinct value
pub type Distribution = FxHashMap<String, usize>;

/// Per-endpoint request count and mean response time
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EndpointSummary {
    pub count: usize,
    pub avg_time: f64,
}

/// Report kinds known to the tool, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    Average,
    StatusCode,
    UserAgent,
}

impl ReportKind {
    pub const ALL: [ReportKind; 3] = [
        ReportKind::Average,
        ReportKind::StatusCode,
        ReportKind::UserAgent,
    ];

    /// Stable name used on the command line and in JSON output
    pub fn name(&self) -> &'static str {
        match self {
            ReportKind::Average => "average",
            ReportKind::StatusCode => "status_code",
            ReportKind::UserAgent => "user_agent",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Output of a single report
#[derive(Debug, Clone, PartialEq)]
pub enum ReportData {
    Average(FxHashMap<String, EndpointSummary>),
    StatusCode(Distribution),
    UserAgent(Distribution),
}

impl ReportData {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportData::Average(_) => ReportKind::Average,
            ReportData::StatusCode(_) => ReportKind::StatusCode,
            ReportData::UserAgent(_) => ReportKind::UserAgent,
        }
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        match self {
            ReportData::Average(stats) => stats.len(),
            ReportData::StatusCode(dist) | ReportData::UserAgent(dist) => dist.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait implemented by every report: consume raw log lines, produce a summary.
///
/// Implementations decode each line themselves and must not keep state
/// between calls, so the same lines can be fed to any number of reports in
/// any order or in parallel.
pub trait Report: Send + Sync {
    /// Which report this is
    fn kind(&self) -> ReportKind;

    /// Aggregate the given lines
    fn generate(&self, lines: &[String]) -> ReportData;
}

/// Lookup table from report kind to implementation
pub struct ReportRegistry {
    reports: Vec<(ReportKind, Arc<dyn Report>)>,
}

impl Default for ReportRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRegistry {
    /// Create a registry holding the built-in reports
    pub fn new() -> Self {
        let mut registry = Self {
            reports: Vec::new(),
        };

        registry.register_report(Arc::new(average::AverageReport));
        registry.register_report(Arc::new(status::StatusReport));
        registry.register_report(Arc::new(user_agent::UserAgentReport));

        registry
    }

    /// Register a report, replacing any existing one of the same kind
    pub fn register_report(&mut self, report: Arc<dyn Report>) {
        let kind = report.kind();
        match self.reports.iter_mut().find(|(k, _)| *k == kind) {
            Some(slot) => slot.1 = report,
            None => self.reports.push((kind, report)),
        }
    }

    /// Get the report for a specific kind
    pub fn get_report(&self, kind: ReportKind) -> Option<Arc<dyn Report>> {
        self.reports
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, r)| r.clone())
    }

    /// All registered reports in registration order
    pub fn reports(&self) -> impl Iterator<Item = &Arc<dyn Report>> {
        self.reports.iter().map(|(_, r)| r)
    }
}

lazy_static! {
    static ref DEFAULT_REGISTRY: ReportRegistry = ReportRegistry::new();
}

/// Process-wide registry of the built-in reports
pub fn default_registry() -> &'static ReportRegistry {
    &*DEFAULT_REGISTRY
}

pub mod average;
pub mod status;
pub mod user_agent;

pub use average::AverageReport;
pub use status::StatusReport;
pub use user_agent::UserAgentReport;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_builtin_reports_in_order() {
        let kinds: Vec<ReportKind> = default_registry().reports().map(|r| r.kind()).collect();
        assert_eq!(kinds, ReportKind::ALL.to_vec());
    }

    #[test]
    fn test_get_report_by_kind() {
        let registry = ReportRegistry::new();
        for kind in ReportKind::ALL {
            assert_eq!(registry.get_report(kind).unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_register_replaces_same_kind() {
        struct Empty;
        impl Report for Empty {
            fn kind(&self) -> ReportKind {
                ReportKind::UserAgent
            }
            fn generate(&self, _lines: &[String]) -> ReportData {
                ReportData::UserAgent(Distribution::default())
            }
        }

        let mut registry = ReportRegistry::new();
        registry.register_report(Arc::new(Empty));

        assert_eq!(registry.reports().count(), 3);
        let lines = vec![r#"{"http_user_agent": "curl"}"#.to_string()];
        let data = registry
            .get_report(ReportKind::UserAgent)
            .unwrap()
            .generate(&lines);
        assert!(data.is_empty());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ReportKind::Average.to_string(), "average");
        assert_eq!(ReportKind::StatusCode.to_string(), "status_code");
        assert_eq!(ReportKind::UserAgent.to_string(), "user_agent");
    }
}

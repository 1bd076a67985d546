use crate::reports::{ReportData, ReportKind, ReportRegistry, default_registry};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// Line count above which several reports are run in parallel by default
pub const PARALLEL_THRESHOLD: usize = 100_000;

/// Execution mode for a batch of reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Sequential,
    Parallel,
    /// Parallel only when it is likely to pay off
    Auto,
}

impl RunMode {
    /// Resolve the mode from CLI flags. `--sequential` overrides `--parallel`.
    pub fn from_flags(parallel: bool, sequential: bool) -> Self {
        if sequential {
            RunMode::Sequential
        } else if parallel {
            RunMode::Parallel
        } else {
            RunMode::Auto
        }
    }

    fn use_parallel(self, line_count: usize, report_count: usize) -> bool {
        match self {
            RunMode::Sequential => false,
            RunMode::Parallel => true,
            RunMode::Auto => report_count > 1 && line_count >= PARALLEL_THRESHOLD,
        }
    }
}

/// Runs selected reports over one materialized set of lines
pub struct ReportRunner<'r> {
    registry: &'r ReportRegistry,
}

impl Default for ReportRunner<'static> {
    fn default() -> Self {
        Self::new(default_registry())
    }
}

impl<'r> ReportRunner<'r> {
    pub fn new(registry: &'r ReportRegistry) -> Self {
        Self { registry }
    }

    /// Run reports one after another, results in the order of `kinds`
    pub fn run(&self, lines: &[String], kinds: &[ReportKind]) -> Vec<(ReportKind, ReportData)> {
        kinds
            .iter()
            .filter_map(|&kind| self.run_one(lines, kind))
            .collect()
    }

    /// Run reports concurrently on the rayon pool. Every report only reads
    /// `lines`, so the output is identical to [`ReportRunner::run`].
    pub fn run_parallel(
        &self,
        lines: &[String],
        kinds: &[ReportKind],
    ) -> Vec<(ReportKind, ReportData)> {
        kinds
            .par_iter()
            .filter_map(|&kind| self.run_one(lines, kind))
            .collect()
    }

    /// Pick sequential or parallel execution according to `mode`
    pub fn run_with_mode(
        &self,
        lines: &[String],
        kinds: &[ReportKind],
        mode: RunMode,
    ) -> Vec<(ReportKind, ReportData)> {
        if mode.use_parallel(lines.len(), kinds.len()) {
            debug!(reports = kinds.len(), "running reports in parallel");
            self.run_parallel(lines, kinds)
        } else {
            self.run(lines, kinds)
        }
    }

    fn run_one(&self, lines: &[String], kind: ReportKind) -> Option<(ReportKind, ReportData)> {
        let report = self.registry.get_report(kind)?;

        let start = Instant::now();
        let data = report.generate(lines);
        info!(
            report = %kind,
            entries = data.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "report generated"
        );

        Some((kind, data))
    }
}

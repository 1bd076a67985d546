use crate::analyzer::RunMode;
use crate::reports::ReportKind;
use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// Report names accepted by `--report`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportSelection {
    /// Average response time per endpoint
    #[value(name = "average")]
    Average,
    /// Distribution of HTTP status codes
    #[value(name = "status_code")]
    StatusCode,
    /// Distribution of User-Agent strings
    #[value(name = "user_agent")]
    UserAgent,
    /// All of the above
    #[value(name = "all")]
    All,
}

#[derive(Parser, Debug)]
#[clap(name = "logreport")]
#[clap(about = "Summarize JSON web-server access logs", long_about = None)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
#[clap(after_help = "Example: logreport --file access.log error.log --report all --date 2025-06-22")]
pub struct Args {
    /// Log files to analyze, read in the order given
    #[clap(long, required = true, num_args = 1.., value_name = "PATH")]
    pub file: Vec<PathBuf>,

    /// Reports to generate
    #[clap(long, required = true, num_args = 1.., value_enum)]
    pub report: Vec<ReportSelection>,

    /// Only keep records whose @timestamp falls on this date (YYYY-MM-DD)
    #[clap(long)]
    pub date: Option<String>,

    /// Output results in JSON format
    #[clap(long)]
    pub json: bool,

    /// Force parallel report generation (default: auto-detect based on input size)
    #[clap(long)]
    pub parallel: bool,

    /// Force sequential report generation (overrides parallel)
    #[clap(long)]
    pub sequential: bool,

    /// Increase diagnostic output on stderr (-v, -vv)
    #[clap(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Reports to run, in output order. `all` selects every report in
    /// canonical order; otherwise repeated names keep their first position.
    pub fn report_kinds(&self) -> Vec<ReportKind> {
        resolve_reports(&self.report)
    }

    pub fn run_mode(&self) -> RunMode {
        RunMode::from_flags(self.parallel, self.sequential)
    }

    /// Default tracing filter for the verbosity flag; RUST_LOG takes precedence
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

pub fn resolve_reports(selection: &[ReportSelection]) -> Vec<ReportKind> {
    if selection.contains(&ReportSelection::All) {
        return ReportKind::ALL.to_vec();
    }

    let mut kinds = Vec::with_capacity(selection.len());
    for s in selection {
        let kind = match s {
            ReportSelection::Average => ReportKind::Average,
            ReportSelection::StatusCode => ReportKind::StatusCode,
            ReportSelection::UserAgent => ReportKind::UserAgent,
            ReportSelection::All => continue,
        };
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    kinds
}

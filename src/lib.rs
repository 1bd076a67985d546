// Declare our modules
pub mod analyzer;
pub mod cli;
pub mod error;
pub mod formatter;
pub mod loader;
pub mod logging;
pub mod parser;
pub mod reports;

// Re-export key types for convenience
pub use analyzer::{ReportRunner, RunMode};
pub use cli::Args;
pub use error::{LogReportError, Result};
pub use formatter::print_results;
pub use loader::{collect_lines, load_lines};
pub use reports::{Report, ReportData, ReportKind, ReportRegistry};

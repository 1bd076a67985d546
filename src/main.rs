use clap::Parser;
use std::process;
use tracing::{debug, info};

use logreport::analyzer::ReportRunner;
use logreport::cli::Args;
use logreport::formatter::print_results;
use logreport::loader::collect_lines;
use logreport::logging::init_logging;

fn main() {
    let args = Args::parse();
    init_logging(args.log_filter());
    debug!("Arguments: {:?}", args);

    if let Err(e) = run(&args) {
        debug!("run failed: {:?}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> logreport::Result<()> {
    let kinds = args.report_kinds();
    if let Some(date) = &args.date {
        info!("Filtering by date: {}", date);
    }

    // Load everything first: an I/O failure aborts before any report is printed
    let lines = collect_lines(&args.file, args.date.as_deref())?;
    info!(lines = lines.len(), files = args.file.len(), "log lines loaded");

    let results = ReportRunner::default().run_with_mode(&lines, &kinds, args.run_mode());
    print_results(&results, args.json)
}

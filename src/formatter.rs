use crate::error::Result;
use crate::reports::{Distribution, EndpointSummary, ReportData, ReportKind};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::cmp::Reverse;
use std::io::{self, Write};

const SECTION_RULE_WIDTH: usize = 60;

// Structs specifically for JSON output
#[derive(Serialize)]
struct JsonOutput<'a> {
    reports: Vec<JsonReport<'a>>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    report: &'static str,
    entries: JsonEntries<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum JsonEntries<'a> {
    Endpoints(Vec<EndpointEntry<'a>>),
    Counts(Vec<ValueCount<'a>>),
}

#[derive(Serialize)]
struct EndpointEntry<'a> {
    endpoint: &'a str,
    count: usize,
    avg_time: f64,
}

#[derive(Serialize)]
struct ValueCount<'a> {
    value: &'a str,
    count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Endpoints by request count (descending), then URL
pub fn sorted_endpoints(
    stats: &FxHashMap<String, EndpointSummary>,
) -> Vec<(&String, &EndpointSummary)> {
    let mut entries: Vec<_> = stats.iter().collect();
    entries.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(b.0)));
    entries
}

/// Status codes in ascending text order
pub fn sorted_status_codes(dist: &Distribution) -> Vec<(&String, usize)> {
    let mut entries: Vec<_> = dist.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
}

/// User agents by count (descending), then text
pub fn sorted_user_agents(dist: &Distribution) -> Vec<(&String, usize)> {
    let mut entries: Vec<_> = dist.iter().map(|(k, v)| (k, *v)).collect();
    entries.sort_by_key(|&(ua, count)| (Reverse(count), ua));
    entries
}

/// Render a grid table: `+---+` borders, `=` under the header, one row per line
fn render_grid(headers: &[&str], aligns: &[Align], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let border = |fill: char| -> String {
        let mut line = String::from("+");
        for w in &widths {
            line.extend(std::iter::repeat_n(fill, w + 2));
            line.push('+');
        }
        line
    };

    let render_row = |cells: &[&str]| -> String {
        let mut line = String::from("|");
        for ((cell, &width), align) in cells.iter().zip(&widths).zip(aligns) {
            let padded = match align {
                Align::Left => format!(" {:<width$} ", cell, width = width),
                Align::Right => format!(" {:>width$} ", cell, width = width),
            };
            line.push_str(&padded);
            line.push('|');
        }
        line
    };

    let mut out = Vec::with_capacity(rows.len() * 2 + 3);
    out.push(border('-'));
    out.push(render_row(headers));
    out.push(border('='));
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push(render_row(&cells));
        out.push(border('-'));
    }
    out.join("\n")
}

/// Table for the average response time report
pub fn format_average(stats: &FxHashMap<String, EndpointSummary>) -> String {
    let rows: Vec<Vec<String>> = sorted_endpoints(stats)
        .into_iter()
        .map(|(url, s)| vec![url.clone(), s.count.to_string(), format!("{:.3}", s.avg_time)])
        .collect();

    render_grid(
        &["Endpoint", "Requests", "Avg time (s)"],
        &[Align::Left, Align::Right, Align::Right],
        &rows,
    )
}

/// Table for the status code report
pub fn format_status(dist: &Distribution) -> String {
    let rows: Vec<Vec<String>> = sorted_status_codes(dist)
        .into_iter()
        .map(|(code, count)| vec![code.clone(), count.to_string()])
        .collect();

    render_grid(&["Status", "Count"], &[Align::Left, Align::Right], &rows)
}

/// Table for the user agent report
pub fn format_user_agents(dist: &Distribution) -> String {
    let rows: Vec<Vec<String>> = sorted_user_agents(dist)
        .into_iter()
        .map(|(ua, count)| vec![ua.clone(), count.to_string()])
        .collect();

    render_grid(&["User-Agent", "Count"], &[Align::Left, Align::Right], &rows)
}

/// Table for any report
pub fn format_report(data: &ReportData) -> String {
    match data {
        ReportData::Average(stats) => format_average(stats),
        ReportData::StatusCode(dist) => format_status(dist),
        ReportData::UserAgent(dist) => format_user_agents(dist),
    }
}

fn json_report<'a>(kind: ReportKind, data: &'a ReportData) -> JsonReport<'a> {
    let entries = match data {
        ReportData::Average(stats) => JsonEntries::Endpoints(
            sorted_endpoints(stats)
                .into_iter()
                .map(|(url, s)| EndpointEntry {
                    endpoint: url,
                    count: s.count,
                    avg_time: s.avg_time,
                })
                .collect(),
        ),
        ReportData::StatusCode(dist) => JsonEntries::Counts(
            sorted_status_codes(dist)
                .into_iter()
                .map(|(value, count)| ValueCount { value, count })
                .collect(),
        ),
        ReportData::UserAgent(dist) => JsonEntries::Counts(
            sorted_user_agents(dist)
                .into_iter()
                .map(|(value, count)| ValueCount { value, count })
                .collect(),
        ),
    };

    JsonReport {
        report: kind.name(),
        entries,
    }
}

/// Main production function - prints to stdout
pub fn print_results(results: &[(ReportKind, ReportData)], json_output: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    print_results_to_writer(results, json_output, &mut handle)?;
    handle.flush()?;
    Ok(())
}

// Test-friendly version that can write to any writer.
// Reports with no entries produce no output at all.
pub fn print_results_to_writer<W: Write>(
    results: &[(ReportKind, ReportData)],
    json_output: bool,
    writer: &mut W,
) -> Result<()> {
    let non_empty = results.iter().filter(|(_, data)| !data.is_empty());

    if json_output {
        let output = JsonOutput {
            reports: non_empty.map(|(kind, data)| json_report(*kind, data)).collect(),
        };
        let json_str = serde_json::to_string_pretty(&output)?;
        writeln!(writer, "{}", json_str)?;
        return Ok(());
    }

    for (kind, data) in non_empty {
        writeln!(writer, "\nReport: {}", kind)?;
        writeln!(writer, "{}", "-".repeat(SECTION_RULE_WIDTH))?;
        writeln!(writer, "{}", format_report(data))?;
        writeln!(writer)?;
    }

    Ok(())
}

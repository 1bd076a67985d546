use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Creates JSON access-log files with the specified number of lines.
/// These logs follow a fixed rotation so report output is reproducible.
fn main() -> io::Result<()> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <number-of-lines> <output-file>", args[0]);
        std::process::exit(1);
    }

    let num_lines: usize = match args[1].parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Invalid number of lines: {}", args[1]);
            std::process::exit(1);
        }
    };
    let file_path = &args[2];

    println!("Creating log file with {} lines at {}", num_lines, file_path);
    create_benchmark_logs(num_lines, file_path)?;
    println!("Log file created successfully.");

    Ok(())
}

/// Write `lines` access-log records. The mix includes textual response
/// times, non-numeric response times, records without a user agent and the
/// occasional malformed line, so every skip path in the reports gets used.
fn create_benchmark_logs(lines: usize, file_path: &str) -> io::Result<()> {
    // Create output directory if needed
    if let Some(parent) = Path::new(file_path).parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = BufWriter::new(File::create(file_path)?);

    for i in 0..lines {
        let url = match i % 6 {
            0 => "/api/users",
            1 => "/api/orders",
            2 => "/api/context/...",
            3 => "/api/homeworks/...",
            4 => "/api/specializations/...",
            _ => "/api/challenges/...",
        };

        let status = match i % 10 {
            0..=6 => 200,
            7 => 201,
            8 => 404,
            _ => 500,
        };

        let user_agent = match i % 7 {
            0 => "Mozilla/5.0 (Windows NT 10.0; Win64; x64)",
            1 => "Mozilla/5.0 (X11; Linux x86_64)",
            2 => "curl/8.5.0",
            3 => "python-requests/2.31.0",
            4 => "Go-http-client/1.1",
            5 => "",
            _ => "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_5)",
        };

        // Day rolls over every 1000 lines (22..=28 June)
        let day = 22 + (i / 1000) % 7;
        let timestamp = format!(
            "2025-06-{:02}T{:02}:{:02}:{:02}+00:00",
            day,
            (i / 3600) % 24,
            (i / 60) % 60,
            i % 60
        );

        let response_time = (i % 97) as f64 / 100.0 + 0.012;

        if i % 250 == 249 {
            writeln!(file, "malformed line {}", i)?;
            continue;
        }

        if i % 50 == 17 {
            // Non-numeric response time
            writeln!(
                file,
                r#"{{"@timestamp": "{}", "status": "{}", "url": "{}", "request_method": "GET", "response_time": "n/a", "http_user_agent": "{}"}}"#,
                timestamp, status, url, user_agent
            )?;
        } else if i % 2 == 0 {
            writeln!(
                file,
                r#"{{"@timestamp": "{}", "status": {}, "url": "{}", "request_method": "GET", "response_time": {:.3}, "http_user_agent": "{}"}}"#,
                timestamp, status, url, response_time, user_agent
            )?;
        } else {
            // Textual response time and status, as some proxies emit them
            writeln!(
                file,
                r#"{{"@timestamp": "{}", "status": "{}", "url": "{}", "request_method": "POST", "response_time": "{:.3}", "http_user_agent": "{}"}}"#,
                timestamp, status, url, response_time, user_agent
            )?;
        }
    }

    file.flush()
}

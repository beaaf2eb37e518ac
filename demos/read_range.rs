//! Read Range Example
//!
//! This example reads a range from a Google Sheets spreadsheet and prints it
//! as tab-separated text.
//!
//! # Usage
//!
//! ```bash
//! GSHEETS_ACCESS_TOKEN=ya29... cargo run --example read_range -- <spreadsheet-id> <sheet-title> <notation>
//! ```
//!
//! The access token is read from the `GSHEETS_ACCESS_TOKEN` environment variable.

use gsheetzero::{HttpTransportBuilder, Service, SheetsError};
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 4 {
        eprintln!(
            "Usage: {} <spreadsheet-id> <sheet-title> <notation>",
            args[0]
        );
        eprintln!("\nExamples:");
        eprintln!("  {} 1BxiMVs0XRA5... \"Class Data\" A1:E10", args[0]);
        eprintln!("  {} 1BxiMVs0XRA5... Sheet1 A:A", args[0]);
        process::exit(1);
    }

    let token = std::env::var("GSHEETS_ACCESS_TOKEN").unwrap_or_else(|_| {
        eprintln!("Error: GSHEETS_ACCESS_TOKEN is not set");
        process::exit(1);
    });

    match read_range(&token, &args[1], &args[2], &args[3]) {
        Ok(rows) => {
            for row in rows {
                println!("{}", row.join("\t"));
            }
        }
        Err(SheetsError::SheetNotFound { title }) => {
            eprintln!("Error: no sheet titled '{}'", title);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn read_range(
    token: &str,
    spreadsheet_id: &str,
    title: &str,
    notation: &str,
) -> Result<Vec<Vec<String>>, SheetsError> {
    let service = Service::new(HttpTransportBuilder::new(token).build()?);
    let sheet = service.spreadsheet(spreadsheet_id)?.sheet(title)?;
    service.get(&sheet, notation)
}

//! gsheetzero - Range addressing and value marshalling for the Google Sheets API
//!
//! This crate resolves a logical path (spreadsheet ID → sheet title → range
//! notation) into the requests needed to read, write, append, clear and insert
//! rows, and converts the loosely-typed cell values returned by the backend into
//! a uniform string matrix.
//!
//! The network side is abstracted behind the [`Transport`] trait. A blocking
//! HTTP implementation, [`HttpTransport`], is available with the `http` feature
//! (enabled by default).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gsheetzero::{HttpTransportBuilder, Service};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // The access token is obtained by the caller (OAuth, service account, ...)
//!     let transport = HttpTransportBuilder::new("ya29.access-token").build()?;
//!     let service = Service::new(transport);
//!
//!     // Fetch the spreadsheet once and resolve a sheet by title
//!     let spreadsheet = service.spreadsheet("1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms")?;
//!     let sheet = spreadsheet.sheet("Class Data")?;
//!
//!     // Read "Class Data!A1:C10" as strings
//!     for row in service.get(&sheet, "A1:C10")? {
//!         println!("{}", row.join("\t"));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Writing Values
//!
//! ```rust,no_run
//! use gsheetzero::{CellValue, HttpTransportBuilder, Service, ValueInputOption};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let service = Service::new(HttpTransportBuilder::new("token").build()?);
//! # let sheet = service.spreadsheet("id")?.sheet("Sheet1")?;
//! // Text is re-parsed by the backend ("42" becomes a number)
//! service.update(&sheet, "A1", &vec![vec!["42".to_string(), "=A1*2".to_string()]])?;
//!
//! // Typed values, stored as-is
//! service.update_raw(
//!     &sheet,
//!     "C1",
//!     &vec![vec![CellValue::Number(1.5), CellValue::Bool(true)]],
//!     ValueInputOption::Raw,
//! )?;
//!
//! // Append below the table found in A:B
//! service.append(&sheet, "A:B", &vec![vec!["new".to_string(), "row".to_string()]])?;
//!
//! // Insert two rows before row index 1, always stored as text
//! service.insert_rows(
//!     &sheet,
//!     1,
//!     &vec![vec!["007".to_string()], vec!["TRUE".to_string()]],
//! )?;
//!
//! service.clear(&sheet, "Z1:Z100")?;
//! # Ok(())
//! # }
//! ```

mod address;
mod api;
mod builder;
mod coercion;
mod error;
#[cfg(feature = "http")]
mod http;
mod request;
mod service;
mod transport;
mod types;

// 公開API
pub use address::{find_sheet, resolve};
pub use api::{InsertDataOption, ValueInputOption, ValueRenderOption};
pub use builder::ServiceBuilder;
pub use coercion::{to_loose, to_strings};
pub use error::SheetsError;
#[cfg(feature = "http")]
pub use http::{HttpTransport, HttpTransportBuilder, DEFAULT_BASE_URL};
pub use request::{
    insert_rows_batch, CellData, Dimension, DimensionRange, ExtendedValue, GridCoordinate,
    InsertDimensionRequest, Request, RowData, UpdateCellsRequest, ValueRange,
};
pub use service::{Service, Spreadsheet};
pub use transport::Transport;
pub use types::{
    CellValue, SheetContext, SheetProperties, SpreadsheetSnapshot, StringMatrix, ValueMatrix,
};

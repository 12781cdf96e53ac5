//! Data collection: load delimited files into records.
//!
//! This module handles the first stage of the pipeline - reading a CSV file
//! and turning it into an ordered, header-named record set. It provides:
//!
//! - **Records**: Core data structures (`Record`, `RecordSet`)
//! - **Reading**: Loading from disk or memory (`read_records`, `parse_records`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use csvtexlib::data::read_records;
//!
//! let records = read_records("tables/functions.csv")?;
//! println!("{} columns, {} rows", records.column_count(), records.len());
//! ```

pub mod reader;
pub mod records;

pub use reader::{parse_records, read_records};
pub use records::{Record, RecordSet};

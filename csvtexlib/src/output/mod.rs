//! Output formatting: present records as LaTeX.
//!
//! This module handles the final stage of the pipeline - formatting a record
//! set as a `longtable` block. It provides:
//!
//! - **LongTable**: Table-ready data structure with headers, rows and caption
//! - **escape_latex**: Escaping of LaTeX special characters
//!
//! LongTable is a pure presentation layer - it only formats data into strings.
//! Loading and validating the rows happens in the data stage.
//!
//! ## Example
//!
//! ```rust,ignore
//! use csvtexlib::output::LongTable;
//!
//! let table = LongTable::from_records(&records, &RenderOptions::new().caption("Functions"));
//! // table.column_format: "lrl"
//! // table.headers: ["function", "priority", "status"]
//! let latex = table.to_string();
//! ```

pub mod escape;
pub mod longtable;

pub use escape::escape_latex;
pub use longtable::{infer_alignments, LongTable, TableRow};

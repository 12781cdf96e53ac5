//! # csvtexlib
//!
//! Render CSV tables as LaTeX `longtable` fragments.
//!
//! ## Overview
//!
//! The library loads a comma-separated file whose first row names the
//! columns, and renders every row, in file order, as one row of a
//! multi-page LaTeX table with a caption. It is built around:
//!
//! - **Data**: `RecordSet`, the header plus the ordered rows
//! - **Output**: `LongTable`, escaped cells and a resolved column format
//! - **Options**: `RenderOptions`, caption, label, alignment and escaping
//!
//! ## Features
//!
//! - **Shape checks**: rows with the wrong number of fields are rejected
//! - **Alignment inference**: numeric columns are right-aligned
//! - **Escaping**: LaTeX special characters in cells and caption
//! - **Pure core**: `render_to_string` never touches the filesystem
//!
//! ## Example
//!
//! ```rust
//! use csvtexlib::{parse_records, render, render_to_string, RenderOptions};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let records = parse_records("function,priority,status\nfoo,1,done\n").unwrap();
//! let latex = render_to_string(&records, &RenderOptions::new().caption("Functions"));
//! assert!(latex.contains("foo & 1 & done \\\\"));
//!
//! // Or go straight from file to file
//! let dir = tempdir().unwrap();
//! let input = dir.path().join("functions.csv");
//! fs::write(&input, "function,priority,status\nfoo,1,done\n").unwrap();
//! render(&input, dir.path().join("functions.tex"), "Functions").unwrap();
//! ```

pub mod data;
pub mod error;
pub mod options;
pub mod output;
pub mod renderer;

pub use data::{parse_records, read_records, Record, RecordSet};
pub use error::CsvtexError;
pub use options::{Alignment, RenderOptions};
pub use output::{escape_latex, infer_alignments, LongTable, TableRow};
pub use renderer::{render, render_to_string, render_with};

/// Result type for csvtexlib operations
pub type Result<T> = std::result::Result<T, CsvtexError>;

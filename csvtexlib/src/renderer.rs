//! File-level entry points.
//!
//! `render_to_string` is the pure transformation; `render` and `render_with`
//! wrap it with reading the CSV input and writing the LaTeX output. The
//! input is fully parsed and rendered before the output file is opened, so
//! a failed run never creates or truncates the output.

use std::path::Path;

use log::{debug, info};

use crate::data::reader::read_records;
use crate::data::records::RecordSet;
use crate::error::CsvtexError;
use crate::options::RenderOptions;
use crate::output::longtable::LongTable;
use crate::Result;

/// Render a record set as a LaTeX long table.
pub fn render_to_string(records: &RecordSet, options: &RenderOptions) -> String {
    let table = LongTable::from_records(records, options);
    debug!(
        "rendering {} rows with column format '{}'",
        table.rows.len(),
        table.column_format
    );
    table.render()
}

/// Render `input` to `output` with the given caption.
pub fn render(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    caption: impl Into<String>,
) -> Result<()> {
    render_with(input, output, &RenderOptions::new().caption(caption))
}

/// Render `input` to `output` with full options.
///
/// Any existing file at `output` is overwritten.
pub fn render_with(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<()> {
    let records = read_records(input.as_ref())?;
    let text = render_to_string(&records, options);

    let output = output.as_ref();
    std::fs::write(output, text).map_err(|source| CsvtexError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(
        "wrote {} rows to {}",
        records.len(),
        output.display()
    );
    Ok(())
}

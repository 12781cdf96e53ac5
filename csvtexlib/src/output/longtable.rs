//! Table-ready data structures for LaTeX output.
//!
//! This module provides `LongTable`, a presentation-ready structure that is
//! rendered through its `Display` impl. The data flow is:
//! 1. Raw data (RecordSet)
//! 2. LongTable (escaped strings, resolved column format)
//! 3. LaTeX text
//!
//! The layout uses booktabs rules and repeats the header (and caption) on
//! every page the table spans.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::records::RecordSet;
use crate::options::{Alignment, RenderOptions};
use crate::output::escape::escape_latex;

/// A single body row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cell text, already escaped, in column order
    pub cells: Vec<String>,
}

/// Table-ready LaTeX data.
///
/// Everything here is final text: rendering only joins the pieces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongTable {
    /// Caption text (escaped when escaping is on)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Label key, never escaped
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Column specifier, e.g. `lrl`
    pub column_format: String,
    /// Header cells, in input column order
    pub headers: Vec<String>,
    /// Body rows, in input row order
    pub rows: Vec<TableRow>,
    /// Multi-page layout marker; always `true`, the only layout rendered
    pub longtable: bool,
}

impl LongTable {
    /// Build a LongTable from a record set.
    pub fn from_records(records: &RecordSet, options: &RenderOptions) -> Self {
        let cell = |text: &str| -> String {
            let text = match (&options.na_rep, text.is_empty()) {
                (Some(na), true) => na.as_str(),
                _ => text,
            };
            if options.escape {
                escape_latex(text)
            } else {
                text.to_string()
            }
        };

        let column_format = options.column_format.clone().unwrap_or_else(|| {
            infer_alignments(records)
                .into_iter()
                .map(Alignment::as_char)
                .collect()
        });

        let headers = records.headers.iter().map(|h| cell(h)).collect();
        let rows = records
            .records
            .iter()
            .map(|r| TableRow {
                cells: r.fields.iter().map(|f| cell(f)).collect(),
            })
            .collect();
        let caption = options.caption.as_deref().map(|c| {
            if options.escape {
                escape_latex(c)
            } else {
                c.to_string()
            }
        });

        LongTable {
            caption,
            label: options.label.clone(),
            column_format,
            headers,
            rows,
            longtable: true,
        }
    }

    /// Render the table as LaTeX.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\\toprule")?;
        writeln!(f, "{} \\\\", self.headers.join(" & "))?;
        writeln!(f, "\\midrule")
    }

    fn write_caption_line(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.caption, &self.label) {
            (Some(caption), Some(label)) => {
                writeln!(f, "\\caption{{{}}} \\label{{{}}} \\\\", caption, label)
            }
            (Some(caption), None) => writeln!(f, "\\caption{{{}}} \\\\", caption),
            (None, Some(label)) => writeln!(f, "\\label{{{}}} \\\\", label),
            (None, None) => Ok(()),
        }
    }
}

impl fmt::Display for LongTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\\begin{{longtable}}{{{}}}", self.column_format)?;
        self.write_caption_line(f)?;
        self.write_header(f)?;
        writeln!(f, "\\endfirsthead")?;
        if let Some(caption) = &self.caption {
            writeln!(f, "\\caption[]{{{}}} \\\\", caption)?;
        }
        self.write_header(f)?;
        writeln!(f, "\\endhead")?;
        writeln!(f, "\\midrule")?;
        writeln!(
            f,
            "\\multicolumn{{{}}}{{r}}{{Continued on next page}} \\\\",
            self.headers.len()
        )?;
        writeln!(f, "\\midrule")?;
        writeln!(f, "\\endfoot")?;
        writeln!(f, "\\bottomrule")?;
        writeln!(f, "\\endlastfoot")?;

        for row in &self.rows {
            writeln!(f, "{} \\\\", row.cells.join(" & "))?;
        }

        writeln!(f, "\\end{{longtable}}")
    }
}

/// Infer per-column alignment from the data.
///
/// A column is right-aligned when it has at least one non-empty value and
/// every non-empty value parses as a number; otherwise it is left-aligned.
pub fn infer_alignments(records: &RecordSet) -> Vec<Alignment> {
    (0..records.column_count())
        .map(|index| {
            let mut values = records
                .column(index)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .peekable();
            if values.peek().is_none() {
                return Alignment::Left;
            }
            if values.all(|v| v.parse::<f64>().is_ok()) {
                Alignment::Right
            } else {
                Alignment::Left
            }
        })
        .collect()
}

//! Input options for table rendering.
//!
//! This module contains the configuration types that control how a record
//! set is turned into LaTeX. The defaults reproduce the plain
//! `longtable` output: inferred alignment, escaped cells, no caption.

/// Horizontal alignment of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Text columns
    #[default]
    Left,
    /// Numeric columns
    Right,
}

impl Alignment {
    /// The `tabular` column specifier for this alignment.
    pub fn as_char(self) -> char {
        match self {
            Alignment::Left => 'l',
            Alignment::Right => 'r',
        }
    }
}

/// Options for rendering a long table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Caption attached to the first head and repeated on continuation pages
    pub caption: Option<String>,
    /// Cross-reference label emitted after the caption
    pub label: Option<String>,
    /// Explicit column format (e.g. `"lrl"`); inferred from the data when unset
    pub column_format: Option<String>,
    /// Escape LaTeX special characters in headers, cells and caption
    pub escape: bool,
    /// Replacement text for empty fields
    pub na_rep: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            caption: None,
            label: None,
            column_format: None,
            escape: true,
            na_rep: None,
        }
    }
}

impl RenderOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the caption
    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Set the `\label{}` key
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Override the inferred column format
    pub fn column_format(mut self, format: impl Into<String>) -> Self {
        self.column_format = Some(format.into());
        self
    }

    /// Enable or disable escaping of LaTeX special characters
    pub fn escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Set the text rendered in place of empty fields
    pub fn na_rep(mut self, na_rep: impl Into<String>) -> Self {
        self.na_rep = Some(na_rep.into());
        self
    }
}

//! Core data structures for tabular input.
//!
//! A `RecordSet` is the in-memory form of one CSV file: the header row that
//! names the columns, followed by the data rows in file order. Rows are never
//! sorted, deduplicated or mutated after loading.

/// One data row of the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// Field values, in header column order
    pub fields: Vec<String>,
}

impl Record {
    /// Create a record from its field values.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Field value at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Header-named, ordered collection of records.
///
/// Every record holds exactly as many fields as there are headers; the
/// loaders in [`crate::data::reader`] reject anything else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    /// Column names, exactly as read from the header row
    pub headers: Vec<String>,
    /// Data rows in input order
    pub records: Vec<Record>,
}

impl RecordSet {
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Self { headers, records }
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Iterate over the values of one column, top to bottom.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().filter_map(move |r| r.get(index))
    }
}

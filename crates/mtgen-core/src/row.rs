use crate::error::{GenError, Result};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

pub const DEVELOPER_NAME: &str = "DeveloperName";
pub const LABEL: &str = "Label";

/// One input row: column/value pairs in header order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    /// 1-based position among the data rows, used in error messages.
    pub index: usize,
    pub columns: Vec<(String, String)>,
}

impl InputRow {
    pub fn new<K, V>(index: usize, columns: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            index,
            columns: columns
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }

    pub fn developer_name(&self) -> Result<&str> {
        match self.get(DEVELOPER_NAME) {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(self.missing(DEVELOPER_NAME)),
        }
    }

    pub fn label(&self) -> Result<&str> {
        self.get(LABEL).ok_or_else(|| self.missing(LABEL))
    }

    fn missing(&self, column: &str) -> GenError {
        GenError::MissingField {
            row: self.index,
            column: column.to_string(),
        }
    }
}

/// Read a headered CSV file into rows, preserving source order.
pub fn read_rows(path: &Path) -> Result<Vec<InputRow>> {
    let file = std::fs::File::open(path)?;
    let rows = parse_rows(file)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "read input");
    Ok(rows)
}

pub fn parse_rows<R: Read>(reader: R) -> Result<Vec<InputRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut seen = HashSet::new();
    if let Some(repeated) = headers.iter().find(|h| !seen.insert(*h)) {
        return Err(GenError::DuplicateColumn(repeated.to_string()));
    }

    for required in [DEVELOPER_NAME, LABEL] {
        if !headers.iter().any(|h| h == required) {
            return Err(GenError::MissingColumn(required.to_string()));
        }
    }

    let mut rows = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        rows.push(InputRow::new(i + 1, headers.iter().zip(record.iter())));
    }
    Ok(rows)
}

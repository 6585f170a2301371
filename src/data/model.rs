use std::str::FromStr;

use serde::Serialize;

use super::error::PlotError;

// ---------------------------------------------------------------------------
// DataTable – the raw file split into header and token rows
// ---------------------------------------------------------------------------

/// One data line of the file, still as text.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based line number in the source file.
    pub line: usize,
    pub tokens: Vec<String>,
}

impl Row {
    /// Parse the token at `column` as `f64`.
    ///
    /// Callers check the row width first; a missing column is still reported
    /// as a format error rather than a panic.
    pub fn value(&self, column: usize) -> Result<f64, PlotError> {
        let token = self.tokens.get(column).ok_or_else(|| {
            PlotError::format(
                self.line,
                format!("row has {} columns, column {column} missing", self.tokens.len()),
            )
        })?;
        f64::from_str(token).map_err(|source| PlotError::NumericConversion {
            line: self.line,
            column,
            token: token.clone(),
            source,
        })
    }

    pub fn width(&self) -> usize {
        self.tokens.len()
    }
}

/// A parsed benchmark table: ignored title line, header tokens, data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    /// Line 1 of the file, kept only for log output.
    pub title: String,
    /// Column names from line 2. Column 0 names the x axis.
    pub header: Vec<String>,
    pub rows: Vec<Row>,
}

impl DataTable {
    /// File line number of the header.
    pub const HEADER_LINE: usize = 2;

    /// Fail unless the header and every row have at least `required` columns.
    pub fn require_columns(&self, required: usize) -> Result<(), PlotError> {
        if self.header.len() < required {
            return Err(PlotError::format(
                Self::HEADER_LINE,
                format!(
                    "header has {} columns, {required} required",
                    self.header.len()
                ),
            ));
        }
        if let Some(row) = self.rows.iter().find(|r| r.width() < required) {
            return Err(PlotError::format(
                row.line,
                format!("row has {} columns, {required} required", row.width()),
            ));
        }
        Ok(())
    }

    /// Column 0 of every row.
    pub fn x_values(&self) -> Result<Vec<f64>, PlotError> {
        self.rows.iter().map(|r| r.value(0)).collect()
    }

    pub fn x_label(&self) -> &str {
        self.header.first().map(String::as_str).unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// SeriesSet – what the renderer consumes
// ---------------------------------------------------------------------------

/// One named y-sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub label: String,
    pub y: Vec<f64>,
}

/// Shared x-sequence plus named y-sequences, all of the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSet {
    pub x_label: String,
    pub x: Vec<f64>,
    /// In header order.
    pub series: Vec<Series>,
}

impl SeriesSet {
    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn get(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(line: usize, tokens: &[&str]) -> Row {
        Row {
            line,
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_row_value() {
        let r = row(3, &["10", "2.5", "x"]);
        assert_eq!(r.value(1).unwrap(), 2.5);
        assert!(matches!(
            r.value(2),
            Err(PlotError::NumericConversion { line: 3, column: 2, .. })
        ));
        assert!(matches!(r.value(5), Err(PlotError::Format { line: 3, .. })));
    }

    #[test]
    fn test_require_columns() {
        let table = DataTable {
            title: String::new(),
            header: vec!["N".into(), "A".into(), "B".into()],
            rows: vec![row(3, &["1", "2", "3"]), row(4, &["1", "2"])],
        };
        assert!(table.require_columns(2).is_ok());
        match table.require_columns(3) {
            Err(PlotError::Format { line, .. }) => assert_eq!(line, 4),
            other => panic!("expected format error, got {other:?}"),
        }
        match table.require_columns(4) {
            Err(PlotError::Format { line, .. }) => assert_eq!(line, DataTable::HEADER_LINE),
            other => panic!("expected format error, got {other:?}"),
        }
    }

    #[test]
    fn test_series_set_lookup() {
        let set = SeriesSet {
            x_label: "N".into(),
            x: vec![1.0, 2.0],
            series: vec![
                Series { label: "A".into(), y: vec![3.0, 4.0] },
                Series { label: "B".into(), y: vec![5.0, 6.0] },
            ],
        };
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.labels(), vec!["A", "B"]);
        assert_eq!(set.get("B").map(|s| s.y.clone()), Some(vec![5.0, 6.0]));
        assert!(set.get("C").is_none());
    }
}

use std::path::Path;

use super::error::PlotError;
use super::model::{DataTable, Row};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Read a benchmark table from disk.
///
/// Layout:
/// ```text
/// <anything>                      line 1, ignored
/// elements naive transpose ...    line 2, header
/// 160000 812.00 95.33 ...         line 3.., whitespace-separated numbers
/// ```
pub fn load_table(path: &Path) -> Result<DataTable, PlotError> {
    let lines = read_lines(path)?;
    let table = parse_table(&lines)?;
    log::debug!("title line: {:?}", table.title);
    log::info!(
        "Loaded {} rows with header {:?} from {}",
        table.rows.len(),
        table.header,
        path.display()
    );
    Ok(table)
}

/// Read the file into its ordered lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>, PlotError> {
    let text = std::fs::read_to_string(path).map_err(|source| PlotError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Split raw lines into title, header tokens and token rows.
///
/// Every line after the header is a row, blank ones included, so a gap in the
/// data fails the width check later. Only blank lines after the last data
/// line are dropped. Nothing is parsed as a number here; widths and values
/// are checked by the extractor for the active mode.
pub fn parse_table<S: AsRef<str>>(lines: &[S]) -> Result<DataTable, PlotError> {
    let Some((title, rest)) = lines.split_first() else {
        return Err(PlotError::format(DataTable::HEADER_LINE, "file is empty, no header"));
    };
    let Some((header, data)) = rest.split_first() else {
        return Err(PlotError::format(DataTable::HEADER_LINE, "missing header line"));
    };

    let header: Vec<String> = tokenize(header.as_ref());
    if header.is_empty() {
        return Err(PlotError::format(DataTable::HEADER_LINE, "header line is blank"));
    }

    let mut rows: Vec<Row> = data
        .iter()
        .enumerate()
        // data starts on line 3
        .map(|(i, line)| Row { line: i + 3, tokens: tokenize(line.as_ref()) })
        .collect();
    while rows.last().is_some_and(|r| r.tokens.is_empty()) {
        rows.pop();
    }

    Ok(DataTable {
        title: title.as_ref().trim().to_string(),
        header,
        rows,
    })
}

fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}

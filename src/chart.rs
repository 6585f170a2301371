use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::data::model::SeriesSet;

// ---------------------------------------------------------------------------
// ChartSpec – display parameters around a SeriesSet
// ---------------------------------------------------------------------------

pub const RATIO_TITLE: &str = "Performance Ratio - Hand-Written Go to Metal";
pub const RATIO_Y_LABEL: &str = "Relative Completion Time Percentage (%)";
pub const ORIGINAL_TITLE: &str = "Performance Comparison";
pub const COLUMNS_TITLE: &str = "Matrix Multiplication Performance";
pub const COLUMNS_Y_LABEL: &str = "Average Completion Time (ms)";

/// Everything the renderer needs: one line per series against `series_set.x`.
#[derive(Debug, Clone)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    /// Empty when the chart has no y axis label.
    pub y_label: String,
    pub series_set: SeriesSet,
}

impl ChartSpec {
    /// Chart for the comparison program.
    pub fn ratio(series_set: SeriesSet, cmp: bool) -> Self {
        let (title, y_label) = if cmp {
            (RATIO_TITLE, RATIO_Y_LABEL)
        } else {
            (ORIGINAL_TITLE, "")
        };
        Self {
            title: title.to_string(),
            x_label: series_set.x_label.clone(),
            y_label: y_label.to_string(),
            series_set,
        }
    }

    /// Chart for the multi-column program.
    pub fn columns(series_set: SeriesSet) -> Self {
        Self {
            title: COLUMNS_TITLE.to_string(),
            x_label: series_set.x_label.clone(),
            y_label: COLUMNS_Y_LABEL.to_string(),
            series_set,
        }
    }

    /// Write the series to a file.  Dispatch by extension.
    ///
    /// Supported formats:
    /// * `.json` – `{ "x_label": .., "x": [..], "series": [{ "label": .., "y": [..] }] }`
    /// * `.csv`  – header `x_label,label1,label2,..`, one record per data row
    pub fn export(&self, path: &Path) -> Result<()> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        let written = match ext.as_str() {
            "json" => self.export_json(path),
            "csv" => self.export_csv(path),
            other => bail!("Unsupported export extension: .{other}"),
        };
        written.with_context(|| format!("exporting series to {}", path.display()))?;

        log::info!(
            "Exported {} series x {} rows to {}",
            self.series_set.series.len(),
            self.series_set.len(),
            path.display()
        );
        Ok(())
    }

    fn export_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path).context("creating JSON file")?;
        serde_json::to_writer_pretty(std::io::BufWriter::new(file), &self.series_set)
            .context("writing JSON")?;
        Ok(())
    }

    fn export_csv(&self, path: &Path) -> Result<()> {
        let set = &self.series_set;
        let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;

        let mut header = vec![set.x_label.as_str()];
        header.extend(set.labels());
        writer.write_record(&header).context("writing CSV header")?;

        for (row, x) in set.x.iter().enumerate() {
            let mut record = vec![x.to_string()];
            record.extend(set.series.iter().map(|s| s.y[row].to_string()));
            writer
                .write_record(&record)
                .with_context(|| format!("writing CSV row {row}"))?;
        }
        writer.flush().context("flushing CSV")?;
        Ok(())
    }
}

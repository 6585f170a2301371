use super::error::PlotError;
use super::model::{DataTable, Series, SeriesSet};

// ---------------------------------------------------------------------------
// Ratio mode
// ---------------------------------------------------------------------------

/// A y-series computed as `column[numerator] / column[denominator] * 100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatioPair {
    pub numerator: usize,
    pub denominator: usize,
}

/// Fixed positions in the full benchmark table:
/// `metal_naive / naive` and `metal_transpose / transpose`.
pub const RATIO_PAIRS: [RatioPair; 2] = [
    RatioPair { numerator: 4, denominator: 1 },
    RatioPair { numerator: 5, denominator: 2 },
];

/// Every row needs columns `0..=5` in ratio mode.
pub const RATIO_MIN_COLUMNS: usize = 6;

pub const PERCENT: f64 = 100.0;

impl RatioPair {
    /// `"<numerator header>/<denominator header>"`. The header must already
    /// have been checked against [`RATIO_MIN_COLUMNS`].
    pub(crate) fn label(&self, header: &[String]) -> String {
        format!("{}/{}", header[self.numerator], header[self.denominator])
    }
}

/// Build the Series Set for the comparison program.
///
/// With `cmp == false` only the x-sequence is produced: the "original" plot
/// has never been defined, so it renders axes with no lines.
pub fn extract_ratios(table: &DataTable, cmp: bool) -> Result<SeriesSet, PlotError> {
    if !cmp {
        let x = table.x_values()?;
        log::debug!("original mode: {} x values, no series", x.len());
        return Ok(SeriesSet {
            x_label: table.x_label().to_string(),
            x,
            series: Vec::new(),
        });
    }

    table.require_columns(RATIO_MIN_COLUMNS)?;
    let x = table.x_values()?;

    let mut series = Vec::with_capacity(RATIO_PAIRS.len());
    for pair in &RATIO_PAIRS {
        let y = table
            .rows
            .iter()
            .map(|row| -> Result<f64, PlotError> {
                let numerator = row.value(pair.numerator)?;
                let denominator = row.value(pair.denominator)?;
                if denominator == 0.0 {
                    return Err(PlotError::ZeroDenominator {
                        line: row.line,
                        column: pair.denominator,
                    });
                }
                Ok(numerator / denominator * PERCENT)
            })
            .collect::<Result<Vec<f64>, PlotError>>()?;

        let label = pair.label(&table.header);
        log::debug!("ratio series {label}: {} points", y.len());
        series.push(Series { label, y });
    }

    Ok(SeriesSet {
        x_label: table.x_label().to_string(),
        x,
        series,
    })
}

// ---------------------------------------------------------------------------
// Multi-column mode
// ---------------------------------------------------------------------------

/// Which benchmark layout the table was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnSet {
    /// Every implementation: 8 timing columns.
    #[default]
    Full,
    /// GPU methods plus Gonum and OpenBLAS: 5 timing columns.
    Fast,
    /// Metal and MPS only: 3 timing columns.
    GpuOnly,
}

impl ColumnSet {
    /// `--fast` is looked at first, so it wins over `--gpuonly`.
    pub fn from_flags(fast: bool, gpu_only: bool) -> Self {
        if fast {
            ColumnSet::Fast
        } else if gpu_only {
            ColumnSet::GpuOnly
        } else {
            ColumnSet::Full
        }
    }

    /// Columns including the x column.
    pub fn num_columns(self) -> usize {
        match self {
            ColumnSet::Full => 9,
            ColumnSet::Fast => 6,
            ColumnSet::GpuOnly => 4,
        }
    }

    /// Header written by the benchmark for this layout.
    pub fn header(self) -> &'static [&'static str] {
        match self {
            ColumnSet::Full => &[
                "elements",
                "naive",
                "transpose",
                "transpose_parallel",
                "metal_naive",
                "metal_transpose",
                "mps",
                "gonum",
                "openblas",
            ],
            ColumnSet::Fast => &[
                "elements",
                "metal_naive",
                "metal_transpose",
                "mps",
                "gonum",
                "openblas",
            ],
            ColumnSet::GpuOnly => &["elements", "metal_naive", "metal_transpose", "mps"],
        }
    }
}

/// One series per header column `1..num_columns`, in header order.
pub fn extract_columns(table: &DataTable, columns: ColumnSet) -> Result<SeriesSet, PlotError> {
    let num_columns = columns.num_columns();
    table.require_columns(num_columns)?;
    let x = table.x_values()?;

    let series = table.header[1..num_columns]
        .iter()
        .enumerate()
        .map(|(i, label)| -> Result<Series, PlotError> {
            let y = table
                .rows
                .iter()
                .map(|row| row.value(i + 1))
                .collect::<Result<Vec<f64>, PlotError>>()?;
            log::debug!("column series {label}: {} points", y.len());
            Ok(Series {
                label: label.clone(),
                y,
            })
        })
        .collect::<Result<Vec<Series>, PlotError>>()?;

    Ok(SeriesSet {
        x_label: table.x_label().to_string(),
        x,
        series,
    })
}

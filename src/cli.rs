//! Command-line interface definitions for both plotting programs.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::data::extract::ColumnSet;

/// Options shared by both programs.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Also write the derived series to a .json or .csv file.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Do not open a window; load, derive and export, then exit.
    #[arg(long)]
    pub headless: bool,
}

/// Plot CPU-vs-GPU completion time ratios from a benchmark table.
#[derive(Parser, Debug)]
#[command(name = "bench-plot-cmp", version, about)]
pub struct CmpArgs {
    /// The data file to plot.
    pub filename: PathBuf,

    /// Compare hand-written CPU to GPU methods.
    #[arg(long)]
    pub cmp: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Plot every timing column of a benchmark table.
#[derive(Parser, Debug)]
#[command(name = "bench-plot", version, about)]
pub struct ColumnsArgs {
    /// The data file to plot.
    pub filename: PathBuf,

    /// Table was produced in fast mode (5 series).
    #[arg(long)]
    pub fast: bool,

    /// Table was produced in GPU-only mode (3 series).
    #[arg(long = "gpuonly")]
    pub gpu_only: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

impl ColumnsArgs {
    pub fn column_set(&self) -> ColumnSet {
        ColumnSet::from_flags(self.fast, self.gpu_only)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions_are_valid() {
        CmpArgs::command().debug_assert();
        ColumnsArgs::command().debug_assert();
    }

    #[test]
    fn test_cmp_args() {
        let args = CmpArgs::try_parse_from(["bench-plot-cmp", "data.txt", "--cmp"]).unwrap();
        assert_eq!(args.filename, PathBuf::from("data.txt"));
        assert!(args.cmp);
        assert!(!args.common.headless);

        let args = CmpArgs::try_parse_from(["bench-plot-cmp", "data.txt"]).unwrap();
        assert!(!args.cmp);

        assert!(CmpArgs::try_parse_from(["bench-plot-cmp"]).is_err());
    }

    #[test]
    fn test_columns_args() {
        let parse = |argv: &[&str]| {
            ColumnsArgs::try_parse_from(argv.iter().copied())
                .unwrap()
                .column_set()
        };
        assert_eq!(parse(&["bench-plot", "d.txt"]), ColumnSet::Full);
        assert_eq!(parse(&["bench-plot", "d.txt", "--fast"]), ColumnSet::Fast);
        assert_eq!(parse(&["bench-plot", "d.txt", "--gpuonly"]), ColumnSet::GpuOnly);
        assert_eq!(parse(&["bench-plot", "d.txt", "--gpuonly", "--fast"]), ColumnSet::Fast);
    }

    #[test]
    fn test_common_args() {
        let args = ColumnsArgs::try_parse_from([
            "bench-plot",
            "d.txt",
            "--headless",
            "--export",
            "out.csv",
        ])
        .unwrap();
        assert!(args.common.headless);
        assert_eq!(args.common.export, Some(PathBuf::from("out.csv")));
    }
}

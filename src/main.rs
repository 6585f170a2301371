use anyhow::{Context, Result};
use clap::Parser;

use bench_plot::app;
use bench_plot::chart::ChartSpec;
use bench_plot::cli::ColumnsArgs;
use bench_plot::data::{extract, loader};

fn main() -> Result<()> {
    env_logger::init();

    let args = ColumnsArgs::parse();
    run(&args)
}

fn run(args: &ColumnsArgs) -> Result<()> {
    let columns = args.column_set();
    log::debug!("{columns:?} layout, {} columns", columns.num_columns());

    let table = loader::load_table(&args.filename)?;
    let series_set = extract::extract_columns(&table, columns)
        .with_context(|| format!("extracting series from {}", args.filename.display()))?;

    app::present(ChartSpec::columns(series_set), &args.common)
}

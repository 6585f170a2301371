use anyhow::{Context, Result};
use clap::Parser;

use bench_plot::app;
use bench_plot::chart::ChartSpec;
use bench_plot::cli::CmpArgs;
use bench_plot::data::{extract, loader};

fn main() -> Result<()> {
    env_logger::init();

    let args = CmpArgs::parse();
    run(&args)
}

fn run(args: &CmpArgs) -> Result<()> {
    if !args.cmp {
        log::warn!("original mode has no series defined; drawing empty axes");
    }

    let table = loader::load_table(&args.filename)?;
    let series_set = extract::extract_ratios(&table, args.cmp)
        .with_context(|| format!("extracting ratios from {}", args.filename.display()))?;

    app::present(ChartSpec::ratio(series_set, args.cmp), &args.common)
}

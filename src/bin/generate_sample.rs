use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bench_plot::data::extract::ColumnSet;
use bench_plot::data::sample::generate_table;

/// Write a synthetic benchmark table for trying out the plotters.
#[derive(Parser, Debug)]
#[command(name = "generate_sample", version, about)]
struct SampleArgs {
    /// Output file.
    #[arg(default_value = "sample_bench.txt")]
    output: PathBuf,

    /// Number of matrix sizes (rows).
    #[arg(long, default_value_t = 20)]
    rows: usize,

    /// Step added to the matrix dimension per row.
    #[arg(long, default_value_t = 16)]
    increment: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Fast layout (no hand-written CPU methods).
    #[arg(long)]
    fast: bool,

    /// GPU-only layout.
    #[arg(long = "gpuonly")]
    gpu_only: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = SampleArgs::parse();
    let columns = ColumnSet::from_flags(args.fast, args.gpu_only);
    let text = generate_table(columns, args.rows, args.increment, args.seed);

    std::fs::write(&args.output, text)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Wrote {} rows ({} columns) to {}",
        args.rows,
        columns.num_columns(),
        args.output.display()
    );
    Ok(())
}

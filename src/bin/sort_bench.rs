use clap::Parser;
use sort_bench::benchmark::{
    BenchmarkConfig, BenchmarkRunner, Distribution, ResultTable, SimpleVerifier, build_markdown,
    print_terminal_summary, results_to_csv, write_report,
};
use sort_bench::benchmark::types::{DEFAULT_INSERTION_MAX_N, DEFAULT_REPEATS, DEFAULT_REPORT_PATH};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "sort-bench",
    version,
    about = "Compare insertion sort, merge sort and the std stable sort"
)]
struct BenchArgs {
    /// Input sizes to benchmark, comma separated
    #[arg(long, value_delimiter = ',', default_value = "500,2000,6000,12000")]
    sizes: Vec<usize>,

    /// Timed runs per cell, averaged
    #[arg(short, long, default_value_t = DEFAULT_REPEATS)]
    repeats: usize,

    /// Untimed runs before measuring each cell
    #[arg(long, default_value_t = 0)]
    warmup_runs: usize,

    /// Largest size at which insertion sort is still run
    #[arg(long, default_value_t = DEFAULT_INSERTION_MAX_N)]
    insertion_max_n: usize,

    /// Datasets to run, comma separated (random, sorted, reverse, nearly_sorted)
    #[arg(long, value_delimiter = ',', default_value = "random,sorted,reverse,nearly_sorted")]
    datasets: Vec<String>,

    /// Seed for the random generators. Unseeded runs differ every time
    #[arg(long)]
    seed: Option<u64>,

    /// Markdown report path
    #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
    output: PathBuf,

    /// Also write the raw records as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Verify every algorithm's output before timing it
    #[arg(short, long)]
    verify: bool,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let args = BenchArgs::parse();

    let distributions = args
        .datasets
        .iter()
        .map(|name| name.parse::<Distribution>())
        .collect::<Result<Vec<_>, _>>()?;

    let config = BenchmarkConfig {
        sizes: args.sizes,
        repeats: args.repeats,
        warmup_runs: args.warmup_runs,
        insertion_max_n: args.insertion_max_n,
        distributions,
        seed: args.seed,
        verify: args.verify,
        report_path: args.output,
        csv_path: args.csv,
        ..BenchmarkConfig::default()
    };

    let mut runner = BenchmarkRunner::new(config)?;
    if args.verify {
        runner.set_verifier(Box::new(SimpleVerifier::new()));
    }

    let results = runner.run_benchmarks()?;
    let config = runner.config();

    let table = ResultTable::from_records(&results);
    print_terminal_summary(&table);

    write_report(&config.report_path, &build_markdown(&table, config))?;
    info!("Wrote {} records to {:?}", results.len(), config.report_path);

    if let Some(ref csv_path) = config.csv_path {
        write_report(csv_path, &results_to_csv(&results))?;
        info!("Wrote CSV to {:?}", csv_path);
    }

    println!("\nDone! Report saved to {}", config.report_path.display());
    Ok(())
}

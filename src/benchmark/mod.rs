pub mod input;
pub mod reporting;
pub mod runner;
pub mod timing;
pub mod types;
pub mod verification;

pub use input::{BenchmarkInputProvider, gen_nearly_sorted, gen_random, gen_reverse, gen_sorted};
pub use reporting::{
    ResultTable, build_markdown, find_fastest, format_progress_line, format_time,
    print_terminal_summary, render_terminal_summary, results_to_csv, write_report,
};
pub use runner::BenchmarkRunner;
pub use timing::time_algorithm;
pub use types::{Algorithm, BenchmarkConfig, Distribution, ResultRecord};
pub use verification::{OutputVerifier, SimpleVerifier, VerifyContext};

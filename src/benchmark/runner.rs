use super::input::BenchmarkInputProvider;
use super::reporting::format_progress_line;
use super::timing::time_algorithm;
use super::types::{Algorithm, BenchmarkConfig, Distribution, ResultRecord};
use super::verification::{OutputVerifier, SimpleVerifier, VerifyContext};
use crate::error::Result;
use crate::rand::benchmark_rng;
use rand::RngCore;
use tracing::{debug, info};

pub struct BenchmarkRunner {
    config: BenchmarkConfig,
    verifier: Box<dyn OutputVerifier>,
}

impl BenchmarkRunner {
    pub fn new(config: BenchmarkConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            verifier: Box::new(SimpleVerifier::new_quiet()),
        })
    }

    /// Replace the default `SimpleVerifier`. Only consulted when
    /// `config.verify` is set.
    pub fn set_verifier(&mut self, verifier: Box<dyn OutputVerifier>) {
        self.verifier = verifier;
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Walk datasets x sizes x algorithms and collect one record per triple.
    ///
    /// Prints one progress line per (dataset, size) as it completes.
    pub fn run_benchmarks(&self) -> Result<Vec<ResultRecord>> {
        let mut rng = benchmark_rng(self.config.seed);
        let mut all_results = Vec::with_capacity(
            self.config.distributions.len() * self.config.sizes.len() * self.config.algorithms.len(),
        );

        info!("Running sorting benchmark: {}", self.config);

        for &dataset in &self.config.distributions {
            debug!("Dataset {}: {}", dataset, dataset.get_description());
            for &n in &self.config.sizes {
                let cell = self.run_cell(dataset, n, &mut rng)?;
                let row: Vec<(Algorithm, Option<f64>)> =
                    cell.iter().map(|r| (r.algorithm, r.time)).collect();
                println!("{}", format_progress_line(n, dataset, &row));
                all_results.extend(cell);
            }
        }

        info!("Benchmark complete: {} records", all_results.len());
        Ok(all_results)
    }

    /// Time every configured algorithm on one shared input.
    fn run_cell(
        &self,
        dataset: Distribution,
        n: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<ResultRecord>> {
        let base = dataset.create_input(n, rng);
        let mut records = Vec::with_capacity(self.config.algorithms.len());

        for &algorithm in &self.config.algorithms {
            let time = if self.config.should_skip(algorithm, n) {
                debug!(
                    "Skipping {} on {} (n={} > {})",
                    algorithm, dataset, n, self.config.insertion_max_n
                );
                None
            } else {
                if self.config.verify {
                    self.verify_output(algorithm, dataset, &base)?;
                }
                let avg = time_algorithm(
                    algorithm.sorter(),
                    &base,
                    self.config.repeats,
                    self.config.warmup_runs,
                );
                if let Some(avg) = avg {
                    debug!("{} on {} (n={}): {:.6}s", algorithm, dataset, n, avg);
                }
                avg
            };

            records.push(ResultRecord {
                dataset,
                size: n,
                algorithm,
                time,
            });
        }

        Ok(records)
    }

    fn verify_output(&self, algorithm: Algorithm, dataset: Distribution, base: &[i64]) -> Result<()> {
        let output = algorithm.sorter().sort(base);
        let ctx = VerifyContext {
            algorithm,
            dataset,
            size: base.len(),
        };
        self.verifier.verify(&ctx, base, &output)
    }
}

use crate::error::{BenchError, Result};
use crate::sort::{InsertionSort, MergeSort, StdSort};
use crate::Sorter;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Named input shape fed to every algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Distribution {
    Random,
    Sorted,
    Reverse,
    NearlySorted,
}

impl Distribution {
    pub const ALL: [Distribution; 4] = [
        Distribution::Random,
        Distribution::Sorted,
        Distribution::Reverse,
        Distribution::NearlySorted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::Sorted => "sorted",
            Distribution::Reverse => "reverse",
            Distribution::NearlySorted => "nearly_sorted",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Distribution {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        Distribution::ALL
            .into_iter()
            .find(|d| d.name() == s.trim())
            .ok_or_else(|| BenchError::InvalidConfig(format!("unknown dataset {:?}", s)))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    InsertionSort,
    MergeSort,
    StdSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::StdSort,
    ];

    pub fn sorter(&self) -> &'static dyn Sorter {
        match self {
            Algorithm::InsertionSort => &InsertionSort,
            Algorithm::MergeSort => &MergeSort,
            Algorithm::StdSort => &StdSort,
        }
    }

    pub fn name(&self) -> &'static str {
        self.sorter().name()
    }

    /// Label used on the single-line terminal output.
    pub fn short_label(&self) -> &'static str {
        match self {
            Algorithm::InsertionSort => "insertion",
            Algorithm::MergeSort => "merge",
            Algorithm::StdSort => "std",
        }
    }

    /// Quadratic algorithms are subject to the size threshold skip.
    pub fn is_quadratic(&self) -> bool {
        matches!(self, Algorithm::InsertionSort)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One measured (dataset, size, algorithm) cell. `time` is `None` when the
/// cell was skipped by the size threshold.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultRecord {
    pub dataset: Distribution,
    pub size: usize,
    pub algorithm: Algorithm,
    pub time: Option<f64>,
}

#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    pub sizes: Vec<usize>,
    pub repeats: usize,
    pub warmup_runs: usize,
    pub insertion_max_n: usize,
    pub distributions: Vec<Distribution>,
    pub algorithms: Vec<Algorithm>,
    pub seed: Option<u64>,
    pub verify: bool,
    pub report_path: PathBuf,
    pub csv_path: Option<PathBuf>,
}

pub const DEFAULT_SIZES: [usize; 4] = [500, 2000, 6000, 12000];
pub const DEFAULT_REPEATS: usize = 3;
pub const DEFAULT_INSERTION_MAX_N: usize = 6000;
pub const DEFAULT_REPORT_PATH: &str = "sorting_benchmark_results.md";

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            repeats: DEFAULT_REPEATS,
            warmup_runs: 0,
            insertion_max_n: DEFAULT_INSERTION_MAX_N,
            distributions: Distribution::ALL.to_vec(),
            algorithms: Algorithm::ALL.to_vec(),
            seed: None,
            verify: false,
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            csv_path: None,
        }
    }
}

impl BenchmarkConfig {
    pub fn validate(&self) -> Result<()> {
        if self.repeats == 0 {
            return Err(BenchError::InvalidConfig(
                "repeats must be greater than zero".to_string(),
            ));
        }
        if self.distributions.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one dataset is required".to_string(),
            ));
        }
        if self.algorithms.is_empty() {
            return Err(BenchError::InvalidConfig(
                "at least one algorithm is required".to_string(),
            ));
        }
        if !self.sizes.windows(2).all(|w| w[0] < w[1]) {
            return Err(BenchError::InvalidConfig(format!(
                "sizes must be strictly ascending without duplicates, got {:?}",
                self.sizes
            )));
        }
        if let Some(dataset) = first_duplicate(&self.distributions) {
            return Err(BenchError::InvalidConfig(format!(
                "dataset {} listed more than once",
                dataset
            )));
        }
        if let Some(algorithm) = first_duplicate(&self.algorithms) {
            return Err(BenchError::InvalidConfig(format!(
                "algorithm {} listed more than once",
                algorithm
            )));
        }
        Ok(())
    }

    /// Whether the threshold policy suppresses `algorithm` at size `n`.
    pub fn should_skip(&self, algorithm: Algorithm, n: usize) -> bool {
        algorithm.is_quadratic() && n > self.insertion_max_n
    }
}

fn first_duplicate<T: PartialEq>(items: &[T]) -> Option<&T> {
    items
        .iter()
        .enumerate()
        .find(|(i, item)| items[..*i].contains(*item))
        .map(|(_, item)| item)
}

impl fmt::Display for BenchmarkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let datasets: Vec<&str> = self.distributions.iter().map(|d| d.name()).collect();
        write!(
            f,
            "sizes={:?}, repeats={}, warmup={}, insertion_max_n={}, datasets={:?}, seed={:?}, verify={}",
            self.sizes,
            self.repeats,
            self.warmup_runs,
            self.insertion_max_n,
            datasets,
            self.seed,
            self.verify
        )
    }
}

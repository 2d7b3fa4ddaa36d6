// Sorting Algorithm Benchmark Library

/// A sort algorithm under benchmark.
///
/// Implementors return a freshly allocated, non-decreasing copy of `input`
/// and never touch the input slice itself.
pub trait Sorter {
    fn name(&self) -> &'static str;

    fn sort(&self, input: &[i64]) -> Vec<i64>;
}

// Implementations
pub mod benchmark;
pub mod error;
pub mod rand;
pub mod sort;

// Export the main types
pub use benchmark::{
    Algorithm, BenchmarkConfig, BenchmarkRunner, Distribution, ResultRecord, ResultTable,
};
pub use error::{BenchError, Result};
pub use sort::{InsertionSort, MergeSort, StdSort, insertion_sort, merge, merge_sort, std_sort};

use crate::Sorter;
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Mean wall-clock seconds of `repeats` independent runs of `sorter` on `input`.
///
/// `warmup` untimed runs go first. Every run sorts the same borrowed input
/// and allocates its own output. Returns `None` when `repeats` is zero; the
/// runner rules that out through `BenchmarkConfig::validate`.
pub fn time_algorithm(
    sorter: &dyn Sorter,
    input: &[i64],
    repeats: usize,
    warmup: usize,
) -> Option<f64> {
    for _ in 0..warmup {
        black_box(sorter.sort(black_box(input)));
    }

    let samples = measure_samples(sorter, input, repeats);
    mean_seconds(&samples)
}

fn measure_samples(sorter: &dyn Sorter, input: &[i64], repeats: usize) -> Vec<Duration> {
    (0..repeats)
        .map(|_| {
            let start = Instant::now();
            let output = sorter.sort(black_box(input));
            let elapsed = start.elapsed();
            drop(black_box(output));
            elapsed
        })
        .collect()
}

fn mean_seconds(samples: &[Duration]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().map(Duration::as_secs_f64).sum::<f64>() / samples.len() as f64)
}

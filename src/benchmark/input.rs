use super::types::Distribution;
use rand::{Rng, RngCore};

/// Inclusive bound of the value range used by the `random` distribution.
pub const RANDOM_VALUE_BOUND: i64 = 1_000_000;

pub trait BenchmarkInputProvider {
    fn create_input(&self, n: usize, rng: &mut dyn RngCore) -> Vec<i64>;
    fn get_description(&self) -> String;
}

impl BenchmarkInputProvider for Distribution {
    fn create_input(&self, n: usize, rng: &mut dyn RngCore) -> Vec<i64> {
        match self {
            Distribution::Random => gen_random(n, rng),
            Distribution::Sorted => gen_sorted(n),
            Distribution::Reverse => gen_reverse(n),
            Distribution::NearlySorted => gen_nearly_sorted(n, rng),
        }
    }

    fn get_description(&self) -> String {
        match self {
            Distribution::Random => format!(
                "uniform values in [-{}, {}]",
                RANDOM_VALUE_BOUND, RANDOM_VALUE_BOUND
            ),
            Distribution::Sorted => "ascending 0..n".to_string(),
            Distribution::Reverse => "descending n..1".to_string(),
            Distribution::NearlySorted => "ascending with max(1, n/200) random swaps".to_string(),
        }
    }
}

pub fn gen_random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i64> {
    (0..n)
        .map(|_| rng.random_range(-RANDOM_VALUE_BOUND..=RANDOM_VALUE_BOUND))
        .collect()
}

pub fn gen_sorted(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

pub fn gen_reverse(n: usize) -> Vec<i64> {
    (1..=n as i64).rev().collect()
}

pub fn gen_nearly_sorted<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i64> {
    let mut a = gen_sorted(n);
    if n == 0 {
        return a;
    }
    let swaps = (n / 200).max(1);
    for _ in 0..swaps {
        let i = rng.random_range(0..n);
        let j = rng.random_range(0..n);
        a.swap(i, j);
    }
    a
}

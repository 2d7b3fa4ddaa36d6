#![allow(dead_code)]

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub mod sorter_behavior;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_array(rng: &mut StdRng, max_len: usize, spread: i64) -> Vec<i64> {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| rng.random_range(-spread..=spread)).collect()
}

pub fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

pub fn is_permutation(a: &[i64], b: &[i64]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();
    a == b
}

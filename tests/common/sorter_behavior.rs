#![allow(dead_code)]

use super::{is_permutation, is_sorted, random_array, seeded_rng};
use rand::seq::SliceRandom;
use sort_bench::Sorter;

pub fn basic_sort<S, F>(factory: F)
where
    S: Sorter,
    F: FnOnce() -> S,
{
    let sorter = factory();
    let input = vec![26, 1, 13, -4, 0];
    let output = sorter.sort(&input);
    assert_eq!(output, vec![-4, 0, 1, 13, 26]);
    assert_eq!(input, vec![26, 1, 13, -4, 0]);
}

pub fn empty_input<S, F>(factory: F)
where
    S: Sorter,
    F: FnOnce() -> S,
{
    let sorter = factory();
    let input: Vec<i64> = vec![];
    assert!(sorter.sort(&input).is_empty());
}

pub fn single_element<S, F>(factory: F)
where
    S: Sorter,
    F: FnOnce() -> S,
{
    let sorter = factory();
    let input = vec![42];
    assert_eq!(sorter.sort(&input), vec![42]);
}

pub fn shuffled_range<S, F>(factory: F)
where
    S: Sorter,
    F: FnOnce() -> S,
{
    let sorter = factory();
    let mut data: Vec<i64> = (0..500).collect();
    let mut rng = seeded_rng(500);
    data.shuffle(&mut rng);
    let output = sorter.sort(&data);
    assert_eq!(output, (0..500).collect::<Vec<i64>>());
}

pub fn many_duplicates<S, F>(factory: F)
where
    S: Sorter,
    F: FnOnce() -> S,
{
    let sorter = factory();
    let input: Vec<i64> = (0..300).map(|i| (i * 7919) % 5).collect();
    let output = sorter.sort(&input);
    assert!(is_sorted(&output));
    assert!(is_permutation(&input, &output));
}

pub fn random_inputs_are_sorted_permutations<S, F>(factory: F)
where
    S: Sorter,
    F: FnOnce() -> S,
{
    let sorter = factory();
    let mut rng = seeded_rng(0xC0FFEE);
    for _ in 0..200 {
        let input = random_array(&mut rng, 120, 50);
        let snapshot = input.clone();
        let output = sorter.sort(&input);
        assert_eq!(input, snapshot, "{} mutated its input", sorter.name());
        assert!(is_sorted(&output), "{} output not sorted", sorter.name());
        assert!(is_permutation(&input, &output), "{} lost elements", sorter.name());
    }
}

pub fn idempotent<S, F>(factory: F)
where
    S: Sorter,
    F: FnOnce() -> S,
{
    let sorter = factory();
    let mut rng = seeded_rng(17);
    for _ in 0..100 {
        let input = random_array(&mut rng, 80, 1_000_000);
        let once = sorter.sort(&input);
        let twice = sorter.sort(&once);
        assert_eq!(once, twice);
    }
}

pub fn matches_reference<S, F>(factory: F)
where
    S: Sorter,
    F: FnOnce() -> S,
{
    let sorter = factory();
    let mut rng = seeded_rng(99);
    for _ in 0..100 {
        let input = random_array(&mut rng, 200, 1_000);
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(sorter.sort(&input), expected);
    }
}

use crate::Sorter;

/// Baseline backed by the standard library's stable adaptive sort.
pub struct StdSort;

impl Sorter for StdSort {
    fn name(&self) -> &'static str {
        "Std Sort"
    }

    fn sort(&self, input: &[i64]) -> Vec<i64> {
        std_sort(input)
    }
}

pub fn std_sort(input: &[i64]) -> Vec<i64> {
    let mut a = input.to_vec();
    a.sort();
    a
}

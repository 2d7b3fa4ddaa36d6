use crate::Sorter;

/// Classic shifting insertion sort. O(n^2), stable.
pub struct InsertionSort;

impl Sorter for InsertionSort {
    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn sort(&self, input: &[i64]) -> Vec<i64> {
        insertion_sort(input)
    }
}

pub fn insertion_sort(input: &[i64]) -> Vec<i64> {
    let mut a = input.to_vec();
    for i in 1..a.len() {
        let key = a[i];
        let mut j = i;
        // Strict comparison keeps equal keys in input order
        while j > 0 && a[j - 1] > key {
            a[j] = a[j - 1];
            j -= 1;
        }
        a[j] = key;
    }
    a
}

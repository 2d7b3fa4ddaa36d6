use crate::Sorter;

/// Top-down recursive merge sort. O(n log n), stable.
pub struct MergeSort;

impl Sorter for MergeSort {
    fn name(&self) -> &'static str {
        "Merge Sort"
    }

    fn sort(&self, input: &[i64]) -> Vec<i64> {
        merge_sort(input)
    }
}

pub fn merge_sort(input: &[i64]) -> Vec<i64> {
    if input.len() <= 1 {
        return input.to_vec();
    }
    let mid = input.len() / 2;
    let left = merge_sort(&input[..mid]);
    let right = merge_sort(&input[mid..]);
    merge(&left, &right)
}

/// Merge two non-decreasing slices into one non-decreasing vector.
///
/// On ties the element from `left` is taken first.
pub fn merge(left: &[i64], right: &[i64]) -> Vec<i64> {
    merge_by(left, right, |a, b| a <= b)
}

fn merge_by<T: Clone>(left: &[T], right: &[T], take_left: impl Fn(&T, &T) -> bool) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if take_left(&left[i], &right[j]) {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

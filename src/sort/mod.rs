pub mod insertion;
pub mod merge;
pub mod reference;

pub use self::insertion::{InsertionSort, insertion_sort};
pub use self::merge::{MergeSort, merge, merge_sort};
pub use self::reference::{StdSort, std_sort};

#[cfg(test)]
pub(crate) fn is_sorted(data: &[i64]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

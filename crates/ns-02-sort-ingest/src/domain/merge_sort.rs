//! # Merge Sort
//!
//! Top-down stable merge sort. O(n log n) comparisons in the worst case.

/// Returns a new vector with `items` sorted ascending.
///
/// Stable: equal elements keep their input order. Sequences shorter than two
/// elements (including empty) are returned as-is.
pub fn merge_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    if items.len() < 2 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);
    merge(left, right)
}

/// Merges two sorted runs. The left head wins ties.
fn merge<T: PartialOrd>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if l <= r { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}

use ordkit_ordering::{LessThan, NaturalOrder};

/// Stable insertion sort in natural order.
pub fn insertion_sort<T: Clone + PartialOrd>(items: &[T]) -> Vec<T> {
    insertion_sort_by(items, NaturalOrder)
}

/// Stable insertion sort under `less`, performed on a copy of `items`.
///
/// Each element moves left only past predecessors strictly greater than it,
/// so equal elements never cross.
pub fn insertion_sort_by<T: Clone, L: LessThan<T>>(items: &[T], less: L) -> Vec<T> {
    let mut out = items.to_vec();
    for i in 1..out.len() {
        let mut j = i;
        while j > 0 && less.less(&out[i], &out[j - 1]) {
            j -= 1;
        }
        out[j..=i].rotate_right(1);
    }
    out
}

use ordkit_ordering::{LessThan, NaturalOrder};

/// Selection sort in natural order. Not stable.
pub fn selection_sort<T: Clone + PartialOrd>(items: &[T]) -> Vec<T> {
    selection_sort_by(items, NaturalOrder)
}

/// Selection sort under `less`, performed on a copy of `items`. Not stable:
/// the swap that places each minimum can move an equal element past others.
pub fn selection_sort_by<T: Clone, L: LessThan<T>>(items: &[T], less: L) -> Vec<T> {
    let mut out = items.to_vec();
    let n = out.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if less.less(&out[j], &out[min]) {
                min = j;
            }
        }
        if min != i {
            out.swap(i, min);
        }
    }
    out
}

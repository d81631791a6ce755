use ordkit_ordering::{LessThan, NaturalOrder};

/// Quicksort in natural order. Not stable.
pub fn quick_sort<T: Clone + PartialOrd>(items: &[T]) -> Vec<T> {
    quick_sort_by(items, NaturalOrder)
}

/// Quicksort under `less`, performed on a copy of `items`. Not stable.
pub fn quick_sort_by<T: Clone, L: LessThan<T>>(items: &[T], less: L) -> Vec<T> {
    let mut out = items.to_vec();
    sort_in_place(&mut out, &less);
    out
}

/// Recurses into the smaller partition and loops on the larger one, which
/// bounds stack depth by O(log n).
fn sort_in_place<T, L: LessThan<T>>(mut data: &mut [T], less: &L) {
    while data.len() > 1 {
        let p = partition(data, less);
        let (left, rest) = std::mem::take(&mut data).split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            sort_in_place(left, less);
            data = right;
        } else {
            sort_in_place(right, less);
            data = left;
        }
    }
}

/// Partitions around the midpoint element, which is parked at index 0 while
/// two cursors scan inward. Both scans stop on keys equivalent to the pivot,
/// so runs of duplicates split evenly instead of all landing on one side.
///
/// Returns the pivot's final position: nothing before it is greater than the
/// pivot and nothing after it is less.
fn partition<T, L: LessThan<T>>(data: &mut [T], less: &L) -> usize {
    data.swap(0, data.len() / 2);

    let mut i = 1;
    let mut j = data.len() - 1;
    loop {
        while i <= j && less.less(&data[i], &data[0]) {
            i += 1;
        }
        while i <= j && less.less(&data[0], &data[j]) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        data.swap(i, j);
        i += 1;
        j -= 1;
    }
    data.swap(0, j);
    j
}

use ordkit_ordering::{LessThan, NaturalOrder};

/// Stable merge sort in natural order.
pub fn merge_sort<T: Clone + PartialOrd>(items: &[T]) -> Vec<T> {
    merge_sort_by(items, NaturalOrder)
}

/// Stable merge sort under `less`.
///
/// The left half takes `ceil(n / 2)` elements. Equal elements keep their
/// input order: the merge only takes from the right half when its front is
/// strictly less than the left front.
pub fn merge_sort_by<T: Clone, L: LessThan<T>>(items: &[T], less: L) -> Vec<T> {
    sort_slice(items, &less)
}

fn sort_slice<T: Clone, L: LessThan<T>>(items: &[T], less: &L) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len().div_ceil(2);
    let left = sort_slice(&items[..mid], less);
    let right = sort_slice(&items[mid..], less);
    merge(left, right, less)
}

fn merge<T, L: LessThan<T>>(left: Vec<T>, right: Vec<T>, less: &L) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => less.less(r, l),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        out.extend(next);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_length_split() {
        assert_eq!(merge_sort(&[7, 1, 3, 6, 5, 4, 2]), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn ties_favor_left_half() {
        let items = [(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        let sorted = merge_sort_by(&items, |a: &(i32, char), b: &(i32, char)| a.0 < b.0);
        assert_eq!(sorted, vec![(0, 'b'), (0, 'd'), (1, 'a'), (1, 'c')]);
    }
}

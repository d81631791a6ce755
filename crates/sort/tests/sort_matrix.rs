use std::cell::Cell;

use ordkit_ordering::{LessThan, Predicate};
use ordkit_sort::{
    insertion_sort, insertion_sort_by, merge_sort, merge_sort_by, quick_sort, quick_sort_by,
    selection_sort, selection_sort_by, Algorithm,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

type SortFn = fn(&[i32]) -> Vec<i32>;

const SORTS: [(&str, SortFn); 4] = [
    ("merge", merge_sort::<i32>),
    ("selection", selection_sort::<i32>),
    ("insertion", insertion_sort::<i32>),
    ("quick", quick_sort::<i32>),
];

fn is_sorted_by<T, L: LessThan<T>>(items: &[T], less: &L) -> bool {
    items.windows(2).all(|w| !less.less(&w[1], &w[0]))
}

#[test]
fn distinct_values_matrix() {
    for (name, sort) in SORTS {
        assert_eq!(
            sort(&[7, 1, 3, 6, 5, 4, 2, 8]),
            vec![1, 2, 3, 4, 5, 6, 7, 8],
            "{name}"
        );
    }
}

#[test]
fn duplicate_values_matrix() {
    for (name, sort) in SORTS {
        assert_eq!(
            sort(&[7, 1, 3, 6, 5, 1, 2, 8]),
            vec![1, 1, 2, 3, 5, 6, 7, 8],
            "{name}"
        );
    }
}

#[test]
fn degenerate_input_matrix() {
    for (name, sort) in SORTS {
        assert!(sort(&[]).is_empty(), "{name}");
        assert_eq!(sort(&[42]), vec![42], "{name}");
        assert_eq!(sort(&[2, 1]), vec![1, 2], "{name}");
        assert_eq!(sort(&[5; 7]), vec![5; 7], "{name}");
        assert_eq!(sort(&[3, 2, 1, 0]), vec![0, 1, 2, 3], "{name}");
    }
}

#[test]
fn input_is_not_mutated_matrix() {
    let input = vec![9, 4, 7, 1];
    for (_, sort) in SORTS {
        let _ = sort(&input);
        assert_eq!(input, vec![9, 4, 7, 1]);
    }
}

#[test]
fn descending_predicate_matrix() {
    let desc = |a: &i32, b: &i32| a > b;
    let input = [7, 1, 3, 6, 5, 1, 2, 8];
    let expected = vec![8, 7, 6, 5, 3, 2, 1, 1];
    assert_eq!(merge_sort_by(&input, desc), expected);
    assert_eq!(selection_sort_by(&input, desc), expected);
    assert_eq!(insertion_sort_by(&input, desc), expected);
    assert_eq!(quick_sort_by(&input, desc), expected);
}

#[test]
fn absent_predicate_falls_back_matrix() {
    let input = [3, 1, 2];
    for algorithm in Algorithm::ALL {
        let less: Predicate<fn(&i32, &i32) -> bool> = None.into();
        assert_eq!(algorithm.sort_by(&input, less), vec![1, 2, 3], "{algorithm}");
    }
}

#[test]
fn strings_and_floats_matrix() {
    let words = ["pear", "apple", "fig", "banana"];
    for algorithm in Algorithm::ALL {
        assert_eq!(
            algorithm.sort(&words),
            vec!["apple", "banana", "fig", "pear"],
            "{algorithm}"
        );
        assert_eq!(algorithm.sort(&[2.5, -1.0, 0.0]), vec![-1.0, 0.0, 2.5]);
    }
}

#[test]
fn stability_matrix() {
    let items: Vec<(u8, usize)> = [3u8, 1, 3, 2, 1, 3, 2]
        .into_iter()
        .enumerate()
        .map(|(i, k)| (k, i))
        .collect();
    let by_key = |a: &(u8, usize), b: &(u8, usize)| a.0 < b.0;
    let expected = vec![(1, 1), (1, 4), (2, 3), (2, 6), (3, 0), (3, 2), (3, 5)];

    for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_stable()) {
        assert_eq!(algorithm.sort_by(&items, by_key), expected, "{algorithm}");
    }
}

#[test]
fn shuffled_permutations_matrix() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let sorted: Vec<i32> = (0..300).map(|i| i / 3).collect();
    for _ in 0..10 {
        let mut input = sorted.clone();
        input.shuffle(&mut rng);
        for (name, sort) in SORTS {
            assert_eq!(sort(&input), sorted, "{name}");
        }
    }
}

#[test]
fn quick_sort_large_presorted_matrix() {
    let ascending: Vec<i32> = (0..20_000).collect();
    assert_eq!(quick_sort(&ascending), ascending);
    let descending: Vec<i32> = (0..20_000).rev().collect();
    assert_eq!(quick_sort(&descending), ascending);
    assert_eq!(merge_sort(&descending), ascending);
}

#[test]
fn quick_sort_many_duplicates_matrix() {
    let n = 20_000;
    let inputs: [(&str, Vec<i32>); 3] = [
        ("all equal", vec![7; n]),
        ("three keys", (0..n as i32).map(|i| i % 3).collect()),
        ("two runs", (0..n as i32).map(|i| i32::from(i >= n as i32 / 2)).collect()),
    ];
    for (name, input) in inputs {
        let calls = Cell::new(0usize);
        let counted = |a: &i32, b: &i32| {
            calls.set(calls.get() + 1);
            a < b
        };
        let out = quick_sort_by(&input, counted);

        let mut expected = input.clone();
        expected.sort();
        assert_eq!(out, expected, "{name}");
        // n log2 n is about 290k here; quadratic behavior needs ~200M.
        assert!(calls.get() < 1_000_000, "{name}: {} comparisons", calls.get());
    }
}

proptest! {
    #[test]
    fn output_is_sorted_permutation(input in prop::collection::vec(-50i32..50, 0..80)) {
        let mut expected = input.clone();
        expected.sort();
        for (_, sort) in SORTS {
            let out = sort(&input);
            prop_assert!(is_sorted_by(&out, &ordkit_ordering::NaturalOrder));
            prop_assert_eq!(&out, &expected);
        }
    }

    #[test]
    fn sorting_sorted_input_is_identity(input in prop::collection::vec(any::<i32>(), 0..80)) {
        let mut sorted = input.clone();
        sorted.sort();
        for (_, sort) in SORTS {
            prop_assert_eq!(sort(&sorted), sorted.clone());
        }
    }

    #[test]
    fn stable_sorts_keep_equal_keys_in_order(keys in prop::collection::vec(0u8..5, 0..60)) {
        let items: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let by_key = |a: &(u8, usize), b: &(u8, usize)| a.0 < b.0;

        let mut expected = items.clone();
        expected.sort_by_key(|item| item.0);

        prop_assert_eq!(merge_sort_by(&items, by_key), expected.clone());
        prop_assert_eq!(insertion_sort_by(&items, by_key), expected);
    }

    #[test]
    fn unstable_sorts_still_order_keys(keys in prop::collection::vec(0u8..5, 0..60)) {
        let items: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let by_key = |a: &(u8, usize), b: &(u8, usize)| a.0 < b.0;

        for out in [selection_sort_by(&items, by_key), quick_sort_by(&items, by_key)] {
            prop_assert!(is_sorted_by(&out, &by_key));
            let mut indices: Vec<usize> = out.iter().map(|item| item.1).collect();
            indices.sort();
            prop_assert_eq!(indices, (0..items.len()).collect::<Vec<_>>());
        }
    }
}

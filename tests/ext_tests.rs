//! Tests for the method-syntax extension trait.

#![cfg(feature = "ext")]

use iterset::ext::SortedIteratorExt;
use iterset::join;
use iterset::predicate;
use rstest::rstest;

const A: [i32; 5] = [5, 10, 15, 20, 25];
const B: [i32; 5] = [10, 20, 30, 40, 50];

#[rstest]
fn test_methods_match_free_functions() {
    let methods = [
        A.into_iter().merge_sorted(B).collect::<Vec<_>>(),
        A.into_iter().union_sorted(B).collect(),
        A.into_iter().intersection_sorted(B).collect(),
        A.into_iter().difference_sorted(B).collect(),
        A.into_iter().symmetric_difference_sorted(B).collect(),
    ];
    let functions = [
        join::merge(A, B).collect::<Vec<_>>(),
        join::union(A, B).collect(),
        join::intersection(A, B).collect(),
        join::difference(A, B).collect(),
        join::symmetric_difference(A, B).collect(),
    ];
    assert_eq!(methods, functions);
}

#[rstest]
#[case(vec![1, 2, 3], vec![2, 3], true)]
#[case(vec![1, 2, 3], vec![2, 2], false)]
#[case(vec![], vec![], true)]
fn test_predicate_methods(#[case] a: Vec<i32>, #[case] b: Vec<i32>, #[case] expected: bool) {
    assert_eq!(a.clone().into_iter().includes_sorted(b.clone()), expected);
    assert_eq!(a.clone().into_iter().is_superset_sorted(b.clone()), expected);
    assert_eq!(b.clone().into_iter().is_subset_sorted(a.clone()), expected);
    assert_eq!(predicate::includes(a, b), expected);
}

#[rstest]
fn test_methods_chain() {
    let primes = [2, 3, 5, 7, 11, 13];
    let chained: Vec<i32> = (1..15)
        .step_by(2)
        .intersection_sorted(primes)
        .union_sorted([2])
        .difference_sorted([13])
        .collect();
    assert_eq!(chained, vec![2, 3, 5, 7, 11]);
}

#[rstest]
fn test_methods_on_borrowed_iterators() {
    let a = vec!["apple".to_string(), "fig".to_string()];
    let b = vec!["fig".to_string(), "kiwi".to_string()];
    let common: Vec<&String> = a.iter().intersection_sorted(&b).collect();
    assert_eq!(common, vec![&"fig".to_string()]);
}

//! Tests for whole traversals of domains

use std::collections::HashSet;

use gat_lending_iterator::LendingIterator;
use insta::assert_snapshot;

use crate::coordinate::Coordinate;
use crate::domain::Domain;
use crate::iterators::TraversableRange;
use crate::partition::Partitioner;

fn render(range: &TraversableRange) -> String {
    range
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn test_domains() -> Vec<Domain> {
    vec![
        Domain::new(&[0, 5]).unwrap(),
        Domain::new(&[0, 2, 0, 2]).unwrap(),
        Domain::new(&[1, 9, 1, 9]).unwrap(),
        Domain::new(&[-3, 1, 2, 4, 0, 3]).unwrap(),
        Domain::new(&[0, 2, 0, 1, 0, 3, 5, 7]).unwrap(),
        Domain::new(&[0, 3, 4, 4]).unwrap(),
    ]
}

#[test]
fn two_by_two_sequence() {
    let range = TraversableRange::linear(Domain::new(&[0, 2, 0, 2]).unwrap());
    assert_snapshot!(render(&range), @"(0, 0) (1, 0) (0, 1) (1, 1)");
}

#[test]
fn three_dimensional_sequence() {
    let range = TraversableRange::linear(Domain::new(&[0, 2, 1, 3, 4, 6]).unwrap());
    assert_snapshot!(
        render(&range),
        @"(0, 1, 4) (1, 1, 4) (0, 2, 4) (1, 2, 4) (0, 1, 5) (1, 1, 5) (0, 2, 5) (1, 2, 5)"
    );
}

#[test]
fn count_is_product_of_extents() {
    for domain in test_domains() {
        let expected: usize = domain.extents().iter().product();
        let range = TraversableRange::linear(domain);

        assert_eq!(range.iter().size_hint(), (expected, Some(expected)));
        assert_eq!(range.iter().count(), expected);
    }
}

#[test]
fn coordinates_are_unique_and_in_bounds() {
    for domain in test_domains() {
        let range = TraversableRange::linear(domain.clone());
        let mut seen = HashSet::new();
        for c in &range {
            assert!(domain.contains(&c), "{c} outside of {domain}");
            assert!(seen.insert(c));
        }
        assert_eq!(Some(seen.len()), domain.len());
    }
}

#[test]
fn first_axis_varies_fastest() {
    for domain in test_domains() {
        let range = TraversableRange::linear(domain.clone());
        let visited: Vec<Coordinate> = range.iter().collect();

        for pair in visited.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            // the lowest axis that did not wrap moves up by one,
            // every lower axis wrapped back to its start
            let wrapped = |axis: usize| {
                a[axis] + 1 == domain.limit()[axis] && b[axis] == domain.start()[axis]
            };
            let moved = (0..domain.dimension()).find(|&axis| !wrapped(axis)).unwrap();
            assert_eq!(b[moved], a[moved] + 1);
            for axis in 0..moved {
                assert_eq!(a[axis] + 1, domain.limit()[axis]);
                assert_eq!(b[axis], domain.start()[axis]);
            }
            for axis in moved + 1..domain.dimension() {
                assert_eq!(a[axis], b[axis]);
            }
        }
    }
}

#[test]
fn empty_domain_yields_nothing() {
    let range = TraversableRange::linear(Domain::new(&[3, 3, 3, 5]).unwrap());

    assert_eq!(range.begin(), range.end());
    assert_eq!(range.iter().next(), None);
    assert_eq!(range.iter().size_hint(), (0, Some(0)));
    assert!(range.lend().next().is_none());
}

#[test]
fn lending_matches_owned() {
    for domain in test_domains() {
        let range = TraversableRange::linear(domain);
        let owned: Vec<Coordinate> = range.iter().collect();

        let mut lent = vec![];
        let mut traversal = range.lend();
        while let Some(c) = traversal.next() {
            lent.push(c.clone());
        }
        assert_eq!(owned, lent);
        // fused once the sentinel is reached
        assert!(traversal.next().is_none());
    }
}

#[test]
fn fresh_begin_restarts() {
    let range = TraversableRange::linear(Domain::new(&[0, 3, 0, 3]).unwrap());
    let mut iter = range.iter();
    iter.next();
    iter.next();
    assert_eq!(iter.size_hint(), (7, Some(7)));

    assert_eq!(range.iter().next(), Some(Coordinate::from(vec![0, 0])));
}

#[test]
fn partitions_traverse_disjointly() {
    let domain = Domain::new(&[1, 9, 1, 9]).unwrap();
    let mut seen = HashSet::new();

    for workers in [1, 3, 4, 7, 11] {
        seen.clear();
        for part in Partitioner::partitions(&domain, 1, workers).unwrap() {
            for c in &TraversableRange::from(part) {
                assert!(seen.insert(c));
            }
        }
        assert_eq!(Some(seen.len()), domain.len());
    }
}

#[test]
fn huge_domain_traverses_lazily() {
    let range = TraversableRange::linear(Domain::new(&[0, 1 << 40, 0, 1 << 40]).unwrap());
    let mut iter = range.iter();

    assert_eq!(iter.size_hint(), (usize::MAX, None));
    assert_eq!(iter.next(), Some(Coordinate::from(vec![0, 0])));
    assert_eq!(iter.next(), Some(Coordinate::from(vec![1, 0])));

    let first: Vec<Coordinate> = (&range).into_iter().take(3).collect();
    assert_eq!(first[2], Coordinate::from(vec![2, 0]));
}

#[test]
fn full_range_axis_reaches_sentinel() {
    let domain = Domain::new(&[isize::MAX - 2, isize::MAX, isize::MIN, isize::MIN + 1]).unwrap();
    let range = TraversableRange::linear(domain);

    assert_snapshot!(
        render(&range),
        @"(9223372036854775805, -9223372036854775808) (9223372036854775806, -9223372036854775808)"
    );
    assert_eq!(range.iter().size_hint(), (2, Some(2)));
}

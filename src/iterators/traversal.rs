//! Ranges that can be walked from a begin cursor to an end cursor

use std::iter::FusedIterator;

use gat_lending_iterator::LendingIterator;
use serde::{Deserialize, Serialize};

use super::cursor::Cursor;
use super::order::{Order, OrderKind};
use crate::coordinate::Coordinate;
use crate::domain::Domain;

/// A domain paired with the order in which it is walked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversableRange<O: Order = OrderKind> {
    domain: Domain,
    order: O,
}

impl<O: Order + Clone> TraversableRange<O> {
    pub fn new(domain: Domain, order: O) -> Self {
        TraversableRange { domain, order }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    pub fn begin(&self) -> Cursor<'_, O> {
        Cursor::begin(&self.domain, self.order.clone())
    }

    pub fn end(&self) -> Cursor<'_, O> {
        Cursor::end(&self.domain, self.order.clone())
    }

    /// Owned coordinates, one allocation per step.
    pub fn iter(&self) -> Traversal<'_, O> {
        Traversal {
            cursor: self.begin(),
            remaining: self.domain.len(),
        }
    }

    /// Borrowed coordinates, no allocation per step.
    pub fn lend(&self) -> LendingTraversal<'_, O> {
        LendingTraversal {
            cursor: self.begin(),
            fresh: true,
        }
    }

    pub fn into_domain(self) -> Domain {
        self.domain
    }
}

impl TraversableRange<OrderKind> {
    pub fn linear(domain: Domain) -> Self {
        TraversableRange::new(domain, OrderKind::Linear)
    }
}

impl From<Domain> for TraversableRange<OrderKind> {
    fn from(domain: Domain) -> Self {
        TraversableRange::linear(domain)
    }
}

impl<'a, O: Order + Clone> IntoIterator for &'a TraversableRange<O> {
    type Item = Coordinate;
    type IntoIter = Traversal<'a, O>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the coordinates between a begin cursor and the sentinel.
///
/// The size hint is exact unless the domain holds more than `usize::MAX`
/// coordinates.
#[derive(Debug, Clone)]
pub struct Traversal<'a, O: Order = OrderKind> {
    cursor: Cursor<'a, O>,
    remaining: Option<usize>,
}

impl<O: Order> Iterator for Traversal<'_, O> {
    type Item = Coordinate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_exhausted() {
            return None;
        }
        let current = self.cursor.read().clone();
        self.cursor.step();
        self.remaining = self.remaining.map(|n| n.saturating_sub(1));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl<O: Order> FusedIterator for Traversal<'_, O> {}

/// Lends the cursor's own coordinate at every step.
#[derive(Debug, Clone)]
pub struct LendingTraversal<'a, O: Order = OrderKind> {
    cursor: Cursor<'a, O>,
    fresh: bool,
}

impl<O: Order> LendingIterator for LendingTraversal<'_, O> {
    type Item<'r>
        = &'r Coordinate
    where
        Self: 'r;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        if self.fresh {
            self.fresh = false;
        } else {
            self.cursor.advance().ok()?;
        }
        if self.cursor.is_exhausted() {
            None
        } else {
            Some(self.cursor.read())
        }
    }
}

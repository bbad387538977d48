//! Mutable traversal state over a [`Domain`]

use thiserror::Error;

use super::order::{Order, OrderKind};
use crate::coordinate::Coordinate;
use crate::domain::Domain;
use crate::error::ErrorKind;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorError {
    #[error("cannot advance a cursor past the end of its domain")]
    Exhausted,
}

impl CursorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Exhausted => ErrorKind::InvariantViolation,
        }
    }
}

/// A position in a domain, together with the rule used to move it.
///
/// Two cursors compare equal when they sit on the same coordinate of equal
/// domains; the bound order does not take part in the comparison. Traversal
/// runs from [`TraversableRange::begin`](super::TraversableRange::begin) until
/// the cursor equals [`TraversableRange::end`](super::TraversableRange::end).
#[derive(Debug, Clone)]
pub struct Cursor<'a, O: Order = OrderKind> {
    coordinate: Coordinate,
    domain: &'a Domain,
    order: O,
}

impl<'a, O: Order> Cursor<'a, O> {
    /// A cursor on the first coordinate of `domain`.
    ///
    /// An empty domain has no first coordinate, the cursor is created on the
    /// sentinel instead so that it already equals the end cursor.
    pub fn begin(domain: &'a Domain, order: O) -> Self {
        let corner = if domain.is_empty() {
            domain.limit()
        } else {
            domain.start()
        };
        Cursor {
            coordinate: Coordinate::from_slice(corner),
            domain,
            order,
        }
    }

    /// The exhausted cursor, sitting on `domain.limit()`.
    pub fn end(domain: &'a Domain, order: O) -> Self {
        Cursor {
            coordinate: Coordinate::from_slice(domain.limit()),
            domain,
            order,
        }
    }

    pub fn read(&self) -> &Coordinate {
        &self.coordinate
    }

    pub fn domain(&self) -> &'a Domain {
        self.domain
    }

    pub fn order(&self) -> &O {
        &self.order
    }

    pub fn is_exhausted(&self) -> bool {
        *self.coordinate == *self.domain.limit()
    }

    /// Moves to the next coordinate, or onto the sentinel after the last one.
    pub fn advance(&mut self) -> Result<(), CursorError> {
        if self.is_exhausted() {
            return Err(CursorError::Exhausted);
        }
        self.step();
        Ok(())
    }

    /// Puts the cursor back on the first coordinate.
    pub fn reset(&mut self) {
        if self.domain.is_empty() {
            self.coordinate.set(self.domain.limit());
        } else {
            self.coordinate.set(self.domain.start());
        }
    }

    pub(crate) fn step(&mut self) {
        self.order
            .advance(self.coordinate.as_mut_slice(), self.domain);
    }
}

impl<O: Order, P: Order> PartialEq<Cursor<'_, P>> for Cursor<'_, O> {
    fn eq(&self, other: &Cursor<'_, P>) -> bool {
        self.coordinate == other.coordinate && self.domain == other.domain
    }
}

impl<O: Order> Eq for Cursor<'_, O> {}

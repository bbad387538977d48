//! Rectangular index domains.
//!
//! A [`Domain`] is a half-open interval `[start, limit)` on each of its axes.
//! Axis `0` is the first pair of bounds handed to the constructor.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ErrorKind;

/// A single coordinate component along one axis.
pub type AxisIndex = isize;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("wrong number of arguments {found}, expected {expected}")]
    WrongNumberOfArguments { found: usize, expected: usize },
    #[error("odd number of arguments {0}, bounds come in (start, end) pairs")]
    OddNumberOfArguments(usize),
    #[error("a domain needs at least one axis")]
    ZeroDimensional,
    #[error("start has {start} axes but limit has {limit}")]
    MismatchedBounds { start: usize, limit: usize },
    #[error("inverted range on axis {axis}: start {start} > limit {limit}")]
    InvertedRange {
        axis: usize,
        start: AxisIndex,
        limit: AxisIndex,
    },
    #[error("axis {axis} out of range for a {dimension} dimensional domain")]
    AxisOutOfRange { axis: usize, dimension: usize },
    #[error("coordinate has {found} components, expected {expected}")]
    ArrayLength { found: usize, expected: usize },
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::WrongNumberOfArguments { .. }
            | Self::OddNumberOfArguments(_)
            | Self::ZeroDimensional
            | Self::MismatchedBounds { .. } => ErrorKind::Configuration,
            Self::InvertedRange { .. } => ErrorKind::InvariantViolation,
            Self::AxisOutOfRange { .. } | Self::ArrayLength { .. } => ErrorKind::IndexRange,
        }
    }
}

/// Unvalidated bounds, the serialized shape of a [`Domain`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DomainBounds {
    start: Vec<AxisIndex>,
    limit: Vec<AxisIndex>,
}

impl TryFrom<DomainBounds> for Domain {
    type Error = DomainError;

    fn try_from(value: DomainBounds) -> Result<Self, Self::Error> {
        Domain::from_bounds(value.start, value.limit)
    }
}

/// A rectangular index range in `D >= 1` dimensions.
///
/// Two domains are equal iff their `start` and `limit` agree on every axis.
/// Once built a domain never changes; restricting it (see
/// [`crate::partition`]) always produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DomainBounds")]
pub struct Domain {
    start: Vec<AxisIndex>,
    limit: Vec<AxisIndex>,
}

impl Domain {
    /// Builds a domain from a flat list of `(start, end)` pairs, one pair per
    /// axis in axis order. The dimension is `bounds.len() / 2`.
    ///
    /// ```
    /// # use spazio::domain::Domain;
    /// let d = Domain::new(&[1, 9, 1, 9]).unwrap();
    /// assert_eq!(d.dimension(), 2);
    /// assert_eq!(d.len(), Some(64));
    /// ```
    pub fn new(bounds: &[AxisIndex]) -> Result<Self, DomainError> {
        if bounds.len() % 2 != 0 {
            return Err(DomainError::OddNumberOfArguments(bounds.len()));
        }
        let (start, limit): (Vec<_>, Vec<_>) =
            bounds.chunks_exact(2).map(|pair| (pair[0], pair[1])).unzip();
        Self::from_bounds(start, limit)
    }

    /// Like [`Domain::new`], but for a dimension fixed by the caller: exactly
    /// `2 * D` values are accepted.
    pub fn with_dimension<const D: usize>(bounds: &[AxisIndex]) -> Result<Self, DomainError> {
        if D == 0 {
            return Err(DomainError::ZeroDimensional);
        }
        if bounds.len() != 2 * D {
            return Err(DomainError::WrongNumberOfArguments {
                found: bounds.len(),
                expected: 2 * D,
            });
        }
        Self::new(bounds)
    }

    pub fn from_pairs<const D: usize>(
        pairs: [(AxisIndex, AxisIndex); D],
    ) -> Result<Self, DomainError> {
        let (start, limit): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        Self::from_bounds(start, limit)
    }

    /// Builds a domain from its inclusive lower and exclusive upper corners.
    pub fn from_bounds(start: Vec<AxisIndex>, limit: Vec<AxisIndex>) -> Result<Self, DomainError> {
        if start.len() != limit.len() {
            return Err(DomainError::MismatchedBounds {
                start: start.len(),
                limit: limit.len(),
            });
        }
        if start.is_empty() {
            return Err(DomainError::ZeroDimensional);
        }
        if let Some(axis) = start.iter().zip(&limit).position(|(s, l)| s > l) {
            return Err(DomainError::InvertedRange {
                axis,
                start: start[axis],
                limit: limit[axis],
            });
        }
        Ok(Domain { start, limit })
    }

    pub fn dimension(&self) -> usize {
        self.start.len()
    }

    pub fn start(&self) -> &[AxisIndex] {
        &self.start
    }

    pub fn limit(&self) -> &[AxisIndex] {
        &self.limit
    }

    pub fn check_axis(&self, axis: usize) -> Result<(), DomainError> {
        if axis < self.dimension() {
            Ok(())
        } else {
            Err(DomainError::AxisOutOfRange {
                axis,
                dimension: self.dimension(),
            })
        }
    }

    /// Number of indices along `axis`.
    pub fn extent(&self, axis: usize) -> Result<usize, DomainError> {
        self.check_axis(axis)?;
        Ok(self.limit[axis].abs_diff(self.start[axis]))
    }

    pub fn extents(&self) -> Vec<usize> {
        self.start
            .iter()
            .zip(&self.limit)
            .map(|(s, l)| l.abs_diff(*s))
            .collect()
    }

    /// Number of coordinate tuples in the domain, `None` if it does not fit
    /// in a `usize`.
    pub fn len(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        self.extents()
            .into_iter()
            .try_fold(1usize, |count, extent| count.checked_mul(extent))
    }

    /// True if any axis is empty, in which case no coordinate is visited.
    pub fn is_empty(&self) -> bool {
        self.start.iter().zip(&self.limit).any(|(s, l)| s == l)
    }

    pub fn contains(&self, coordinate: &[AxisIndex]) -> bool {
        coordinate.len() == self.dimension()
            && coordinate
                .iter()
                .zip(self.start.iter().zip(&self.limit))
                .all(|(c, (s, l))| s <= c && c < l)
    }

    /// Returns a copy of `self` with the bounds along `axis` replaced.
    ///
    /// Callers guarantee `axis < self.dimension()` and `start <= limit`.
    pub(crate) fn restrict(&self, axis: usize, start: AxisIndex, limit: AxisIndex) -> Self {
        debug_assert!(start <= limit);
        let mut restricted = self.clone();
        restricted.start[axis] = start;
        restricted.limit[axis] = limit;
        restricted
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (axis, (s, l)) in self.start.iter().zip(&self.limit).enumerate() {
            if axis > 0 {
                write!(f, " x ")?;
            }
            write!(f, "[{s}, {l})")?;
        }
        Ok(())
    }
}

impl<const D: usize> TryFrom<[(AxisIndex, AxisIndex); D]> for Domain {
    type Error = DomainError;

    fn try_from(pairs: [(AxisIndex, AxisIndex); D]) -> Result<Self, Self::Error> {
        Domain::from_pairs(pairs)
    }
}

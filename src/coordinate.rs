use std::fmt;
use std::ops::Deref;

use derive_more::{From, Index, Into, IntoIterator};
use serde::{Deserialize, Serialize};

use crate::domain::{AxisIndex, DomainError};

/// A position in a [`Domain`](crate::domain::Domain), one component per axis.
#[derive(
    Debug,
    Clone,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
    Index,
    Serialize,
    Deserialize,
    From,
    Into,
    IntoIterator,
)]
pub struct Coordinate {
    components: Vec<AxisIndex>,
}

impl Coordinate {
    pub(crate) fn from_slice(components: &[AxisIndex]) -> Self {
        Coordinate {
            components: components.to_vec(),
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [AxisIndex] {
        &mut self.components
    }

    pub(crate) fn set(&mut self, components: &[AxisIndex]) {
        self.components.copy_from_slice(components);
    }

    /// Copies the components into a fixed size array, so kernels can
    /// destructure them: `let [i, j] = c.to_array()?;`
    pub fn to_array<const D: usize>(&self) -> Result<[AxisIndex; D], DomainError> {
        <[AxisIndex; D]>::try_from(self.components.as_slice()).map_err(|_| {
            DomainError::ArrayLength {
                found: self.components.len(),
                expected: D,
            }
        })
    }
}

impl Deref for Coordinate {
    type Target = [AxisIndex];

    fn deref(&self) -> &Self::Target {
        &self.components
    }
}

impl AsRef<[AxisIndex]> for Coordinate {
    fn as_ref(&self) -> &[AxisIndex] {
        &self.components
    }
}

impl FromIterator<AxisIndex> for Coordinate {
    fn from_iter<T: IntoIterator<Item = AxisIndex>>(iter: T) -> Self {
        Coordinate {
            components: iter.into_iter().collect(),
        }
    }
}

impl<const D: usize> TryFrom<&Coordinate> for [AxisIndex; D] {
    type Error = DomainError;

    fn try_from(value: &Coordinate) -> Result<Self, Self::Error> {
        value.to_array()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (axis, c) in self.components.iter().enumerate() {
            if axis > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn destructure_into_array() {
        let c: Coordinate = vec![4, -2].into();
        let [i, j] = c.to_array().unwrap();
        assert_eq!((i, j), (4, -2));
        assert_eq!(c[1], -2);
        assert_eq!(c.to_string(), "(4, -2)");

        let err = <[AxisIndex; 3]>::try_from(&c).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IndexRange);
    }
}

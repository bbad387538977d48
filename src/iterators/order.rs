//! Coordinate advancement rules
//!
//! An [`Order`] decides which coordinate follows another inside a [`Domain`],
//! and maps the last coordinate onto the exhaustion sentinel, `domain.limit()`.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::domain::{AxisIndex, Domain};

/// Trait for coordinate advancement strategies
///
/// Implementors must be pure: the successor depends only on the coordinate and
/// the domain. Advancing the last coordinate must produce exactly
/// `domain.limit()`, and advancing must never be requested on that sentinel.
pub trait Order {
    /// Moves `coordinate` to its successor in place.
    ///
    /// # Arguments
    ///
    /// * `coordinate` - A live coordinate of `domain`
    /// * `domain` - The domain providing the bounds
    ///
    /// # Panics
    ///
    /// May panic if `coordinate.len() != domain.dimension()`. Cursors always
    /// hold coordinates of their own domain.
    fn advance(&self, coordinate: &mut [AxisIndex], domain: &Domain);
}

/// Axis `0` varies fastest, overflow carries into the next axis.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinearOrder;

impl Order for LinearOrder {
    fn advance(&self, coordinate: &mut [AxisIndex], domain: &Domain) {
        debug_assert_eq!(coordinate.len(), domain.dimension());
        let limit = domain.limit();

        for ((c, &s), &l) in coordinate.iter_mut().zip(domain.start()).zip(limit) {
            *c += 1;
            if *c < l {
                return;
            }
            *c = s;
        }
        // carried out of the last axis
        coordinate.copy_from_slice(limit);
    }
}

/// The orderings known to the crate, dispatched without indirection.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum OrderKind {
    #[default]
    #[display(fmt = "linear")]
    Linear,
}

impl Order for OrderKind {
    #[inline]
    fn advance(&self, coordinate: &mut [AxisIndex], domain: &Domain) {
        match self {
            OrderKind::Linear => LinearOrder.advance(coordinate, domain),
        }
    }
}

impl From<LinearOrder> for OrderKind {
    fn from(_: LinearOrder) -> Self {
        OrderKind::Linear
    }
}

impl<O: Order + ?Sized> Order for &O {
    fn advance(&self, coordinate: &mut [AxisIndex], domain: &Domain) {
        (**self).advance(coordinate, domain)
    }
}

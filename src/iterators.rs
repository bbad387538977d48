//! Iterators over domains
//!
//! This module provides the traversal machinery, organized as:
//!
//! - `order`: Advancement rules mapping a coordinate to its successor
//! - `cursor`: Mutable position plus bound order, with begin/end sentinels
//! - `traversal`: Ranges producing cursors, and the iterators built on them
//!
//! A traversal starts at `domain.start()` and stops when the cursor equals the
//! end cursor, whose coordinate is `domain.limit()`. Empty domains produce a
//! begin cursor that already equals the end cursor.

mod cursor;
mod order;
mod traversal;

#[cfg(test)]
mod tests;

pub use cursor::{Cursor, CursorError};
pub use order::{LinearOrder, Order, OrderKind};
pub use traversal::{LendingTraversal, TraversableRange, Traversal};

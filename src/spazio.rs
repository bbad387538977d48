/*!

Rectangular N-dimensional index domains, their traversal, and their static partitioning among parallel workers.

A [`Domain`] describes a half-open range `[start, limit)` on each of its axes.
Wrapping it in a [`TraversableRange`] together with an [`Order`] gives begin and end [`Cursor`]s:
advancing the begin cursor until it equals the end cursor visits every coordinate exactly once.
With the default [`LinearOrder`] axis `0` varies fastest.

Numerical kernels that run on a fixed set of workers restrict the domain to their own slice with a [`Partitioner`],
fed with the worker identity of the surrounding parallel region ([`ParallelContext`]).
[`partition::broadcast`] opens such a region on a rayon thread pool.

```
use spazio::{domain::Domain, iterators::TraversableRange, partition::partition};

let domain = Domain::new(&[1, 9, 1, 9]).unwrap();
let slice = partition(&domain, 0, 1, 4).unwrap();
let mut count = 0;
for c in &TraversableRange::linear(slice) {
    let [i, _j] = c.to_array().unwrap();
    assert!((3..5).contains(&i));
    count += 1;
}
assert_eq!(count, 16);
```

[`Domain`]: domain::Domain
[`TraversableRange`]: iterators::TraversableRange
[`Order`]: iterators::Order
[`Cursor`]: iterators::Cursor
[`LinearOrder`]: iterators::LinearOrder
[`Partitioner`]: partition::Partitioner
[`ParallelContext`]: partition::ParallelContext
*/

pub mod coordinate;
pub mod domain;
pub mod error;
pub mod iterators;
pub mod partition;

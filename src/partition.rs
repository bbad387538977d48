//! Static partitioning of a domain among a fixed set of workers
//!
//! Every worker restricts the domain to its own contiguous slice along one
//! axis. Slices are computed locally from the worker's [`ParallelContext`],
//! without communication: worker `id` out of `workers` receives
//! `[start + chunk * id, start + chunk * (id + 1))` with
//! `chunk = (limit - start) / workers`, and the last worker additionally
//! absorbs the remainder, keeping the domain's limit.
//!
//! Slices of distinct workers are disjoint along the partitioned axis, so the
//! traversal machinery needs no synchronisation. A kernel that reads
//! neighbouring coordinates outside of its own slice (stencil halos) while
//! other workers write them must arrange for that itself.

use log::{debug, trace};
use rayon::{BroadcastContext, ThreadPool};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Domain;
use crate::error::ErrorKind;
use crate::iterators::{Order, TraversableRange};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    #[error("axis {axis} out of range for a {dimension} dimensional domain")]
    AxisOutOfRange { axis: usize, dimension: usize },
    #[error("worker {id} out of range for {workers} workers")]
    WorkerOutOfRange { id: usize, workers: usize },
    #[error("cannot partition among zero workers")]
    NoWorkers,
}

impl PartitionError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::IndexRange
    }
}

/// Identity of one worker within a parallel region.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawContext")]
pub struct ParallelContext {
    id: usize,
    workers: usize,
}

#[derive(Deserialize)]
struct RawContext {
    id: usize,
    workers: usize,
}

impl TryFrom<RawContext> for ParallelContext {
    type Error = PartitionError;

    fn try_from(value: RawContext) -> Result<Self, Self::Error> {
        ParallelContext::new(value.id, value.workers)
    }
}

impl ParallelContext {
    pub fn new(id: usize, workers: usize) -> Result<Self, PartitionError> {
        if workers == 0 {
            return Err(PartitionError::NoWorkers);
        }
        if id >= workers {
            return Err(PartitionError::WorkerOutOfRange { id, workers });
        }
        Ok(ParallelContext { id, workers })
    }

    /// The context of a sequential program: one worker owning everything.
    pub fn single() -> Self {
        ParallelContext { id: 0, workers: 1 }
    }

    /// Reads the worker identity of the current thread of a rayon broadcast.
    pub fn from_broadcast(context: &BroadcastContext<'_>) -> Self {
        ParallelContext {
            id: context.index(),
            workers: context.num_threads(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn is_last(&self) -> bool {
        self.id + 1 == self.workers
    }

    /// All contexts of a region with `workers` members, in ascending id order.
    pub fn all(workers: usize) -> Result<impl Iterator<Item = Self>, PartitionError> {
        if workers == 0 {
            return Err(PartitionError::NoWorkers);
        }
        Ok((0..workers).map(move |id| ParallelContext { id, workers }))
    }
}

impl Default for ParallelContext {
    fn default() -> Self {
        Self::single()
    }
}

/// Restricts domains to the slice owned by one worker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partitioner {
    axis: usize,
    context: ParallelContext,
}

impl Partitioner {
    pub fn new(axis: usize, context: ParallelContext) -> Self {
        Partitioner { axis, context }
    }

    pub fn axis(&self) -> usize {
        self.axis
    }

    pub fn context(&self) -> ParallelContext {
        self.context
    }

    /// The part of `domain` this worker is responsible for.
    ///
    /// Fails if the axis is not an axis of `domain`.
    pub fn partition(&self, domain: &Domain) -> Result<Domain, PartitionError> {
        check_axis(domain, self.axis)?;
        let ParallelContext { id, workers } = self.context;

        let start = domain.start()[self.axis];
        let limit = domain.limit()[self.axis];
        let chunk = limit.abs_diff(start) / workers;

        // offsets never exceed `limit - start`, so the additions are exact
        let slice_start = start.wrapping_add_unsigned(chunk * id);
        let slice_limit = if self.context.is_last() {
            limit
        } else {
            start.wrapping_add_unsigned(chunk * (id + 1))
        };
        trace!(
            "worker {id}/{workers} owns [{slice_start}, {slice_limit}) of axis {}",
            self.axis
        );
        Ok(domain.restrict(self.axis, slice_start, slice_limit))
    }

    /// Every worker's slice of `domain`, in ascending id order.
    pub fn partitions(
        domain: &Domain,
        axis: usize,
        workers: usize,
    ) -> Result<Vec<Domain>, PartitionError> {
        ParallelContext::all(workers)?
            .map(|context| Partitioner::new(axis, context).partition(domain))
            .collect()
    }
}

/// Slice of `domain` along `axis` owned by worker `id` out of `workers`.
///
/// ```
/// # use spazio::{domain::Domain, partition::partition};
/// let domain = Domain::new(&[1, 9, 1, 9]).unwrap();
/// let last = partition(&domain, 0, 2, 3).unwrap();
/// assert_eq!(last, Domain::new(&[5, 9, 1, 9]).unwrap());
/// ```
pub fn partition(
    domain: &Domain,
    axis: usize,
    id: usize,
    workers: usize,
) -> Result<Domain, PartitionError> {
    Partitioner::new(axis, ParallelContext::new(id, workers)?).partition(domain)
}

/// Runs `op` once on every thread of the global rayon pool, each with its own
/// slice of `domain` along `axis`, and collects the results in worker order.
///
/// This is the fork-join region: the call returns once every worker is done.
pub fn broadcast<R, F, O>(
    domain: &Domain,
    axis: usize,
    order: O,
    op: F,
) -> Result<Vec<R>, PartitionError>
where
    F: Fn(ParallelContext, TraversableRange<O>) -> R + Sync,
    R: Send,
    O: Order + Clone + Sync,
{
    check_axis(domain, axis)?;
    debug!(
        "broadcasting {domain} along axis {axis} to {} workers",
        rayon::current_num_threads()
    );
    rayon::broadcast(|context| run_worker(domain, axis, order.clone(), &context, &op))
        .into_iter()
        .collect()
}

/// Like [`broadcast`], on the threads of `pool`.
pub fn broadcast_in<R, F, O>(
    pool: &ThreadPool,
    domain: &Domain,
    axis: usize,
    order: O,
    op: F,
) -> Result<Vec<R>, PartitionError>
where
    F: Fn(ParallelContext, TraversableRange<O>) -> R + Sync,
    R: Send,
    O: Order + Clone + Sync,
{
    check_axis(domain, axis)?;
    debug!(
        "broadcasting {domain} along axis {axis} to {} workers",
        pool.current_num_threads()
    );
    pool.broadcast(|context| run_worker(domain, axis, order.clone(), &context, &op))
        .into_iter()
        .collect()
}

fn check_axis(domain: &Domain, axis: usize) -> Result<(), PartitionError> {
    domain
        .check_axis(axis)
        .map_err(|_| PartitionError::AxisOutOfRange {
            axis,
            dimension: domain.dimension(),
        })
}

fn run_worker<R, F, O>(
    domain: &Domain,
    axis: usize,
    order: O,
    context: &BroadcastContext<'_>,
    op: &F,
) -> Result<R, PartitionError>
where
    F: Fn(ParallelContext, TraversableRange<O>) -> R,
    O: Order + Clone,
{
    let context = ParallelContext::from_broadcast(context);
    let slice = Partitioner::new(axis, context).partition(domain)?;
    Ok(op(context, TraversableRange::new(slice, order)))
}

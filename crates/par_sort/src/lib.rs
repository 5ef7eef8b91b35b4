mod executor;
mod merge;

pub mod generator;

use std::io;

use thiserror::Error;

pub use executor::{ForkJoin, ScopedThreads, Sequential, WorkerPool};
pub use merge::merge;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("failed to spawn sort worker thread: {0}")]
    Spawn(#[source] io::Error),
    #[error("failed to build worker pool: {0}")]
    Pool(#[source] rayon::ThreadPoolBuildError),
}

/// Sorts `data` into a new vector, forking sub-sorts onto fresh threads
/// while `budget` allows. See [`sort_with`] for the contract.
pub fn sort<T>(data: &[T], budget: usize) -> Result<Vec<T>, SortError>
where
    T: Ord + Clone + Send + Sync,
{
    sort_with(data, budget, &ScopedThreads)
}

/// Recursive merge sort with a concurrency budget.
///
/// - Returns a new vector holding the same multiset of elements as `data`,
///   in non-decreasing order. The input is never mutated.
/// - `budget` caps the concurrent fan-out: while `budget > 1` the two halves
///   are forked onto `exec` with `budget / 2` each, and this call suspends
///   until both finish before merging. At `budget <= 1` recursion stays on
///   the calling context, so 0 and 1 both mean fully sequential.
/// - The result is identical for every budget; the budget only changes the
///   execution path.
/// - If `exec` cannot launch a task the error propagates and no partial
///   result is returned.
pub fn sort_with<T, E>(data: &[T], budget: usize, exec: &E) -> Result<Vec<T>, SortError>
where
    T: Ord + Clone + Send + Sync,
    E: ForkJoin + Sync,
{
    if data.len() <= 1 {
        return Ok(data.to_vec());
    }

    let mid = data.len() / 2;
    let (left, right) = data.split_at(mid);

    let (left, right) = if budget > 1 {
        let (left, right) = exec.fork_join(
            || sort_with(left, budget / 2, exec),
            || sort_with(right, budget / 2, exec),
        )?;
        (left?, right?)
    } else {
        (sort_with(left, 1, exec)?, sort_with(right, 1, exec)?)
    };

    Ok(merge(&left, &right))
}

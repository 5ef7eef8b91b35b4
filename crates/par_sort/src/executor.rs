use std::panic;
use std::thread;

use crate::SortError;

/// Fork/join primitive the dispatcher schedules sub-sorts on.
///
/// - Both closures run to completion before `fork_join` returns; the caller
///   observes a happens-before edge from each closure's completion to the
///   returned pair.
/// - A panic in either closure is re-raised on the caller, but only after
///   both closures have been awaited.
/// - `Err` means the executor could not launch a task. Implementations must
///   not silently run the work elsewhere instead.
pub trait ForkJoin {
    fn fork_join<RA, RB, A, B>(&self, a: A, b: B) -> Result<(RA, RB), SortError>
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send;
}

/// Runs both closures on the calling context, in order. Never fails.
pub struct Sequential;

impl ForkJoin for Sequential {
    fn fork_join<RA, RB, A, B>(&self, a: A, b: B) -> Result<(RA, RB), SortError>
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        Ok((a(), b()))
    }
}

/// Eager launch: one fresh OS thread per forked closure.
///
/// Spawn failure surfaces as [`SortError::Spawn`]; there is no fallback to
/// running the closure inline.
pub struct ScopedThreads;

impl ForkJoin for ScopedThreads {
    fn fork_join<RA, RB, A, B>(&self, a: A, b: B) -> Result<(RA, RB), SortError>
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        thread::scope(|scope| {
            let left = thread::Builder::new()
                .spawn_scoped(scope, a)
                .map_err(SortError::Spawn)?;
            let right = match thread::Builder::new().spawn_scoped(scope, b) {
                Ok(handle) => handle,
                // Scope exit joins the already-running left task before the
                // error reaches the caller.
                Err(e) => return Err(SortError::Spawn(e)),
            };
            join_both(left.join(), right.join())
        })
    }
}

/// Pooled launch backed by a rayon thread pool.
///
/// Workers are created up front in [`WorkerPool::new`], so `fork_join` itself
/// has no per-call resource-exhaustion path; an oversized fan-out simply
/// queues on the pool.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    pub fn new(threads: usize) -> Result<Self, SortError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(SortError::Pool)?;
        Ok(Self { pool })
    }
}

impl ForkJoin for WorkerPool {
    fn fork_join<RA, RB, A, B>(&self, a: A, b: B) -> Result<(RA, RB), SortError>
    where
        A: FnOnce() -> RA + Send,
        B: FnOnce() -> RB + Send,
        RA: Send,
        RB: Send,
    {
        Ok(self.pool.join(a, b))
    }
}

fn join_both<RA, RB>(a: thread::Result<RA>, b: thread::Result<RB>) -> Result<(RA, RB), SortError> {
    match (a, b) {
        (Ok(a), Ok(b)) => Ok((a, b)),
        (Err(payload), _) | (_, Err(payload)) => panic::resume_unwind(payload),
    }
}

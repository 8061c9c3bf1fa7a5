//! # Parallel Mapping
//!
//! Batch fan-out for index builds. Worker threads share the read-only
//! analyzer; everything that crosses back out of a worker is plain data, so
//! results can be collected in any order. When the pool cannot be brought
//! up, the batch degrades to a single thread with identical results.

use crate::errors::{SLResult, StenolexError};

/// Maps a function over argument tuples, in parallel when available.
#[derive(Debug, Clone, Copy)]
pub struct ParallelMapper {
    processes: usize,
    retry_on_failure: bool,
}

impl ParallelMapper {
    /// `processes == 0` selects one worker per logical CPU.
    ///
    /// With `retry_on_failure`, a pool that cannot be brought up is logged
    /// to the error stream and the batch is redone serially instead of
    /// failing.
    pub fn new(processes: usize, retry_on_failure: bool) -> Self {
        let processes = if processes == 0 {
            std::thread::available_parallelism()
                .map(std::num::NonZeroUsize::get)
                .unwrap_or(1)
        } else {
            processes
        };
        Self {
            processes,
            retry_on_failure,
        }
    }

    /// The configured worker count.
    pub fn processes(&self) -> usize {
        self.processes
    }

    /// Apply `func` to every item and collect the results.
    ///
    /// Serial runs keep input order; parallel runs happen to as well, but
    /// callers must not rely on it. Correlation data belongs inside each
    /// item.
    #[cfg(feature = "rayon")]
    pub fn starmap<T, R, F>(&self, func: F, items: Vec<T>) -> SLResult<Vec<R>>
    where
        T: Send + Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync,
    {
        use rayon::prelude::*;

        if self.processes > 1 {
            match rayon::ThreadPoolBuilder::new()
                .num_threads(self.processes)
                .build()
            {
                Ok(pool) => {
                    return Ok(pool.install(|| items.par_iter().map(&func).collect()));
                }
                Err(err) => {
                    if !self.retry_on_failure {
                        return Err(StenolexError::WorkerPool(err.to_string()));
                    }
                    log::warn!("Parallel operation failed ({err}). Trying with a single process...");
                }
            }
        }
        Ok(items.iter().map(func).collect())
    }

    /// Apply `func` to every item and collect the results, serially.
    #[cfg(not(feature = "rayon"))]
    pub fn starmap<T, R, F>(&self, func: F, items: Vec<T>) -> SLResult<Vec<R>>
    where
        T: Send + Sync,
        R: Send,
        F: Fn(&T) -> R + Send + Sync,
    {
        if self.processes > 1 && !self.retry_on_failure {
            return Err(StenolexError::WorkerPool(
                "parallel support is not compiled in".to_string(),
            ));
        }
        Ok(items.iter().map(func).collect())
    }
}

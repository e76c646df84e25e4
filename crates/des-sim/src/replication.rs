//! Independent replications of a model.

use crate::SimResult;

/// Run one independent simulation per seed and collect the results in seed
/// order.
///
/// `run_one` must build and run its own engine; runs share no state.  With
/// the `parallel` feature the runs execute on Rayon's thread pool, otherwise
/// sequentially.  Output is identical either way.
pub fn run_replications<R, F>(seeds: &[u64], run_one: F) -> SimResult<Vec<R>>
where
    R: Send,
    F: Fn(u64) -> SimResult<R> + Send + Sync,
{
    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_one(seed)).collect()
    }
}

//! Fold/reduce helper with size-based dispatch.
//!
//! Both aggregators are commutative reductions over independent samples, so
//! each rayon worker folds into its own accumulator and the partial results
//! are merged once at the end. No accumulator is ever shared between threads.

use rayon::prelude::*;

/// Inputs smaller than this are folded on the calling thread.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Fold `data` into per-worker accumulators and merge them.
///
/// Below [`PARALLEL_THRESHOLD`] elements the fold runs sequentially; the
/// result is the same either way as long as `reduce_fn` is associative and
/// commutative with respect to `fold_fn`.
///
/// ```ignore
/// let total = parallel_fold_reduce(&samples, || 0u64, |acc, s| acc + s.r as u64, |a, b| a + b);
/// ```
pub fn parallel_fold_reduce<T, A, I, F, R>(data: &[T], init: I, fold_fn: F, reduce_fn: R) -> A
where
    T: Sync,
    A: Send,
    I: Fn() -> A + Sync + Send,
    F: Fn(A, &T) -> A + Sync + Send,
    R: Fn(A, A) -> A + Sync + Send,
{
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_iter()
            .fold(&init, &fold_fn)
            .reduce(&init, &reduce_fn)
    } else {
        data.iter().fold(init(), fold_fn)
    }
}

/// Like [`parallel_fold_reduce`] for folds that can fail.
///
/// The first error encountered stops the fold and is returned.
pub fn try_parallel_fold_reduce<T, A, E, I, F, R>(
    data: &[T],
    init: I,
    fold_fn: F,
    reduce_fn: R,
) -> Result<A, E>
where
    T: Sync,
    A: Send,
    E: Send,
    I: Fn() -> A + Sync + Send,
    F: Fn(A, &T) -> Result<A, E> + Sync + Send,
    R: Fn(A, A) -> A + Sync + Send,
{
    if data.len() >= PARALLEL_THRESHOLD {
        data.par_iter()
            .try_fold(&init, &fold_fn)
            .try_reduce(&init, |a, b| Ok(reduce_fn(a, b)))
    } else {
        data.iter().try_fold(init(), fold_fn)
    }
}

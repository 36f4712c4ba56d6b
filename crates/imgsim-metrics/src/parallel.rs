use rayon::prelude::*;
use thiserror::Error;

use imgsim_image::RgbaView;

use crate::accumulate::{check_same_size, fold_serial, SquaredErrorSum};
use crate::config::Channels;
use crate::error::MetricsError;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how the pixel rows are traversed when accumulating errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, or when the overhead of parallelization
    /// outweighs the benefits.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process rows in parallel.
    ParallelRows,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    /// Use this primarily for benchmarking or specific isolation needs.
    Fixed(usize),
}

fn par_fold_rows(a: &[u8], b: &[u8], row_stride: usize, channels: Channels) -> SquaredErrorSum {
    a.par_chunks_exact(row_stride)
        .zip(b.par_chunks_exact(row_stride))
        .map(|(row_a, row_b)| {
            let mut acc = SquaredErrorSum::default();
            acc.accumulate(row_a, row_b, channels);
            acc
        })
        .reduce(SquaredErrorSum::default, SquaredErrorSum::merge)
}

/// Compute the squared error sum of two whole images with the given strategy.
///
/// Every strategy produces the exact same sum.
///
/// # Arguments
///
/// * `a` - The first input image.
/// * `b` - The second input image.
/// * `channels` - The channels taking part in the comparison.
/// * `strategy` - How the rows are traversed.
///
/// # Errors
///
/// Returns an error if the images have different sizes, or if a local
/// thread pool is requested with zero threads or fails to build.
pub fn squared_error_sum(
    a: &RgbaView,
    b: &RgbaView,
    channels: Channels,
    strategy: ExecutionStrategy,
) -> Result<SquaredErrorSum, MetricsError> {
    check_same_size(a, b)?;

    if a.size().is_empty() {
        return Ok(SquaredErrorSum::default());
    }

    let row_stride = a.row_stride();

    let acc = match strategy {
        ExecutionStrategy::Serial => fold_serial(a, b, channels)?,
        ExecutionStrategy::ParallelRows => {
            par_fold_rows(a.as_slice(), b.as_slice(), row_stride, channels)
        }
        ExecutionStrategy::Fixed(num_threads) => {
            if num_threads == 0 {
                return Err(ParallelError::InvalidThreadCount(num_threads).into());
            }
            log::debug!("building local thread pool with {num_threads} threads");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;
            pool.install(|| par_fold_rows(a.as_slice(), b.as_slice(), row_stride, channels))
        }
    };

    log::trace!(
        "squared error over {} samples ({:?}): {}",
        acc.samples,
        strategy,
        acc.sum
    );

    Ok(acc)
}

#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// partial sums of squared sample differences.
pub mod accumulate;

/// metrics configuration.
pub mod config;

/// Error types for the metrics module.
pub mod error;

/// mean squared error between images.
pub mod mse;

/// module containing parallelization utilities.
pub mod parallel;

/// peak signal-to-noise ratio between images.
pub mod psnr;

pub use accumulate::{squared_error_rows, SquaredErrorSum};
pub use config::{Channels, MetricsConfig};
pub use error::MetricsError;
pub use mse::{compute_mse, mse, mse_with_config};
pub use parallel::{squared_error_sum, ExecutionStrategy, ParallelError};
pub use psnr::{compute_psnr, psnr, psnr_from_mse, psnr_with_config, PsnrScore, MAX_SAMPLE_VALUE};

use imgsim_image::ImageError;

use crate::parallel::ParallelError;

/// An error type for the metrics module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MetricsError {
    /// The input images could not be compared.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The configured execution strategy could not run.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

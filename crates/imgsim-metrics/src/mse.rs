use imgsim_image::{ImageError, ImageSize, RgbaView};

use crate::accumulate::fold_serial;
use crate::config::{Channels, MetricsConfig};
use crate::error::MetricsError;
use crate::parallel::squared_error_sum;

/// Compute the mean squared error (MSE) between two images.
///
/// The MSE is defined as:
///
/// $ MSE = \frac{1}{n} \sum_{i=1}^{n} (I_1 - I_2)^2 $
///
/// where `I_1` and `I_2` are the two images and `n` is the number of compared
/// samples, i.e. the number of pixels times the number of selected channels.
/// An image without pixels has an MSE of `0.0`.
///
/// # Arguments
///
/// * `image1` - The first input image.
/// * `image2` - The second input image.
/// * `channels` - The channels taking part in the comparison.
///
/// # Returns
///
/// The mean squared error between the two images.
///
/// # Example
///
/// ```
/// use imgsim_image::{ImageSize, RgbaView};
/// use imgsim_metrics::{mse, Channels};
///
/// let size = ImageSize {
///   width: 2,
///   height: 1,
/// };
///
/// let image1 = RgbaView::new(size, &[0, 0, 0, 255, 0, 0, 0, 255]).unwrap();
/// let image2 = RgbaView::new(size, &[10, 0, 0, 255, 0, 0, 0, 255]).unwrap();
///
/// let mse = mse(&image1, &image2, Channels::Rgb).unwrap();
/// assert_eq!(mse, 100.0 / 6.0);
/// ```
///
/// # Errors
///
/// Returns an error if the two images have different sizes.
pub fn mse(image1: &RgbaView, image2: &RgbaView, channels: Channels) -> Result<f32, ImageError> {
    Ok(fold_serial(image1, image2, channels)?.mean())
}

/// Compute the mean squared error between two raw RGBA8 buffers.
///
/// Both buffers must hold at least `width * height * 4` bytes; the alpha
/// sample is always present and `include_alpha` selects whether it is
/// compared.
///
/// # Example
///
/// ```
/// use imgsim_metrics::compute_mse;
///
/// let a = [0u8, 0, 0, 0];
/// let b = [0u8, 0, 0, 2];
///
/// assert_eq!(compute_mse(&a, &b, [1, 1].into(), true).unwrap(), 1.0);
/// assert_eq!(compute_mse(&a, &b, [1, 1].into(), false).unwrap(), 0.0);
/// assert!(compute_mse(&a, &b[..3], [1, 1].into(), true).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if either buffer is too short for the given size.
pub fn compute_mse(
    data1: &[u8],
    data2: &[u8],
    size: ImageSize,
    include_alpha: bool,
) -> Result<f32, ImageError> {
    let image1 = RgbaView::new(size, data1)?;
    let image2 = RgbaView::new(size, data2)?;
    mse(&image1, &image2, Channels::from_alpha(include_alpha))
}

/// Compute the mean squared error with the given configuration.
///
/// # Errors
///
/// Returns an error if the two images have different sizes or the configured
/// execution strategy cannot run.
pub fn mse_with_config(
    image1: &RgbaView,
    image2: &RgbaView,
    config: &MetricsConfig,
) -> Result<f32, MetricsError> {
    let acc = squared_error_sum(image1, image2, config.channels(), config.strategy)?;
    Ok(acc.mean())
}

#[cfg(test)]
mod tests {
    use imgsim_image::{ImageError, ImageSize, RgbaView};

    use crate::config::{Channels, MetricsConfig};
    use crate::error::MetricsError;
    use crate::parallel::ExecutionStrategy;

    #[test]
    fn test_equal() -> Result<(), ImageError> {
        let data = vec![0u8, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        let image1 = RgbaView::new(
            ImageSize {
                width: 1,
                height: 3,
            },
            &data,
        )?;
        let image2 = RgbaView::new(
            ImageSize {
                width: 1,
                height: 3,
            },
            &data,
        )?;
        let mse = crate::mse(&image1, &image2, Channels::Rgba)?;
        assert_eq!(mse, 0f32);

        Ok(())
    }

    #[test]
    fn test_not_equal() -> Result<(), ImageError> {
        let image1 = RgbaView::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            &[0, 1, 2, 3, 4, 5, 6, 7],
        )?;
        let image2 = RgbaView::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            &[0, 3, 2, 3, 4, 5, 6, 9],
        )?;
        assert_eq!(crate::mse(&image1, &image2, Channels::Rgba)?, 1.0);
        assert_eq!(crate::mse(&image1, &image2, Channels::Rgb)?, 4.0 / 6.0);

        Ok(())
    }

    #[test]
    fn test_empty() -> Result<(), ImageError> {
        assert_eq!(crate::compute_mse(&[], &[], [0, 0].into(), true)?, 0.0);
        assert_eq!(crate::compute_mse(&[], &[], [5, 0].into(), false)?, 0.0);

        Ok(())
    }

    #[test]
    fn test_size_mismatch() -> Result<(), ImageError> {
        let data = vec![0u8; 8];
        let image1 = RgbaView::new([2, 1].into(), &data)?;
        let image2 = RgbaView::new([1, 1].into(), &data)?;

        assert_eq!(
            crate::mse(&image1, &image2, Channels::Rgba),
            Err(ImageError::InvalidImageSize(1, 2, 1, 1))
        );

        Ok(())
    }

    #[test]
    fn test_buffer_too_short() {
        let res = crate::compute_mse(&[0; 8], &[0; 7], [2, 1].into(), true);
        assert_eq!(res, Err(ImageError::InvalidBufferLength(7, 8)));
    }

    #[test]
    fn test_matches_serial_sum() -> Result<(), MetricsError> {
        let data_a = (0..60).map(|x| (x * 7) as u8).collect::<Vec<_>>();
        let data_b = (0..60).map(|x| (x * 13 + 2) as u8).collect::<Vec<_>>();
        let image1 = RgbaView::new([5, 3].into(), &data_a)?;
        let image2 = RgbaView::new([5, 3].into(), &data_b)?;

        for channels in [Channels::Rgb, Channels::Rgba] {
            let acc =
                crate::squared_error_sum(&image1, &image2, channels, ExecutionStrategy::Serial)?;
            assert_eq!(crate::mse(&image1, &image2, channels)?, acc.mean());
        }

        Ok(())
    }

    #[test]
    fn test_with_config() -> Result<(), MetricsError> {
        let image1 = RgbaView::new([1, 2].into(), &[0, 0, 0, 0, 0, 0, 0, 0])?;
        let image2 = RgbaView::new([1, 2].into(), &[3, 0, 0, 9, 0, 0, 0, 0])?;

        let config = MetricsConfig::default().with_strategy(ExecutionStrategy::ParallelRows);
        assert_eq!(crate::mse_with_config(&image1, &image2, &config)?, 90.0 / 8.0);

        let config = config.with_include_alpha(false);
        assert_eq!(crate::mse_with_config(&image1, &image2, &config)?, 9.0 / 6.0);

        Ok(())
    }
}

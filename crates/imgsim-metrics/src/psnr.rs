use imgsim_image::{ImageError, ImageSize, RgbaView};

use crate::config::{Channels, MetricsConfig};
use crate::error::MetricsError;
use crate::mse::{mse, mse_with_config};

/// Maximum value of an 8-bit sample.
pub const MAX_SAMPLE_VALUE: f64 = 255.0;

/// The peak signal-to-noise ratio between two images.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsnrScore {
    /// The PSNR in decibels, `f32::INFINITY` when the images are identical.
    pub psnr: f32,
    /// Whether the compared samples of both images are equal.
    pub identical: bool,
}

/// Map a mean squared error to the peak signal-to-noise ratio.
///
/// A zero MSE has no noise to measure; it maps to `f32::INFINITY` with
/// `identical` set.
///
/// # Panics
///
/// In debug builds, panics if `mse` is negative or NaN. A mean of squares is
/// never either; release builds return a NaN score for such inputs.
///
/// # Example
///
/// ```
/// use imgsim_metrics::psnr_from_mse;
///
/// let score = psnr_from_mse(0.0);
/// assert!(score.identical);
/// assert_eq!(score.psnr, f32::INFINITY);
///
/// let score = psnr_from_mse(255.0 * 255.0);
/// assert!(!score.identical);
/// assert_eq!(score.psnr, 0.0);
/// ```
pub fn psnr_from_mse(mse: f32) -> PsnrScore {
    debug_assert!(mse >= 0.0, "mean squared error must be >= 0, got {mse}");

    if mse == 0.0 {
        return PsnrScore {
            psnr: f32::INFINITY,
            identical: true,
        };
    }

    let psnr = 10.0 * (MAX_SAMPLE_VALUE * MAX_SAMPLE_VALUE / mse as f64).log10();

    PsnrScore {
        psnr: psnr as f32,
        identical: false,
    }
}

/// Compute the peak signal-to-noise ratio (PSNR) between two images.
///
/// The PSNR is defined as:
///
/// $ PSNR = 10 \log_{10} \left( \frac{MAX^2}{MSE} \right) $
///
/// where `MAX` is the maximum sample value (255) and `MSE` is the mean squared error.
///
/// # Arguments
///
/// * `image1` - The first input image.
/// * `image2` - The second input image.
/// * `channels` - The channels taking part in the comparison.
///
/// # Returns
///
/// The peak signal-to-noise ratio between the two images, and whether they
/// are identical over the compared channels.
///
/// # Example
///
/// ```
/// use imgsim_image::{ImageSize, RgbaView};
/// use imgsim_metrics::{psnr, Channels};
///
/// let size = ImageSize {
///   width: 2,
///   height: 1,
/// };
///
/// let image1 = RgbaView::new(size, &[0, 0, 0, 255, 0, 0, 0, 255]).unwrap();
/// let image2 = RgbaView::new(size, &[10, 0, 0, 255, 0, 0, 0, 255]).unwrap();
///
/// let score = psnr(&image1, &image2, Channels::Rgb).unwrap();
/// assert!(!score.identical);
/// assert!((score.psnr - 35.912).abs() < 1e-3);
/// ```
///
/// # Errors
///
/// Returns an error if the two images have different sizes.
///
/// # Note
///
/// The PSNR is expressed in decibels (dB). The higher the PSNR, the closer
/// the images. Underneath, the PSNR is based on the mean squared error [`mse()`].
pub fn psnr(
    image1: &RgbaView,
    image2: &RgbaView,
    channels: Channels,
) -> Result<PsnrScore, ImageError> {
    Ok(psnr_from_mse(mse(image1, image2, channels)?))
}

/// Compute the peak signal-to-noise ratio between two raw RGBA8 buffers.
///
/// Both buffers must hold at least `width * height * 4` bytes.
///
/// # Errors
///
/// Returns an error if either buffer is too short for the given size.
pub fn compute_psnr(
    data1: &[u8],
    data2: &[u8],
    size: ImageSize,
    include_alpha: bool,
) -> Result<PsnrScore, ImageError> {
    let image1 = RgbaView::new(size, data1)?;
    let image2 = RgbaView::new(size, data2)?;
    psnr(&image1, &image2, Channels::from_alpha(include_alpha))
}

/// Compute the peak signal-to-noise ratio with the given configuration.
///
/// # Errors
///
/// Returns an error if the two images have different sizes or the configured
/// execution strategy cannot run.
pub fn psnr_with_config(
    image1: &RgbaView,
    image2: &RgbaView,
    config: &MetricsConfig,
) -> Result<PsnrScore, MetricsError> {
    Ok(psnr_from_mse(mse_with_config(image1, image2, config)?))
}

#[cfg(test)]
mod tests {
    use imgsim_image::{ImageError, RgbaView};

    use super::{psnr_from_mse, PsnrScore};
    use crate::config::{Channels, MetricsConfig};
    use crate::error::MetricsError;
    use crate::parallel::ExecutionStrategy;

    #[test]
    fn test_psnr() -> Result<(), ImageError> {
        let a = [0u8, 0, 0, 255, 0, 0, 0, 255];
        let b = [10u8, 0, 0, 255, 0, 0, 0, 255];

        let score = crate::compute_psnr(&a, &b, [2, 1].into(), false)?;
        let expected = 10.0 * (255.0f64 * 255.0 / (100.0 / 6.0)).log10();
        assert!((score.psnr as f64 - expected).abs() < 1e-4);
        assert!(!score.identical);

        Ok(())
    }

    #[test]
    fn test_identical() -> Result<(), ImageError> {
        let a = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let score = crate::compute_psnr(&a, &a, [1, 2].into(), true)?;
        assert_eq!(
            score,
            PsnrScore {
                psnr: f32::INFINITY,
                identical: true,
            }
        );

        Ok(())
    }

    #[test]
    fn test_empty() -> Result<(), ImageError> {
        let score = crate::compute_psnr(&[], &[], [0, 0].into(), true)?;
        assert!(score.identical);
        assert!(score.psnr.is_infinite());

        Ok(())
    }

    #[test]
    fn test_max_error() {
        let score = psnr_from_mse(255.0 * 255.0);
        assert_eq!(score.psnr, 0.0);
        assert!(!score.identical);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "mean squared error must be >= 0")]
    fn test_negative_mse() {
        psnr_from_mse(-1.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "mean squared error must be >= 0")]
    fn test_nan_mse() {
        psnr_from_mse(f32::NAN);
    }

    #[test]
    fn test_alpha_only_difference() -> Result<(), ImageError> {
        let a = [9u8, 9, 9, 0];
        let b = [9u8, 9, 9, 255];
        let image1 = RgbaView::new([1, 1].into(), &a)?;
        let image2 = RgbaView::new([1, 1].into(), &b)?;

        assert!(crate::psnr(&image1, &image2, Channels::Rgb)?.identical);
        assert!(!crate::psnr(&image1, &image2, Channels::Rgba)?.identical);

        Ok(())
    }

    #[test]
    fn test_with_config() -> Result<(), MetricsError> {
        let a = [0u8, 0, 0, 0, 0, 0, 0, 0];
        let b = [0u8, 0, 0, 0, 0, 0, 0, 4];
        let image1 = RgbaView::new([2, 1].into(), &a)?;
        let image2 = RgbaView::new([2, 1].into(), &b)?;

        let config = MetricsConfig::default().with_strategy(ExecutionStrategy::Fixed(2));
        let score = crate::psnr_with_config(&image1, &image2, &config)?;
        assert_eq!(score, crate::psnr_from_mse(2.0));

        let score = crate::psnr_with_config(&image1, &image2, &config.with_include_alpha(false))?;
        assert!(score.identical);

        Ok(())
    }
}

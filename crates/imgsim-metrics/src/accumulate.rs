use std::ops::Range;

use imgsim_image::{ImageError, RgbaView, RGBA_CHANNELS};

use crate::config::Channels;

/// A running sum of squared sample differences.
///
/// This is the primitive both [`crate::mse()`] and [`crate::psnr()`] are built
/// on. Partial sums over disjoint pixel ranges can be computed independently
/// and combined with [`SquaredErrorSum::merge`]; the result is exact since
/// the sum is kept as an integer.
///
/// The largest possible image (65535 x 65535 pixels, 4 channels, every
/// difference 255) sums to about 1.1e15, well within `u64`.
///
/// # Example
///
/// ```
/// use imgsim_metrics::{Channels, SquaredErrorSum};
///
/// let a = [0u8, 0, 0, 255, 0, 0, 0, 255];
/// let b = [10u8, 0, 0, 255, 0, 0, 0, 255];
///
/// let mut first = SquaredErrorSum::default();
/// first.accumulate(&a[..4], &b[..4], Channels::Rgb);
///
/// let mut second = SquaredErrorSum::default();
/// second.accumulate(&a[4..], &b[4..], Channels::Rgb);
///
/// let total = first.merge(second);
/// assert_eq!(total.sum, 100);
/// assert_eq!(total.samples, 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquaredErrorSum {
    /// Sum of the squared differences.
    pub sum: u64,
    /// Number of samples that contributed to the sum.
    pub samples: u64,
}

impl SquaredErrorSum {
    /// Fold a run of RGBA8 pixels into the sum.
    ///
    /// Both slices hold interleaved 4-channel pixels. Only whole pixels
    /// present in both slices are visited.
    pub fn accumulate(&mut self, a: &[u8], b: &[u8], channels: Channels) {
        let n = channels.count();

        let (sum, pixels) = a
            .chunks_exact(RGBA_CHANNELS)
            .zip(b.chunks_exact(RGBA_CHANNELS))
            .fold((0u64, 0u64), |(sum, pixels), (pa, pb)| {
                let px = pa[..n]
                    .iter()
                    .zip(pb[..n].iter())
                    .map(|(&x, &y)| {
                        let d = x as i32 - y as i32;
                        (d * d) as u64
                    })
                    .sum::<u64>();
                (sum + px, pixels + 1)
            });

        self.sum += sum;
        self.samples += pixels * n as u64;
    }

    /// Combine two partial sums.
    pub fn merge(self, other: Self) -> Self {
        Self {
            sum: self.sum + other.sum,
            samples: self.samples + other.samples,
        }
    }

    /// Get the mean of the squared differences.
    ///
    /// An empty sum has no comparable samples and yields `0.0`.
    pub fn mean(&self) -> f32 {
        if self.samples == 0 {
            return 0.0;
        }
        (self.sum as f64 / self.samples as f64) as f32
    }
}

/// Sum the squared errors of two whole images on the current thread.
pub(crate) fn fold_serial(
    a: &RgbaView,
    b: &RgbaView,
    channels: Channels,
) -> Result<SquaredErrorSum, ImageError> {
    check_same_size(a, b)?;

    let mut acc = SquaredErrorSum::default();
    acc.accumulate(a.as_slice(), b.as_slice(), channels);

    Ok(acc)
}

pub(crate) fn check_same_size(a: &RgbaView, b: &RgbaView) -> Result<(), ImageError> {
    if a.size() != b.size() {
        return Err(ImageError::InvalidImageSize(
            a.height(),
            a.width(),
            b.height(),
            b.width(),
        ));
    }
    Ok(())
}

/// Compute the partial squared error sum over a band of rows.
///
/// Sharding the rows of an image across calls and merging the results gives
/// exactly the sum of the whole image.
///
/// # Arguments
///
/// * `a` - The first input image.
/// * `b` - The second input image.
/// * `rows` - The rows to visit.
/// * `channels` - The channels taking part in the comparison.
///
/// # Errors
///
/// Returns an error if the images have different sizes or the row range
/// reaches past the last row.
///
/// # Example
///
/// ```
/// use imgsim_image::{ImageSize, RgbaView};
/// use imgsim_metrics::{squared_error_rows, Channels};
///
/// let size = ImageSize { width: 1, height: 2 };
/// let a = RgbaView::new(size, &[0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
/// let b = RgbaView::new(size, &[1, 1, 1, 1, 2, 2, 2, 2]).unwrap();
///
/// let top = squared_error_rows(&a, &b, 0..1, Channels::Rgba).unwrap();
/// let bottom = squared_error_rows(&a, &b, 1..2, Channels::Rgba).unwrap();
///
/// assert_eq!(top.sum, 4);
/// assert_eq!(bottom.sum, 16);
/// assert_eq!(top.merge(bottom).mean(), 2.5);
/// ```
pub fn squared_error_rows(
    a: &RgbaView,
    b: &RgbaView,
    rows: Range<usize>,
    channels: Channels,
) -> Result<SquaredErrorSum, ImageError> {
    check_same_size(a, b)?;

    let mut acc = SquaredErrorSum::default();
    acc.accumulate(a.rows(rows.clone())?, b.rows(rows)?, channels);

    Ok(acc)
}

use std::ops::Range;

use crate::error::ImageError;

/// Number of interleaved samples physically stored per pixel.
pub const RGBA_CHANNELS: usize = 4;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use imgsim_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// assert_eq!(image_size.num_pixels(), 200);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: u16,
    /// Height of the image in pixels
    pub height: u16,
}

impl ImageSize {
    /// Get the number of pixels covered by the size.
    pub fn num_pixels(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get the number of samples for the given number of channels per pixel.
    ///
    /// # Panics
    ///
    /// Panics on overflow in debug builds, which large sizes reach on 32-bit
    /// targets. Use [`ImageSize::checked_num_samples`] for untrusted sizes.
    pub fn num_samples(&self, channels: usize) -> usize {
        self.num_pixels() * channels
    }

    /// Get the number of samples for the given number of channels per pixel,
    /// or `None` if the count does not fit in `usize`.
    pub fn checked_num_samples(&self, channels: usize) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)?
            .checked_mul(channels)
    }

    /// Whether the size covers no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[u16; 2]> for ImageSize {
    fn from(size: [u16; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// A borrowed view over interleaved RGBA8 pixel data.
///
/// The data is laid out row-major with 4 samples per pixel and no padding
/// between rows. The view never owns the buffer; it only guarantees that the
/// slice it wraps holds exactly `width * height * 4` bytes.
#[derive(Clone, Copy, Debug)]
pub struct RgbaView<'a> {
    size: ImageSize,
    data: &'a [u8],
}

impl<'a> RgbaView<'a> {
    /// Create a new view over RGBA8 pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image. Bytes past `width * height * 4` are ignored.
    ///
    /// # Errors
    ///
    /// If the pixel data is shorter than the image size requires, or the
    /// required length does not fit in `usize`, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use imgsim_image::{ImageSize, RgbaView};
    ///
    /// let data = vec![0u8; 2 * 3 * 4];
    /// let view = RgbaView::new(
    ///   ImageSize {
    ///     width: 2,
    ///     height: 3,
    ///   },
    ///   &data,
    /// ).unwrap();
    ///
    /// assert_eq!(view.width(), 2);
    /// assert_eq!(view.height(), 3);
    /// assert_eq!(view.row_stride(), 8);
    ///
    /// assert!(RgbaView::new([2, 4].into(), &data).is_err());
    /// ```
    pub fn new(size: ImageSize, data: &'a [u8]) -> Result<Self, ImageError> {
        let required = size
            .checked_num_samples(RGBA_CHANNELS)
            .ok_or(ImageError::ImageSizeOverflow(size.width, size.height))?;
        if data.len() < required {
            return Err(ImageError::InvalidBufferLength(data.len(), required));
        }

        Ok(Self {
            size,
            data: &data[..required],
        })
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width as usize
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height as usize
    }

    /// Get the number of bytes in a single row.
    pub fn row_stride(&self) -> usize {
        self.width() * RGBA_CHANNELS
    }

    /// Get the pixel data covered by the view.
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Get the pixel data of a single row, or `None` if `y` is out of bounds.
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        if y >= self.height() {
            return None;
        }
        let stride = self.row_stride();
        Some(&self.data[y * stride..(y + 1) * stride])
    }

    /// Get the pixel data of a contiguous band of rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the range reaches past the last row.
    pub fn rows(&self, rows: Range<usize>) -> Result<&'a [u8], ImageError> {
        if rows.end > self.height() {
            return Err(ImageError::RowOutOfBounds(rows.end, self.height()));
        }
        if rows.start >= rows.end {
            return Ok(&[]);
        }
        let stride = self.row_stride();
        Ok(&self.data[rows.start * stride..rows.end * stride])
    }
}

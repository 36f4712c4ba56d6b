/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the pixel buffer is shorter than the image size requires.
    #[error("Data length ({0}) is smaller than the required length ({1})")]
    InvalidBufferLength(usize, usize),

    /// Error when the buffer length for an image size does not fit in `usize`.
    #[error("Buffer length for image size ({0}x{1}) overflows usize")]
    ImageSizeOverflow(u16, u16),

    /// Error when two images that must match have different sizes.
    #[error("Image size mismatch: ({0}, {1}) vs ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a row range reaches past the last row of the image.
    #[error("Row range end ({0}) is out of bounds for image height ({1})")]
    RowOutOfBounds(usize, usize),
}

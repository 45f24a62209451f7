use thiserror::Error;

use crate::avatar::upload::MAX_UPLOAD_BYTES;

/// Errors produced while validating, cropping, or encoding an avatar.
///
/// Display strings are shown to the user as-is by the avatar editor and returned in
/// 400 responses by the profile endpoint.
#[derive(Error, Debug)]
pub enum AvatarError {
    /// The file's MIME type is not PNG or JPEG.
    #[error("Unsupported file type '{0}', please choose a PNG or JPEG image")]
    UnsupportedType(String),

    /// The file exceeds [`MAX_UPLOAD_BYTES`].
    #[error("Image is too large ({size} bytes), the maximum is {} MB", MAX_UPLOAD_BYTES / (1024 * 1024))]
    TooLarge { size: u64, max: u64 },

    /// The crop selection maps to an empty source rectangle.
    #[error("Crop selection is empty")]
    EmptyCrop,

    /// Decoding the upload or encoding the output failed.
    #[error("Failed to process image: {0}")]
    Image(#[from] image::ImageError),

    /// A submitted avatar is not a base64 JPEG data URL.
    #[error("Avatar must be a base64 encoded JPEG data URL: {0}")]
    InvalidDataUrl(String),

    /// A submitted avatar payload is larger than the byte budget.
    #[error("Avatar is {size} bytes, the limit is {max} bytes")]
    OverBudget { size: usize, max: usize },

    /// A submitted avatar does not have the expected square resolution.
    #[error("Avatar must be {expected}x{expected} pixels, got {width}x{height}")]
    WrongDimensions {
        width: u32,
        height: u32,
        expected: u32,
    },
}

//! Avatar crop-and-compress pipeline.
//!
//! Turns an uploaded PNG or JPEG into a small square JPEG suitable for storing as a
//! profile avatar. The pipeline runs in the browser (the editor) and its verification
//! half runs again on the server before an avatar is persisted.
//!
//! 1. [`upload::validate_upload`] rejects unsupported types and oversized files before
//!    any bytes are read.
//! 2. [`crop::CropRegion`] tracks the square selection in displayed-image coordinates and
//!    maps it onto source pixels.
//! 3. [`compress::compress_avatar`] rasterizes the selection to a fixed square and
//!    re-encodes at decreasing JPEG quality until the result fits the byte budget.
//! 4. [`data_url`] wraps the result for transport and verifies submitted avatars.

pub mod compress;
pub mod crop;
pub mod data_url;
pub mod error;
pub mod upload;

pub use compress::{compress_avatar, process_upload, CompressOptions, CompressedAvatar};
pub use crop::{CropRegion, Dimensions, SourceRect};
pub use data_url::verify_avatar;
pub use error::AvatarError;
pub use upload::{decode_upload, validate_upload, ImageKind, MAX_UPLOAD_BYTES};

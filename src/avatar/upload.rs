use image::{DynamicImage, ImageFormat};

use crate::avatar::error::AvatarError;

/// Largest file accepted by the avatar editor.
pub const MAX_UPLOAD_BYTES: u64 = 20 * 1024 * 1024;

/// MIME types accepted by the avatar editor. `image/jpg` is non-standard but some
/// browsers report it.
pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];

/// Value for the file input's `accept` attribute.
pub const ACCEPT_ATTRIBUTE: &str = "image/png,image/jpeg";

/// Supported upload encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    /// Resolves a MIME type reported by the browser, ignoring case and parameters.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/png" => Some(Self::Png),
            "image/jpeg" | "image/jpg" => Some(Self::Jpeg),
            _ => None,
        }
    }

    pub fn format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// Checks a selected file's metadata before it is read into memory.
///
/// The MIME type is checked first so an oversized unsupported file reports the type
/// problem.
///
/// # Arguments
/// - `mime` - MIME type reported for the file
/// - `size` - File size in bytes
///
/// # Returns
/// - `Ok(ImageKind)` - The file may be read and decoded as this kind
/// - `Err(AvatarError::UnsupportedType)` - Not a PNG or JPEG
/// - `Err(AvatarError::TooLarge)` - Larger than [`MAX_UPLOAD_BYTES`]
pub fn validate_upload(mime: &str, size: u64) -> Result<ImageKind, AvatarError> {
    let Some(kind) = ImageKind::from_mime(mime) else {
        return Err(AvatarError::UnsupportedType(mime.to_string()));
    };

    if size > MAX_UPLOAD_BYTES {
        return Err(AvatarError::TooLarge {
            size,
            max: MAX_UPLOAD_BYTES,
        });
    }

    Ok(kind)
}

/// Decodes validated upload bytes using the declared format rather than sniffing.
pub fn decode_upload(bytes: &[u8], kind: ImageKind) -> Result<DynamicImage, AvatarError> {
    Ok(image::load_from_memory_with_format(bytes, kind.format())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_listed_mime_type() {
        for mime in ACCEPTED_MIME_TYPES {
            assert!(validate_upload(mime, 1024).is_ok(), "{mime} rejected");
        }
    }

    #[test]
    fn normalizes_case_and_parameters() {
        assert_eq!(ImageKind::from_mime("IMAGE/PNG"), Some(ImageKind::Png));
        assert_eq!(
            ImageKind::from_mime("image/jpeg; charset=binary"),
            Some(ImageKind::Jpeg)
        );
    }

    #[test]
    fn rejects_other_image_types() {
        for mime in ["image/gif", "image/webp", "image/svg+xml", "application/pdf", ""] {
            let result = validate_upload(mime, 10);
            assert!(
                matches!(result, Err(AvatarError::UnsupportedType(_))),
                "{mime} accepted"
            );
        }
    }

    #[test]
    fn rejects_files_over_the_cap() {
        let result = validate_upload("image/jpeg", MAX_UPLOAD_BYTES + 1);

        match result {
            Err(AvatarError::TooLarge { size, max }) => {
                assert_eq!(size, MAX_UPLOAD_BYTES + 1);
                assert_eq!(max, MAX_UPLOAD_BYTES);
            }
            other => panic!("expected TooLarge, got {:?}", other),
        }
    }

    #[test]
    fn accepts_file_exactly_at_the_cap() {
        assert_eq!(
            validate_upload("image/png", MAX_UPLOAD_BYTES).unwrap(),
            ImageKind::Png
        );
    }

    #[test]
    fn type_is_checked_before_size() {
        let result = validate_upload("image/gif", MAX_UPLOAD_BYTES * 2);

        assert!(matches!(result, Err(AvatarError::UnsupportedType(_))));
    }
}

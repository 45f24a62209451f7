use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::{GenericImageView, ImageFormat};

use crate::avatar::{compress::CompressOptions, error::AvatarError};

pub const JPEG_DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, BASE64.encode(bytes))
}

/// Extracts the JPEG payload from a `data:image/jpeg;base64,` URL.
pub fn decode_jpeg_data_url(url: &str) -> Result<Vec<u8>, AvatarError> {
    let Some(encoded) = url.strip_prefix(JPEG_DATA_URL_PREFIX) else {
        return Err(AvatarError::InvalidDataUrl(
            "missing image/jpeg prefix".to_string(),
        ));
    };

    BASE64
        .decode(encoded.trim())
        .map_err(|e| AvatarError::InvalidDataUrl(e.to_string()))
}

/// Checks a submitted avatar the same way the editor produced it: a JPEG data URL
/// whose payload is within the byte budget and which decodes to the output square.
///
/// # Returns
/// - `Ok(())` - Avatar may be stored
/// - `Err(AvatarError::InvalidDataUrl)` - Wrong prefix or bad base64
/// - `Err(AvatarError::OverBudget)` - Payload larger than `options.target_bytes`
/// - `Err(AvatarError::Image)` - Payload is not a decodable JPEG
/// - `Err(AvatarError::WrongDimensions)` - Not `output_size` square
pub fn verify_avatar(url: &str, options: &CompressOptions) -> Result<(), AvatarError> {
    let bytes = decode_jpeg_data_url(url)?;

    if bytes.len() > options.target_bytes {
        return Err(AvatarError::OverBudget {
            size: bytes.len(),
            max: options.target_bytes,
        });
    }

    let (width, height) =
        image::load_from_memory_with_format(&bytes, ImageFormat::Jpeg)?.dimensions();
    if width != options.output_size || height != options.output_size {
        return Err(AvatarError::WrongDimensions {
            width,
            height,
            expected: options.output_size,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    use crate::avatar::{compress::compress_avatar, crop::SourceRect};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        }))
    }

    fn jpeg_data_url(image: &DynamicImage) -> String {
        let mut bytes = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Jpeg)
            .unwrap();
        encode_data_url("image/jpeg", &bytes)
    }

    #[test]
    fn accepts_editor_output() {
        let image = gradient(300, 200);
        let rect = SourceRect {
            x: 50,
            y: 0,
            width: 200,
            height: 200,
        };
        let options = CompressOptions::default();
        let avatar = compress_avatar(&image, rect, &options).unwrap();

        assert!(verify_avatar(&avatar.to_data_url(), &options).is_ok());
    }

    #[test]
    fn rejects_non_jpeg_prefix() {
        let result = verify_avatar("data:image/png;base64,AAAA", &CompressOptions::default());

        assert!(matches!(result, Err(AvatarError::InvalidDataUrl(_))));
    }

    #[test]
    fn rejects_invalid_base64() {
        let result = verify_avatar(
            "data:image/jpeg;base64,not*base64!",
            &CompressOptions::default(),
        );

        assert!(matches!(result, Err(AvatarError::InvalidDataUrl(_))));
    }

    #[test]
    fn rejects_payload_over_budget() {
        let url = jpeg_data_url(&gradient(256, 256));
        let options = CompressOptions {
            target_bytes: 16,
            ..Default::default()
        };

        let result = verify_avatar(&url, &options);

        assert!(matches!(result, Err(AvatarError::OverBudget { max: 16, .. })));
    }

    #[test]
    fn rejects_wrong_resolution() {
        let url = jpeg_data_url(&gradient(128, 128));

        let result = verify_avatar(&url, &CompressOptions::default());

        assert!(matches!(
            result,
            Err(AvatarError::WrongDimensions {
                width: 128,
                height: 128,
                expected: 256
            })
        ));
    }
}

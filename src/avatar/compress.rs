use image::{codecs::jpeg::JpegEncoder, imageops::FilterType, DynamicImage, RgbImage};

use crate::avatar::{
    crop::{CropRegion, Dimensions, SourceRect},
    data_url::encode_data_url,
    error::AvatarError,
    upload::{decode_upload, validate_upload},
};

/// Tunables for the crop-and-compress step.
///
/// Qualities are JPEG percentages, so the defaults walk 90, 80, ..., 10.
#[derive(Clone, Debug, PartialEq)]
pub struct CompressOptions {
    /// Edge length of the square output in pixels.
    pub output_size: u32,
    /// Byte budget for the encoded JPEG payload (not the data URL).
    pub target_bytes: usize,
    pub start_quality: u8,
    /// Quality floor; the loop never encodes below this.
    pub min_quality: u8,
    pub quality_step: u8,
}

impl Default for CompressOptions {
    fn default() -> Self {
        Self {
            output_size: 256,
            target_bytes: 500 * 1024,
            start_quality: 90,
            min_quality: 10,
            quality_step: 10,
        }
    }
}

/// Result of compressing an avatar.
#[derive(Clone, Debug, PartialEq)]
pub struct CompressedAvatar {
    /// Encoded JPEG bytes.
    pub bytes: Vec<u8>,
    /// Quality of the returned encoding.
    pub quality: u8,
    /// Every quality that was encoded, in order.
    pub qualities_tried: Vec<u8>,
}

impl CompressedAvatar {
    pub fn to_data_url(&self) -> String {
        encode_data_url("image/jpeg", &self.bytes)
    }

    pub fn fits(&self, target_bytes: usize) -> bool {
        self.bytes.len() <= target_bytes
    }
}

/// Draws exactly `rect` of `image` into a fresh `output_size` square.
pub fn rasterize(image: &DynamicImage, rect: SourceRect, output_size: u32) -> RgbImage {
    image
        .crop_imm(rect.x, rect.y, rect.width, rect.height)
        .resize_exact(output_size, output_size, FilterType::Triangle)
        .to_rgb8()
}

pub fn encode_jpeg(pixels: &RgbImage, quality: u8) -> Result<Vec<u8>, AvatarError> {
    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
    encoder.encode_image(pixels)?;
    Ok(bytes)
}

/// Encodes `pixels` at decreasing quality until the payload fits the budget.
///
/// Starts at `start_quality` and steps down by `quality_step` while the encoding is
/// over budget and the floor has not been reached. The last step lands exactly on the
/// floor. When even the floor is over budget, the floor encoding is returned.
pub fn compress_to_budget(
    pixels: &RgbImage,
    options: &CompressOptions,
) -> Result<CompressedAvatar, AvatarError> {
    let floor = options.min_quality.min(options.start_quality);
    let step = options.quality_step.max(1);

    let mut quality = options.start_quality;
    let mut bytes = encode_jpeg(pixels, quality)?;
    let mut qualities_tried = vec![quality];

    while bytes.len() > options.target_bytes && quality > floor {
        quality = quality.saturating_sub(step).max(floor);
        bytes = encode_jpeg(pixels, quality)?;
        qualities_tried.push(quality);
    }

    Ok(CompressedAvatar {
        bytes,
        quality,
        qualities_tried,
    })
}

/// Crops `rect` out of `image`, scales it to the output square, and compresses it.
pub fn compress_avatar(
    image: &DynamicImage,
    rect: SourceRect,
    options: &CompressOptions,
) -> Result<CompressedAvatar, AvatarError> {
    if rect.width == 0 || rect.height == 0 {
        return Err(AvatarError::EmptyCrop);
    }

    let pixels = rasterize(image, rect, options.output_size);
    compress_to_budget(&pixels, options)
}

/// Runs the whole pipeline on raw upload bytes.
///
/// # Arguments
/// - `bytes` - File contents as read from the input
/// - `mime` - MIME type reported for the file
/// - `crop` - Selection in displayed-pixel coordinates
/// - `displayed` - Size the preview was rendered at
/// - `options` - Output size, byte budget, and quality schedule
///
/// # Returns
/// - `Ok(CompressedAvatar)` - Square JPEG, within budget unless the floor was hit
/// - `Err(AvatarError)` - Validation, decoding, or encoding failed
pub fn process_upload(
    bytes: &[u8],
    mime: &str,
    crop: CropRegion,
    displayed: Dimensions,
    options: &CompressOptions,
) -> Result<CompressedAvatar, AvatarError> {
    let kind = validate_upload(mime, bytes.len() as u64)?;
    let image = decode_upload(bytes, kind)?;

    let rect = crop.to_source_rect(displayed, (image.width(), image.height()))?;
    compress_avatar(&image, rect, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageFormat, Rgb};

    use crate::avatar::upload::MAX_UPLOAD_BYTES;

    /// Deterministic high-entropy image so JPEG sizes respond to quality.
    fn noise_image(width: u32, height: u32) -> DynamicImage {
        let pixels = RgbImage::from_fn(width, height, |x, y| {
            let mut h = x.wrapping_mul(0x9E37_79B1) ^ y.wrapping_mul(0x85EB_CA77);
            h ^= h >> 15;
            h = h.wrapping_mul(0xC2B2_AE3D);
            h ^= h >> 13;
            Rgb([h as u8, (h >> 8) as u8, (h >> 16) as u8])
        });
        DynamicImage::ImageRgb8(pixels)
    }

    fn full_rect(image: &DynamicImage) -> SourceRect {
        SourceRect {
            x: 0,
            y: 0,
            width: image.width(),
            height: image.height(),
        }
    }

    fn decoded_dimensions(bytes: &[u8]) -> (u32, u32) {
        image::load_from_memory_with_format(bytes, ImageFormat::Jpeg)
            .unwrap()
            .dimensions()
    }

    #[test]
    fn output_is_always_the_configured_square() {
        let image = noise_image(640, 360);
        let options = CompressOptions::default();
        let rects = [
            SourceRect { x: 0, y: 0, width: 360, height: 360 },
            SourceRect { x: 10, y: 20, width: 37, height: 37 },
            SourceRect { x: 600, y: 320, width: 40, height: 40 },
            SourceRect { x: 100, y: 0, width: 300, height: 180 },
        ];

        for rect in rects {
            let avatar = compress_avatar(&image, rect, &options).unwrap();
            assert_eq!(decoded_dimensions(&avatar.bytes), (256, 256), "{:?}", rect);
        }
    }

    #[test]
    fn first_encoding_that_fits_is_kept() {
        let image = noise_image(300, 300);
        let options = CompressOptions {
            target_bytes: usize::MAX,
            ..Default::default()
        };

        let avatar = compress_avatar(&image, full_rect(&image), &options).unwrap();

        assert_eq!(avatar.quality, 90);
        assert_eq!(avatar.qualities_tried, vec![90]);
    }

    #[test]
    fn unreachable_budget_stops_at_floor() {
        let image = noise_image(300, 300);
        let options = CompressOptions {
            target_bytes: 1,
            ..Default::default()
        };

        let avatar = compress_avatar(&image, full_rect(&image), &options).unwrap();

        assert_eq!(avatar.quality, 10);
        assert_eq!(
            avatar.qualities_tried,
            vec![90, 80, 70, 60, 50, 40, 30, 20, 10]
        );
        assert!(!avatar.fits(1));
    }

    #[test]
    fn steps_down_until_the_payload_fits() {
        let image = noise_image(256, 256);
        let pixels = rasterize(&image, full_rect(&image), 256);
        let budget = encode_jpeg(&pixels, 60).unwrap().len();
        let options = CompressOptions {
            target_bytes: budget,
            ..Default::default()
        };

        let avatar = compress_to_budget(&pixels, &options).unwrap();

        assert_eq!(avatar.quality, 60);
        assert_eq!(avatar.qualities_tried, vec![90, 80, 70, 60]);
        assert!(avatar.fits(budget));
    }

    #[test]
    fn last_step_lands_on_floor() {
        let image = noise_image(128, 128);
        let options = CompressOptions {
            output_size: 64,
            target_bytes: 1,
            start_quality: 90,
            min_quality: 15,
            quality_step: 20,
        };

        let avatar = compress_avatar(&image, full_rect(&image), &options).unwrap();

        assert_eq!(avatar.qualities_tried, vec![90, 70, 50, 30, 15]);
        assert!(avatar.qualities_tried.iter().all(|q| *q >= 15));
    }

    #[test]
    fn rejects_empty_rect() {
        let image = noise_image(16, 16);
        let rect = SourceRect {
            x: 0,
            y: 0,
            width: 0,
            height: 16,
        };

        let result = compress_avatar(&image, rect, &CompressOptions::default());

        assert!(matches!(result, Err(AvatarError::EmptyCrop)));
    }

    #[test]
    fn unsupported_type_is_rejected_before_decoding() {
        // Not an image at all; a decode attempt would report AvatarError::Image.
        let bytes = b"GIF89a not really".to_vec();
        let crop = CropRegion {
            x: 0.0,
            y: 0.0,
            size: 10.0,
        };

        let result = process_upload(
            &bytes,
            "image/gif",
            crop,
            Dimensions::new(10.0, 10.0),
            &CompressOptions::default(),
        );

        assert!(matches!(result, Err(AvatarError::UnsupportedType(_))));
    }

    #[test]
    fn oversized_upload_is_rejected_before_decoding() {
        let bytes = vec![0u8; MAX_UPLOAD_BYTES as usize + 1];
        let crop = CropRegion {
            x: 0.0,
            y: 0.0,
            size: 10.0,
        };

        let result = process_upload(
            &bytes,
            "image/jpeg",
            crop,
            Dimensions::new(10.0, 10.0),
            &CompressOptions::default(),
        );

        assert!(matches!(result, Err(AvatarError::TooLarge { .. })));
    }

    #[test]
    fn png_uploads_are_supported() {
        let image = noise_image(200, 100);
        let mut png = Vec::new();
        image
            .write_to(&mut std::io::Cursor::new(&mut png), ImageFormat::Png)
            .unwrap();
        let displayed = Dimensions::new(200.0, 100.0);

        let avatar = process_upload(
            &png,
            "image/png",
            CropRegion::centered(displayed),
            displayed,
            &CompressOptions::default(),
        )
        .unwrap();

        assert_eq!(decoded_dimensions(&avatar.bytes), (256, 256));
    }

    /// Smooth gradients with low-amplitude grain, closer to a camera photo than
    /// [`noise_image`] so a 12 megapixel JPEG stays well under the upload cap.
    fn photo_like_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            let mut h = x.wrapping_mul(0x9E37_79B1) ^ y.wrapping_mul(0x85EB_CA77);
            h ^= h >> 15;
            let grain = |shift: u32| (h >> shift) & 0x0F;
            let r = (x * 240 / width + grain(0)).min(255);
            let g = (y * 240 / height + grain(8)).min(255);
            let b = ((x + y) * 240 / (width + height) + grain(16)).min(255);
            Rgb([r as u8, g as u8, b as u8])
        })
    }

    #[test]
    fn large_photo_with_centered_crop_fits_budget() {
        let photo = photo_like_image(4000, 3000);
        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, 75)
            .encode_image(&photo)
            .unwrap();
        assert!(
            jpeg.len() as u64 <= MAX_UPLOAD_BYTES,
            "fixture is {} bytes, over the upload cap",
            jpeg.len()
        );

        // Preview rendered at 400x300, so a centered 80px selection is 800 source pixels.
        let displayed = Dimensions::fit_within((4000, 3000), 400.0);
        let crop = CropRegion {
            x: 160.0,
            y: 110.0,
            size: 80.0,
        };
        assert_eq!(
            crop.to_source_rect(displayed, (4000, 3000)).unwrap(),
            SourceRect { x: 1600, y: 1100, width: 800, height: 800 }
        );
        let options = CompressOptions::default();

        let avatar = process_upload(&jpeg, "image/jpeg", crop, displayed, &options).unwrap();

        assert_eq!(decoded_dimensions(&avatar.bytes), (256, 256));
        assert!(avatar.fits(500 * 1024));
        assert_eq!(avatar.qualities_tried.first(), Some(&90));
        assert_eq!(avatar.qualities_tried.last(), Some(&avatar.quality));
        assert!(avatar
            .qualities_tried
            .windows(2)
            .all(|pair| pair[0] == pair[1] + 10));

        let url = avatar.to_data_url();
        assert!(url.starts_with("data:image/jpeg;base64,"));
    }
}

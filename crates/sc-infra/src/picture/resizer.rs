use anyhow::{Context, Result};
use async_trait::async_trait;
use image::{imageops::FilterType, GenericImageView, ImageFormat};

use sc_core::ports::{PictureResizerPort, ResizedPicture};

/// Maximum bounding box edge for stored profile pictures.
pub const MAX_PICTURE_EDGE: u32 = 800;

/// Resizes images into a square bounding box, preserving aspect ratio and
/// re-encoding in the source format (PNG fallback for anything exotic).
pub struct BoundingBoxPictureResizer {
    max_edge: u32,
}

impl BoundingBoxPictureResizer {
    pub fn new(max_edge: u32) -> Self {
        Self { max_edge }
    }
}

impl Default for BoundingBoxPictureResizer {
    fn default() -> Self {
        Self::new(MAX_PICTURE_EDGE)
    }
}

#[async_trait]
impl PictureResizerPort for BoundingBoxPictureResizer {
    async fn resize(&self, image_bytes: &[u8]) -> Result<ResizedPicture> {
        let format = image::guess_format(image_bytes).context("unrecognized image format")?;
        let decoded = image::load_from_memory(image_bytes).context("decode image bytes")?;

        let (original_width, original_height) = decoded.dimensions();
        let (target_width, target_height) =
            calculate_target_size(original_width, original_height, self.max_edge);

        let resized = if target_width == original_width && target_height == original_height {
            decoded
        } else {
            image::DynamicImage::ImageRgba8(image::imageops::resize(
                &decoded,
                target_width,
                target_height,
                FilterType::Triangle,
            ))
        };

        let (output_format, content_type) = match format {
            ImageFormat::Jpeg => (ImageFormat::Jpeg, "image/jpeg"),
            ImageFormat::WebP => (ImageFormat::WebP, "image/webp"),
            _ => (ImageFormat::Png, "image/png"),
        };

        // JPEG has no alpha channel; flatten before encoding.
        let resized = if output_format == ImageFormat::Jpeg {
            image::DynamicImage::ImageRgb8(resized.to_rgb8())
        } else {
            resized
        };

        let mut bytes = Vec::new();
        resized
            .write_to(&mut std::io::Cursor::new(&mut bytes), output_format)
            .context("encode resized picture")?;

        Ok(ResizedPicture {
            bytes,
            content_type: content_type.to_string(),
        })
    }
}

fn calculate_target_size(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width <= max_edge && height <= max_edge {
        return (width, height);
    }

    if width >= height {
        let scaled_height = ((height as f64) * (max_edge as f64) / (width as f64)).round() as u32;
        (max_edge, scaled_height.max(1))
    } else {
        let scaled_width = ((width as f64) * (max_edge as f64) / (height as f64)).round() as u32;
        (scaled_width.max(1), max_edge)
    }
}

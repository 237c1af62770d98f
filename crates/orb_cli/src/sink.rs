//! Image sink: encodes a rendered frame buffer as a PNG file.

use std::path::Path;

use image::RgbImage;
use orb_renderer::FrameBuffer;
use thiserror::Error;

/// Errors that can occur while persisting a rendered frame.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("frame buffer dimensions do not match its pixel data")]
    InvalidDimensions,

    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Encode the frame buffer as an 8-bit RGB PNG at `path`.
///
/// Channels are persisted in the order the renderer produced them.
pub fn save_png(image: &FrameBuffer, path: &Path) -> Result<(), SinkError> {
    let encoded = RgbImage::from_raw(image.width, image.height, image.to_rgb_bytes())
        .ok_or(SinkError::InvalidDimensions)?;
    encoded.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use orb_renderer::Rgb;

    #[test]
    fn test_save_preserves_channel_order() {
        let mut frame = FrameBuffer::new(2, 2);
        frame.set(0, 0, Rgb::new(200, 10, 30));
        frame.set(1, 1, Rgb::new(0, 255, 0));

        let path = std::env::temp_dir().join("orb_sink_channel_order.png");
        save_png(&frame, &path).expect("PNG encoding failed");

        let reloaded = image::open(&path).expect("reopening failed").to_rgb8();
        assert_eq!(reloaded.dimensions(), (2, 2));
        assert_eq!(reloaded.get_pixel(0, 0).0, [200, 10, 30]);
        assert_eq!(reloaded.get_pixel(1, 1).0, [0, 255, 0]);

        let _ = std::fs::remove_file(&path);
    }
}

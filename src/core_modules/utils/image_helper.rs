pub mod image_helper {
    use crate::core_modules::frame::{FrameBuffer, PixelFormat};
    use crate::error::Result;
    use image::ImageEncoder;
    use image::ImageError;
    use image::error::{ParameterError, ParameterErrorKind};
    use std::path::Path;

    /// A decoded image file, laid out as a camera frame.
    #[derive(Debug, Clone)]
    pub struct ImageFrame {
        pub frame: FrameBuffer,
        pub width: u32,
        pub height: u32,
    }

    /// Decodes an image file into a frame in the requested pixel format.
    pub fn load_frame<P: AsRef<Path>>(path: P, format: PixelFormat) -> Result<ImageFrame> {
        let image = image::open(path)?;
        let (width, height) = (image.width(), image.height());
        let bytes = match format {
            PixelFormat::Grayscale => image.to_luma8().into_raw(),
            PixelFormat::Rgb => image.to_rgb8().into_raw(),
        };
        Ok(ImageFrame {
            frame: FrameBuffer::new(bytes, format),
            width,
            height,
        })
    }

    /// Writes a one-byte-per-pixel match mask as a grayscale PNG.
    /// The mask must hold exactly `width * height` bytes.
    pub fn save_mask<P: AsRef<Path>>(path: P, width: u32, height: u32, mask: &[u8]) -> Result<()> {
        if mask.len() as u64 != u64::from(width) * u64::from(height) {
            return Err(ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            ))
            .into());
        }
        let output = std::fs::File::create(path).map_err(ImageError::IoError)?;
        let encoder = image::codecs::png::PngEncoder::new(output);

        encoder.write_image(mask, width, height, image::ExtendedColorType::L8)?;

        Ok(())
    }
}

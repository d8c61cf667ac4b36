// THEORY:
// A `FrameBuffer` is the raw byte dump of one camera image plus the tag that
// says how to read it. It knows how to slice itself into pixels and nothing
// more; deciding what those pixels mean is the classifier's job.
//
// Two pixel layouts exist:
// - Grayscale: one byte per pixel, replicated into all three channels.
// - RGB:       three bytes per pixel, in R, G, B order.
// Trailing bytes that do not fill a whole pixel are ignored.

use crate::core_modules::color::color::Color;
use crate::error::{GameError, Result};
use std::fmt;

pub type Byte = u8;
pub type Bytes = Vec<Byte>;

/// How the bytes of a frame are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    #[default]
    Grayscale,
    Rgb,
}

impl PixelFormat {
    /// Strict parse of a format tag ("grayscale" or "rgb").
    pub fn parse(tag: &str) -> Result<Self> {
        match tag {
            "grayscale" => Ok(PixelFormat::Grayscale),
            "rgb" => Ok(PixelFormat::Rgb),
            other => Err(GameError::UnsupportedFormatTag(other.to_string())),
        }
    }

    /// Lenient parse: anything unrecognized reads as grayscale.
    pub fn from_tag(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_else(|err| {
            log::warn!("{err}; falling back to grayscale");
            PixelFormat::Grayscale
        })
    }

    /// Number of bytes that make up one pixel.
    pub const fn stride(self) -> usize {
        match self {
            PixelFormat::Grayscale => 1,
            PixelFormat::Rgb => 3,
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            PixelFormat::Grayscale => "grayscale",
            PixelFormat::Rgb => "rgb",
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One camera frame as delivered by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pub bytes: Bytes,
    pub format: PixelFormat,
}

impl FrameBuffer {
    pub fn new(bytes: Bytes, format: PixelFormat) -> Self {
        Self { bytes, format }
    }

    /// Builds a frame from a host format tag, defaulting unknown tags to grayscale.
    pub fn from_tag(bytes: Bytes, format_tag: &str) -> Self {
        Self::new(bytes, PixelFormat::from_tag(format_tag))
    }

    /// Number of complete pixels in the buffer.
    pub fn pixel_count(&self) -> usize {
        self.bytes.len() / self.format.stride()
    }

    /// Iterates over every complete pixel as a `Color`.
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        let format = self.format;
        self.bytes
            .chunks_exact(format.stride())
            .map(move |px| match format {
                PixelFormat::Grayscale => Color::gray(px[0]),
                PixelFormat::Rgb => Color::new(px[0], px[1], px[2]),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strides_match_layouts() {
        assert_eq!(PixelFormat::Grayscale.stride(), 1);
        assert_eq!(PixelFormat::Rgb.stride(), 3);
    }

    #[test]
    fn strict_parse_rejects_unknown_tags() {
        assert_eq!(PixelFormat::parse("rgb").unwrap(), PixelFormat::Rgb);
        assert_eq!(PixelFormat::parse("grayscale").unwrap(), PixelFormat::Grayscale);
        match PixelFormat::parse("RGB888") {
            Err(GameError::UnsupportedFormatTag(tag)) => assert_eq!(tag, "RGB888"),
            other => panic!("expected UnsupportedFormatTag, got {other:?}"),
        }
    }

    #[test]
    fn lenient_parse_falls_back_to_grayscale() {
        assert_eq!(PixelFormat::from_tag("yuv"), PixelFormat::Grayscale);
        assert_eq!(PixelFormat::from_tag(""), PixelFormat::Grayscale);
        assert_eq!(PixelFormat::from_tag("rgb"), PixelFormat::Rgb);
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let frame = FrameBuffer::new(vec![1, 2, 3, 4, 5, 6, 7, 8], PixelFormat::Rgb);
        assert_eq!(frame.pixel_count(), 2);
        let pixels: Vec<Color> = frame.pixels().collect();
        assert_eq!(pixels, [Color::new(1, 2, 3), Color::new(4, 5, 6)]);
    }

    #[test]
    fn grayscale_bytes_replicate_into_channels() {
        let frame = FrameBuffer::from_tag(vec![7, 200], "grayscale");
        let pixels: Vec<Color> = frame.pixels().collect();
        assert_eq!(pixels, [Color::gray(7), Color::gray(200)]);
    }

    #[test]
    fn short_rgb_buffer_has_no_pixels() {
        let frame = FrameBuffer::new(vec![255, 255], PixelFormat::Rgb);
        assert_eq!(frame.pixel_count(), 0);
        assert_eq!(frame.pixels().count(), 0);
    }
}

// THEORY:
// The `FrameClassifier` answers one question per frame: what fraction of the
// image falls inside the target color's range?
//
// Key architectural principles & algorithm steps:
// 1.  **Stride Selection**: The frame's pixel format decides how many bytes make
//     up a pixel (1 for grayscale, 3 for RGB). Unknown tags were already folded
//     into grayscale when the frame was built.
// 2.  **Single Linear Pass**: Every complete pixel is turned into a `Color` and
//     tested against the target's open bounds. Matches are counted on the fly;
//     nothing is allocated on the scoring path.
// 3.  **Safe Ratio**: The result is `matches / pixel_count`. A frame without a
//     single complete pixel scores 0.0 instead of dividing by zero.
// 4.  **Stateless Utility**: The classifier has no memory. Absent frames are the
//     caller's business, never handled here.
//
// For debugging, the same pass can instead emit a mask with one byte per pixel
// (0xFF where the target matched, 0x00 elsewhere). Weighing that mask gives the
// same ratio as `classify`.

use crate::core_modules::color::color::NamedColorRange;
use crate::core_modules::frame::{Bytes, FrameBuffer};
use crate::error::{GameError, Result};

pub type MatchRatio = f64;

const MASK_HIT: u8 = 0xFF;
const MASK_MISS: u8 = 0x00;

pub mod frame_classifier {
    use super::*;

    /// Fraction of pixels in `frame` that fall inside `target`, in `[0, 1]`.
    /// Frames without a complete pixel score 0.0.
    pub fn classify(frame: &FrameBuffer, target: &NamedColorRange) -> MatchRatio {
        try_classify(frame, target).unwrap_or(0.0)
    }

    /// Like `classify`, but reports a frame with no complete pixel as an error.
    pub fn try_classify(frame: &FrameBuffer, target: &NamedColorRange) -> Result<MatchRatio> {
        let pixel_count = frame.pixel_count();
        if pixel_count == 0 {
            return Err(GameError::EmptyPixelCount);
        }
        let matches = frame.pixels().filter(|&color| target.contains(color)).count();
        Ok(matches as MatchRatio / pixel_count as MatchRatio)
    }

    /// One byte per pixel: 0xFF where the pixel matched `target`, 0x00 otherwise.
    pub fn match_mask(frame: &FrameBuffer, target: &NamedColorRange) -> Bytes {
        frame
            .pixels()
            .map(|color| if target.contains(color) { MASK_HIT } else { MASK_MISS })
            .collect()
    }

    /// Fraction of 0xFF bytes in a mask. An empty mask weighs 0.0.
    pub fn mask_weight(mask: &[u8]) -> MatchRatio {
        if mask.is_empty() {
            return 0.0;
        }
        let hits = mask.iter().filter(|&&b| b == MASK_HIT).count();
        hits as MatchRatio / mask.len() as MatchRatio
    }
}

// THEORY:
// A single error type for the whole engine. Some variants are "soft": the
// fallible primitives raise them and their lenient callers swallow them and
// fall back to a default for that tick (no frame, unknown format tag, empty
// frame). The rest are startup failures that must stop the game before the
// first round begins.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GameError>;

#[derive(Debug, Error)]
pub enum GameError {
    /// Nothing has been delivered by the camera yet.
    #[error("no camera frame is available")]
    NoFrameAvailable,

    #[error("unsupported pixel format tag `{0}`")]
    UnsupportedFormatTag(String),

    /// The buffer is shorter than a single pixel stride.
    #[error("frame holds no complete pixel")]
    EmptyPixelCount,

    /// The picker cannot avoid repeating itself with fewer than two colors.
    #[error("palette must hold at least 2 colors to pick from, got {0}")]
    DegeneratePaletteSize(usize),

    #[error("goal percentage must lie in [0, 100], got {0}")]
    InvalidGoalPercentage(f64),

    #[error("palette is empty")]
    EmptyPalette,

    #[error("failed to read config: {0}")]
    ConfigRead(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

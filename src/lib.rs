// THEORY:
// This file is the main entry point for the `color_rush` library crate.
// It exports the `RoundStateMachine` and the handful of types a host needs to
// drive it: the configuration, the capture context that receives camera
// frames, and the scoreboard the display shows. The building blocks
// (palette, classifier, picker) live in `core_modules` and stay usable on
// their own.

pub mod config;
pub mod core_modules;
pub mod error;
pub mod round;

pub use crate::config::GameConfig;
pub use crate::core_modules::capture::{CameraDevice, CaptureContext, NullCamera};
pub use crate::core_modules::color::color::{Color, NamedColorRange, in_range};
pub use crate::core_modules::frame::{FrameBuffer, PixelFormat};
pub use crate::core_modules::palette::Palette;
pub use crate::error::{GameError, Result};
pub use crate::round::{RoundOutcome, RoundState, RoundStateMachine, Scoreboard, TickReport};

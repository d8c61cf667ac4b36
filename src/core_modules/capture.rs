// THEORY:
// The `CaptureContext` is the bridge between the host's camera callbacks and the
// game loop. Everything the callbacks need to share (the requested pixel format,
// whether the device accepted it, the most recent frame) lives in this one
// object, owned by the round state machine. There is no global state.
//
// Key architectural principles:
// 1.  **Single-Slot Mailbox**: The host pushes frames through `deliver_frame`. Only
//     the newest frame is kept; each arrival overwrites the last. The game loop
//     reads the slot once per tick, so a frame may be up to one tick stale.
// 2.  **Registration Gate**: Frames are only accepted while the pixel format is
//     registered with the device. Pausing unregisters it and resuming registers it
//     again, so a paused host delivers nothing.
// 3.  **Sequential Access**: Callbacks and ticks run one after another on the same
//     execution context. Plain `&mut self` access is enough; no locks.

use crate::core_modules::frame::{Bytes, FrameBuffer, PixelFormat};
use crate::error::{GameError, Result};

/// The host's camera, reduced to the one call the game needs.
pub trait CameraDevice {
    /// Enables or disables delivery of frames in `format`.
    /// Returns `false` when the device refuses the request.
    fn set_frame_format(&mut self, format: PixelFormat, enabled: bool) -> bool;
}

/// A device that accepts every format. Used when frames come from somewhere
/// other than a live camera.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCamera;

impl CameraDevice for NullCamera {
    fn set_frame_format(&mut self, _format: PixelFormat, _enabled: bool) -> bool {
        true
    }
}

/// Owns the camera registration state and the latest delivered frame.
#[derive(Debug)]
pub struct CaptureContext<C = NullCamera> {
    camera: C,
    /// The pixel format requested from the device.
    format: PixelFormat,
    /// Whether the device currently delivers frames in `format`.
    registered: bool,
    /// The most recent frame, if any has arrived.
    latest: Option<FrameBuffer>,
}

impl<C: CameraDevice> CaptureContext<C> {
    pub fn new(camera: C, format: PixelFormat) -> Self {
        Self {
            camera,
            format,
            registered: false,
            latest: None,
        }
    }

    /// Host lifecycle hook: the camera has started. Registers the pixel format.
    pub fn on_started(&mut self) -> bool {
        self.registered = self.camera.set_frame_format(self.format, true);
        if self.registered {
            log::debug!("registered pixel format {}", self.format);
        } else {
            log::error!(
                "failed to register pixel format {}; the device may not support it",
                self.format
            );
        }
        self.registered
    }

    /// Host lifecycle hook: unregister while paused, register again on resume.
    pub fn on_paused(&mut self, paused: bool) {
        if paused {
            self.camera.set_frame_format(self.format, false);
            self.registered = false;
            log::debug!("capture paused");
        } else {
            self.registered = self.camera.set_frame_format(self.format, true);
            log::debug!("capture resumed (registered: {})", self.registered);
        }
    }

    /// Stores a new frame, replacing the previous one. Frames arriving while the
    /// format is unregistered are dropped; the return value says whether it was kept.
    pub fn deliver_frame(&mut self, bytes: Bytes, format_tag: &str) -> bool {
        if !self.registered {
            log::warn!("dropping frame of {} bytes: format not registered", bytes.len());
            return false;
        }
        let frame = FrameBuffer::from_tag(bytes, format_tag);
        if frame.format != self.format {
            log::debug!("frame tagged {} while {} is registered", frame.format, self.format);
        }
        self.latest = Some(frame);
        true
    }

    /// The most recently delivered frame.
    pub fn latest_frame(&self) -> Result<&FrameBuffer> {
        self.latest.as_ref().ok_or(GameError::NoFrameAvailable)
    }

    pub fn is_registered(&self) -> bool {
        self.registered
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }
}

impl Default for CaptureContext<NullCamera> {
    fn default() -> Self {
        Self::new(NullCamera, PixelFormat::default())
    }
}

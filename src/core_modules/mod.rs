pub mod capture;
pub mod color;
pub mod color_picker;
pub mod frame;
pub mod frame_classifier;
pub mod palette;
pub mod utils;

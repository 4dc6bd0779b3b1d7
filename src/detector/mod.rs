//! Pipeline entry points and their parameters.

mod params;
mod pipeline;

pub use params::DetectorParams;
pub use pipeline::{detect_in_image, detect_meteor};

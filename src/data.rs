mod image_transform;
mod model_output;

pub use image_transform::ImageTransformInfo;
pub use model_output::*;
pub use crate::detection_runners::y::Y;

mod box_colour;
mod bvr_box;
mod bvr_detection;
mod parser_config;
mod voc_classes;

pub use box_colour::*;
pub use bvr_box::*;
pub use bvr_detection::*;
pub use parser_config::*;
pub use voc_classes::*;

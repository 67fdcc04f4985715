pub mod activations;
pub mod nms;
pub mod output_parser;
pub mod y;
mod yolo_parser;

pub use output_parser::OutputParser;
pub use yolo_parser::*;

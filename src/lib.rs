mod utils;
pub mod common;
pub mod data;
pub mod detection_runners;
pub mod error;

use std::time::Instant;
use crate::common::{BvrDetection, ParserConfig};
use crate::data::ModelOutput;
use crate::detection_runners::{OutputParser, YoloParser};

pub use crate::error::ParseError;

pub type Result<T, E = ParseError> = std::result::Result<T, E>;

pub fn init_parser(config: &ParserConfig) -> anyhow::Result<YoloParser> {
    log::info!("Initializing YOLO output parser ({} max results)", config.max_results);
    let parser = YoloParser::new(config.clone())?;
    Ok(parser)
}

/// Decodes and de-duplicates one raw model output.
pub fn run_parser(parser: &YoloParser, output: &[f32]) -> anyhow::Result<Vec<BvrDetection>> {
    let now = Instant::now();

    let output = ModelOutput::from_slice(output)?;
    let detections = parser.forward(&output, false)?.into_detections();

    log::debug!("Parsing time: {:?}", now.elapsed());

    Ok(detections)
}

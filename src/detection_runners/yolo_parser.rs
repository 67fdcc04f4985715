//! Tiny-YOLOv2 grid decoder.
//!
//! Every grid cell predicts `BOXES_PER_CELL` boxes. For slot `b` the channels
//! `b * 25 .. b * 25 + 25` hold `[tx, ty, tw, th, to, class logits x 20]`:
//!
//! * centre = `(col + sigmoid(tx), row + sigmoid(ty)) * 32`
//! * size = `(e^tw * anchor_w, e^th * anchor_h) * 32`
//! * objectness = `sigmoid(to)`
//! * score = `softmax(logits)[top] * objectness`
//!
//! A candidate is kept when both objectness and score reach the threshold.

use rayon::prelude::*;
use crate::common::{BvrDetection, ParserConfig, ANCHORS, BOXES_PER_CELL, CLASS_COLOURS, CLASS_COUNT, VOC_LABELS};
use crate::data::{ImageTransformInfo, ModelOutput, BOX_INFO_FEATURE_COUNT, CELL_HEIGHT, CELL_WIDTH, COL_COUNT, ROW_COUNT};
use crate::detection_runners::activations::{sigmoid, softmax, top_class};
use crate::detection_runners::nms::non_max_suppression;
use crate::detection_runners::output_parser::OutputParser;
use crate::detection_runners::y::Y;
use crate::Result;

#[derive(Debug, Clone)]
pub struct YoloParser {
    config: ParserConfig,
}

impl OutputParser for YoloParser {
    type Input = ModelOutput;
    type Detection = BvrDetection;

    fn new(config: ParserConfig) -> Result<Self> {
        config.validate()?;
        log::debug!("YoloParser config:\n{}", config.to_string());
        Ok(Self { config })
    }

    fn config(&self) -> &ParserConfig {
        &self.config
    }

    fn decode(&self, output: &ModelOutput, threshold: f32) -> Result<Vec<BvrDetection>> {
        let mut detections = Vec::new();

        for row in 0..ROW_COUNT {
            for col in 0..COL_COUNT {
                for slot in 0..BOXES_PER_CELL {
                    if let Some(det) = self.decode_candidate(output, col, row, slot, threshold) {
                        detections.push(det);
                    }
                }
            }
        }

        log::debug!("Decoded {} candidates at threshold {}", detections.len(), threshold);
        Ok(detections)
    }

    fn suppress(&self, detections: Vec<BvrDetection>, max_results: usize, overlap_threshold: f32) -> Vec<BvrDetection> {
        let n = detections.len();
        let kept = non_max_suppression(detections, max_results, overlap_threshold);
        log::debug!("NMS kept {} of {} boxes", kept.len(), n);
        kept
    }

    fn collect(&self, detections: Vec<BvrDetection>) -> Y {
        Y::default().with_detections(detections)
    }
}

impl YoloParser {
    fn decode_candidate(&self, output: &ModelOutput, col: usize, row: usize, slot: usize, threshold: f32) -> Option<BvrDetection> {
        let channel = slot * (CLASS_COUNT + BOX_INFO_FEATURE_COUNT);

        let tx = output.value(col, row, channel);
        let ty = output.value(col, row, channel + 1);
        let tw = output.value(col, row, channel + 2);
        let th = output.value(col, row, channel + 3);
        let confidence = sigmoid(output.value(col, row, channel + 4));

        let (anchor_w, anchor_h) = ANCHORS[slot];
        let cx = (col as f32 + sigmoid(tx)) * CELL_WIDTH;
        let cy = (row as f32 + sigmoid(ty)) * CELL_HEIGHT;
        let w = tw.exp() * CELL_WIDTH * anchor_w;
        let h = th.exp() * CELL_HEIGHT * anchor_h;

        if self.config.skip_low_objectness && !(confidence >= threshold) {
            return None;
        }

        let class_offset = channel + BOX_INFO_FEATURE_COUNT;
        let logits: Vec<f32> = (0..CLASS_COUNT)
            .map(|class| output.value(col, row, class_offset + class))
            .collect();
        let (class_id, top_prob) = top_class(&softmax(&logits))?;
        let score = top_prob * confidence;

        // NaN never passes.
        if !(confidence >= threshold && score >= threshold) {
            return None;
        }

        Some(BvrDetection::new(
            class_id,
            Default::default(),
            VOC_LABELS[class_id],
            score,
            CLASS_COLOURS[class_id],
        ).with_cxcy_wh(cx, cy, w, h))
    }

    /// Decodes with the configured threshold.
    pub fn parse(&self, output: &ModelOutput) -> Result<Vec<BvrDetection>> {
        self.decode(output, self.config.confidence_threshold)
    }

    /// Transform from this parser's model input onto an `image_width` x `image_height` image.
    pub fn image_transform(&self, image_width: u32, image_height: u32) -> ImageTransformInfo {
        ImageTransformInfo::from_config(&self.config, image_width, image_height)
    }

    /// Runs the full pipeline on independent outputs in parallel. Results keep the input order.
    pub fn parse_batch(&self, outputs: &[ModelOutput]) -> Result<Vec<Y>> {
        if outputs.is_empty() {
            log::warn!("parse_batch called with no model outputs");
            return Ok(Vec::new());
        }
        outputs
            .par_iter()
            .map(|output| self.run(output))
            .collect()
    }

    /// Like [`parse_batch`](Self::parse_batch), tagging each result with its image name.
    pub fn parse_named_batch(&self, outputs: &[(String, ModelOutput)]) -> Result<Vec<Y>> {
        outputs
            .par_iter()
            .map(|(name, output)| self.run(output).map(|y| y.with_name(name)))
            .collect()
    }
}

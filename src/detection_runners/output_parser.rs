use std::time::Instant;
use crate::common::ParserConfig;
use crate::detection_runners::y::Y;
use crate::{utils, Result};

/// Post-processing stage that turns a raw model output into ranked detections.
pub trait OutputParser: Sized {
    type Input;
    type Detection;

    fn new(config: ParserConfig) -> Result<Self>;

    fn config(&self) -> &ParserConfig;

    /// Decodes every candidate scoring at least `threshold`.
    fn decode(&self, output: &Self::Input, threshold: f32) -> Result<Vec<Self::Detection>>;

    /// Removes overlapping duplicates, keeping at most `max_results`.
    fn suppress(&self, detections: Vec<Self::Detection>, max_results: usize, overlap_threshold: f32) -> Vec<Self::Detection>;

    fn collect(&self, detections: Vec<Self::Detection>) -> Y;

    /// Executes the full pipeline with the configured thresholds.
    fn run(&self, output: &Self::Input) -> Result<Y> {
        let config = self.config();
        let candidates = self.decode(output, config.confidence_threshold)?;
        let kept = self.suppress(candidates, config.max_results, config.overlap_threshold);
        Ok(self.collect(kept))
    }

    /// Executes the full pipeline, tracing per-stage timings.
    fn forward(&self, output: &Self::Input, profile: bool) -> Result<Y> {
        let parse_time = Instant::now();
        let mut elapsed = parse_time.elapsed();
        let config = self.config();

        let t_decode = Instant::now();
        let candidates = self.decode(output, config.confidence_threshold)?;
        let t_decode = t_decode.elapsed();
        let n_candidates = candidates.len();

        elapsed = utils::trace("TIME", "Decode", parse_time, elapsed);

        let t_nms = Instant::now();
        let kept = self.suppress(candidates, config.max_results, config.overlap_threshold);
        let t_nms = t_nms.elapsed();

        utils::trace("TIME", "NMS", parse_time, elapsed);

        if profile {
            log::info!("> Decode: {t_decode:?} ({n_candidates} candidates) | NMS: {t_nms:?} ({} kept)", kept.len());
        }

        Ok(self.collect(kept))
    }
}

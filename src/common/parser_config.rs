use std::path::Path;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Minimum objectness and minimum class score for a candidate to be kept.
    pub confidence_threshold: f32,
    /// IoU above which a lower-scored box is suppressed.
    pub overlap_threshold: f32,
    pub max_results: usize,
    /// Skip softmax for candidates whose objectness is already below threshold.
    pub skip_low_objectness: bool,
    pub model_width: u32,
    pub model_height: u32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.3,
            overlap_threshold: 0.5,
            max_results: 5,
            skip_low_objectness: true,
            model_width: 416,
            model_height: 416,
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_confidence_threshold(mut self, x: f32) -> Self {
        self.confidence_threshold = x;
        self
    }

    pub fn with_overlap_threshold(mut self, x: f32) -> Self {
        self.overlap_threshold = x;
        self
    }

    pub fn with_max_results(mut self, n: usize) -> Self {
        self.max_results = n;
        self
    }

    pub fn with_skip_low_objectness(mut self, x: bool) -> Self {
        self.skip_low_objectness = x;
        self
    }

    pub fn with_model_size(mut self, width: u32, height: u32) -> Self {
        self.model_width = width;
        self.model_height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ParseError> {
        check_unit_interval("confidence_threshold", self.confidence_threshold)?;
        check_unit_interval("overlap_threshold", self.overlap_threshold)?;
        Ok(())
    }

    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: ParserConfig = serde_json::from_str(json).context("Failed to parse parser config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read parser config: {:?}", path.as_ref()))?;
        Self::from_json_str(&json).with_context(|| format!("Invalid parser config: {:?}", path.as_ref()))
    }

    pub fn to_string(&self) -> String {
        format!("Confidence Threshold: {}\n\
        Overlap Threshold: {}\n\
        Max Results: {}\n\
        Skip Low Objectness: {}\n\
        Model Input Resolution: {}x{}",
                self.confidence_threshold, self.overlap_threshold, self.max_results,
                self.skip_low_objectness, self.model_width, self.model_height)
    }
}

fn check_unit_interval(name: &'static str, value: f32) -> Result<(), ParseError> {
    if value > 0. && value < 1. {
        Ok(())
    } else {
        Err(ParseError::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ParserConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_results, 5);
        assert_eq!(config.confidence_threshold, 0.3);
        assert_eq!(config.overlap_threshold, 0.5);
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        for bad in [0., 1., -0.2, 1.5, f32::NAN] {
            let err = ParserConfig::new().with_confidence_threshold(bad).validate();
            assert!(matches!(err, Err(ParseError::InvalidThreshold { name: "confidence_threshold", .. })));
            let err = ParserConfig::new().with_overlap_threshold(bad).validate();
            assert!(matches!(err, Err(ParseError::InvalidThreshold { name: "overlap_threshold", .. })));
        }
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = ParserConfig::from_json_str(r#"{ "max_results": 10, "overlap_threshold": 0.4 }"#).unwrap();
        assert_eq!(config.max_results, 10);
        assert_eq!(config.overlap_threshold, 0.4);
        assert_eq!(config.confidence_threshold, 0.3);
        assert!(config.skip_low_objectness);
    }

    #[test]
    fn json_with_bad_threshold_is_rejected() {
        assert!(ParserConfig::from_json_str(r#"{ "confidence_threshold": 2.0 }"#).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = ParserConfig::from_json_file("does/not/exist.json").unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.json"));
    }
}

use serde::{Deserialize, Serialize};
use crate::common::BvrDetection;
use crate::data::ImageTransformInfo;

/// Parse result for one image.
#[derive(Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Y {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    detections: Vec<BvrDetection>,
}

impl std::fmt::Debug for Y {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut f = f.debug_struct("Y");
        if let Some(x) = &self.name {
            f.field("Name", &x);
        }
        if !self.detections.is_empty() {
            f.field("BvrDetections", &self.detections);
        }
        f.finish()
    }
}

impl Y {
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_detections(mut self, detections: Vec<BvrDetection>) -> Self {
        self.detections = detections;
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn detections(&self) -> &[BvrDetection] {
        &self.detections
    }

    pub fn into_detections(self) -> Vec<BvrDetection> {
        self.detections
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }

    /// Rewrites every box from model-input space into image space.
    pub fn map_to_image(mut self, transform: &ImageTransformInfo) -> Self {
        for det in self.detections.iter_mut() {
            det.bbox = transform.map_box(&det.bbox);
        }
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

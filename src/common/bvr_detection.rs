use serde::{Deserialize, Serialize};
use crate::common::{BoxColour, BvrBox};
use crate::detection_runners::nms::Nms;

/// One decoded object: rectangle, class and combined class/objectness score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BvrDetection {
    pub class_id: usize,
    pub bbox: BvrBox,
    pub label: String,
    pub confidence: f32,
    pub colour: BoxColour,
}

impl Nms for BvrDetection {
    fn iou(&self, other: &Self) -> f32 {
        self.bbox.iou(&other.bbox)
    }

    fn confidence(&self) -> f32 {
        self.confidence
    }
}

impl BvrDetection {
    pub fn new(class_id: usize, bbox: BvrBox, label: &str, confidence: f32, colour: BoxColour) -> Self {
        Self {
            class_id,
            bbox,
            label: label.to_string(),
            confidence,
            colour,
        }
    }

    /// Sets the bounding box's coordinates and dimensions using `(x, y, w, h)`.
    pub fn with_x1y1_wh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.bbox = BvrBox::default().with_x1y1_wh(x, y, w, h);
        self
    }

    /// Sets the bounding box's coordinates and dimensions using `(cx, cy, w, h)`.
    pub fn with_cxcy_wh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.bbox = BvrBox::default().with_cxcy_wh(cx, cy, w, h);
        self
    }

    pub fn with_confidence(mut self, conf: f32) -> Self {
        self.confidence = conf;
        self
    }

    pub fn x(&self) -> f32 {
        self.bbox.x1
    }

    pub fn y(&self) -> f32 {
        self.bbox.y1
    }

    pub fn width(&self) -> f32 {
        self.bbox.w
    }

    pub fn height(&self) -> f32 {
        self.bbox.h
    }
}

impl std::fmt::Display for BvrDetection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({:.0}%) at ({:.1}, {:.1}) {:.1}x{:.1}",
            self.label,
            self.confidence * 100.,
            self.bbox.x1,
            self.bbox.y1,
            self.bbox.w,
            self.bbox.h
        )
    }
}

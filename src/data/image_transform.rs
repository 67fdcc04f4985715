use serde::{Deserialize, Serialize};
use crate::common::{BvrBox, ParserConfig};

/// Maps boxes from model-input pixel space (`src`) onto the original image (`dst`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageTransformInfo {
    pub width_src: u32,
    pub height_src: u32,
    pub width_dst: u32,
    pub height_dst: u32,
    pub width_scale: f32,
    pub height_scale: f32,
}

impl ImageTransformInfo {
    pub fn new(model_width: u32, model_height: u32, image_width: u32, image_height: u32) -> Self {
        Self {
            width_src: model_width,
            height_src: model_height,
            width_dst: image_width,
            height_dst: image_height,
            width_scale: image_width as f32 / model_width.max(1) as f32,
            height_scale: image_height as f32 / model_height.max(1) as f32,
        }
    }

    /// Uses the model input resolution from `config`.
    pub fn from_config(config: &ParserConfig, image_width: u32, image_height: u32) -> Self {
        Self::new(config.model_width, config.model_height, image_width, image_height)
    }

    /// Clips the box to the model input and rescales it to image pixels.
    pub fn map_box(&self, bbox: &BvrBox) -> BvrBox {
        let (src_w, src_h) = (self.width_src as f32, self.height_src as f32);
        let x1 = bbox.left().clamp(0., src_w);
        let y1 = bbox.top().clamp(0., src_h);
        let x2 = bbox.right().clamp(0., src_w);
        let y2 = bbox.bottom().clamp(0., src_h);

        BvrBox::new(
            x1 * self.width_scale,
            y1 * self.height_scale,
            (x2 - x1).max(0.) * self.width_scale,
            (y2 - y1).max(0.) * self.height_scale,
        )
    }
}

//! Raw Tiny-YOLOv2 output grid.
//!
//! The model emits a `(channel, row, column)` tensor flattened in channel-major
//! order. Each cell carries `BOXES_PER_CELL` slots of
//! `[x, y, w, h, objectness, class logits...]` spread across the channel axis.

use ndarray::{ArrayView3, ArrayViewD};
use crate::common::{BOXES_PER_CELL, CLASS_COUNT};
use crate::error::ParseError;
use crate::Result;

pub const ROW_COUNT: usize = 13;
pub const COL_COUNT: usize = 13;
pub const BOX_INFO_FEATURE_COUNT: usize = 5;
pub const CHANNEL_COUNT: usize = BOXES_PER_CELL * (CLASS_COUNT + BOX_INFO_FEATURE_COUNT);
pub const CHANNEL_STRIDE: usize = ROW_COUNT * COL_COUNT;
pub const OUTPUT_LEN: usize = CHANNEL_COUNT * CHANNEL_STRIDE;

pub const CELL_WIDTH: f32 = 32.;
pub const CELL_HEIGHT: f32 = 32.;

/// Position of `(col, row, channel)` in the flat channel-major buffer.
pub const fn flat_index(col: usize, row: usize, channel: usize) -> usize {
    channel * CHANNEL_STRIDE + row * COL_COUNT + col
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelOutput {
    values: Vec<f32>,
}

impl ModelOutput {
    pub fn from_vec(values: Vec<f32>) -> Result<Self> {
        if values.len() != OUTPUT_LEN {
            return Err(ParseError::TensorLength { expected: OUTPUT_LEN, actual: values.len() });
        }
        Ok(Self { values })
    }

    pub fn from_slice(values: &[f32]) -> Result<Self> {
        if values.len() != OUTPUT_LEN {
            return Err(ParseError::TensorLength { expected: OUTPUT_LEN, actual: values.len() });
        }
        Ok(Self { values: values.to_vec() })
    }

    /// Accepts `[125, 13, 13]` or a single-image batch `[1, 125, 13, 13]` in any memory layout.
    pub fn from_array(array: ArrayViewD<f32>) -> Result<Self> {
        let shape = array.shape();
        let grid = [CHANNEL_COUNT, ROW_COUNT, COL_COUNT];
        let matches = shape == grid || (shape.len() == 4 && shape[0] == 1 && shape[1..] == grid);
        if !matches {
            return Err(ParseError::TensorShape { expected: grid.to_vec(), actual: shape.to_vec() });
        }
        // Logical iteration order is row-major regardless of strides.
        Ok(Self { values: array.iter().copied().collect() })
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn value(&self, col: usize, row: usize, channel: usize) -> f32 {
        self.values[flat_index(col, row, channel)]
    }

    pub fn view(&self) -> Result<ArrayView3<'_, f32>> {
        Ok(ArrayView3::from_shape((CHANNEL_COUNT, ROW_COUNT, COL_COUNT), self.values.as_slice())?)
    }
}

impl TryFrom<Vec<f32>> for ModelOutput {
    type Error = ParseError;

    fn try_from(values: Vec<f32>) -> Result<Self> {
        Self::from_vec(values)
    }
}

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel space, top-left origin.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BvrBox {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub w: f32,
    pub h: f32,
}

impl BvrBox {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::default().with_x1y1_wh(x, y, w, h)
    }

    /// Returns the width of the bounding box.
    pub fn width(&self) -> f32 {
        self.w
    }

    /// Returns the height of the bounding box.
    pub fn height(&self) -> f32 {
        self.h
    }

    pub fn left(&self) -> f32 {
        self.x1
    }

    pub fn top(&self) -> f32 {
        self.y1
    }

    pub fn right(&self) -> f32 {
        self.x1 + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y1 + self.h
    }

    /// Returns the center x-coordinate of the bounding box.
    pub fn cx(&self) -> f32 {
        self.x1 + self.w / 2.
    }

    /// Returns the center y-coordinate of the bounding box.
    pub fn cy(&self) -> f32 {
        self.y1 + self.h / 2.
    }

    /// Computes the area of the bounding box.
    pub fn area(&self) -> f32 {
        self.h * self.w
    }

    /// Computes the intersection area between this bounding box and another.
    pub fn intersect(&self, other: &BvrBox) -> f32 {
        let left = self.left().max(other.left());
        let right = self.right().min(other.right());
        let top = self.top().max(other.top());
        let bottom = self.bottom().min(other.bottom());
        (right - left).max(0.) * (bottom - top).max(0.)
    }

    /// Computes the union area between this bounding box and another.
    pub fn union(&self, other: &BvrBox) -> f32 {
        self.area() + other.area() - self.intersect(other)
    }

    /// Intersection over union. Degenerate boxes (non-positive area) never overlap anything.
    pub fn iou(&self, other: &BvrBox) -> f32 {
        if self.area() <= 0. || other.area() <= 0. {
            return 0.;
        }
        self.intersect(other) / self.union(other)
    }

    /// Rounds to integer pixels, clamping negative values to zero.
    pub fn as_xy_wh_u32(&self) -> (u32, u32, u32, u32) {
        (self.x1.max(0.).round() as u32,
         self.y1.max(0.).round() as u32,
         self.w.max(0.).round() as u32,
         self.h.max(0.).round() as u32)
    }

    /// Sets the bounding box's coordinates and dimensions using `(x, y, w, h)`.
    pub fn with_x1y1_wh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.x1 = x;
        self.y1 = y;
        self.w = w;
        self.h = h;

        self.x2 = x + w;
        self.y2 = y + h;
        self
    }

    /// Sets the bounding box's coordinates and dimensions using `(cx, cy, w, h)`.
    ///
    /// # Arguments
    ///
    /// * `cx` - The x-coordinate of the horizontal center.
    /// * `cy` - The y-coordinate of the vertical center.
    /// * `w` - The width of the bounding box.
    /// * `h` - The height of the bounding box.
    pub fn with_cxcy_wh(self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.with_x1y1_wh(cx - w / 2.0, cy - h / 2.0, w, h)
    }
}

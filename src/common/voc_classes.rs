//! Fixed Tiny-YOLOv2 (Pascal VOC) tables: class names, colours and anchor priors.

use crate::common::BoxColour;

pub const CLASS_COUNT: usize = 20;
pub const BOXES_PER_CELL: usize = 5;

/// Pascal VOC class names, indexed by class id.
pub const VOC_LABELS: [&str; CLASS_COUNT] = [
    "aeroplane", "bicycle", "bird", "boat", "bottle",
    "bus", "car", "cat", "chair", "cow",
    "diningtable", "dog", "horse", "motorbike", "person",
    "pottedplant", "sheep", "sofa", "train", "tvmonitor",
];

pub const CLASS_COLOURS: [BoxColour; CLASS_COUNT] = [
    BoxColour::Khaki,
    BoxColour::Fuchsia,
    BoxColour::Silver,
    BoxColour::RoyalBlue,
    BoxColour::Green,
    BoxColour::DarkOrange,
    BoxColour::Purple,
    BoxColour::Gold,
    BoxColour::Red,
    BoxColour::Aquamarine,
    BoxColour::Lime,
    BoxColour::AliceBlue,
    BoxColour::Sienna,
    BoxColour::Orchid,
    BoxColour::Tan,
    BoxColour::LightPink,
    BoxColour::Yellow,
    BoxColour::HotPink,
    BoxColour::OliveDrab,
    BoxColour::SandyBrown,
];

/// `(width, height)` priors in grid-cell units, one per box slot.
pub const ANCHORS: [(f32, f32); BOXES_PER_CELL] = [
    (1.08, 1.19),
    (3.42, 4.41),
    (6.63, 11.38),
    (9.42, 5.11),
    (16.62, 10.52),
];

pub fn label(class_id: usize) -> Option<&'static str> {
    VOC_LABELS.get(class_id).copied()
}

pub fn colour(class_id: usize) -> Option<BoxColour> {
    CLASS_COLOURS.get(class_id).copied()
}

extern crate bvr_yolo_parser;

use bvr_yolo_parser::common::{BvrDetection, ParserConfig, BOXES_PER_CELL};
use bvr_yolo_parser::data::{ImageTransformInfo, ModelOutput, COL_COUNT, ROW_COUNT};
use bvr_yolo_parser::detection_runners::{OutputParser, YoloParser};

mod tensors;

fn parser() -> YoloParser {
    bvr_yolo_parser::init_parser(&ParserConfig::default()).unwrap()
}

fn contains(haystack: &[BvrDetection], needle: &BvrDetection) -> bool {
    haystack.iter().any(|d| d == needle)
}

#[test]
fn higher_threshold_yields_subset() {
    let parser = parser();
    for seed in 0..8 {
        let output = tensors::random_output(seed, 4.);
        let thresholds = [0.05, 0.1, 0.2, 0.3, 0.5, 0.8];
        for pair in thresholds.windows(2) {
            let loose = parser.decode(&output, pair[0]).unwrap();
            let strict = parser.decode(&output, pair[1]).unwrap();
            assert!(strict.len() <= loose.len());
            assert!(strict.iter().all(|d| contains(&loose, d)), "seed {} thresholds {:?}", seed, pair);
            assert!(strict.iter().all(|d| d.confidence >= pair[1]));
        }
    }
}

#[test]
fn every_candidate_passes_and_limit_applies() {
    let mut values = tensors::filled(-10.);
    for row in 0..ROW_COUNT {
        for col in 0..COL_COUNT {
            for slot in 0..BOXES_PER_CELL {
                let objectness = 2. + (row * COL_COUNT + col) as f32 * 0.01 + slot as f32 * 0.001;
                tensors::plant(&mut values, col, row, slot, (row + col) % 20, [0., 0., 0., 0., objectness]);
            }
        }
    }
    let output = ModelOutput::from_vec(values).unwrap();
    let parser = parser();

    let candidates = parser.decode(&output, 0.3).unwrap();
    assert_eq!(candidates.len(), ROW_COUNT * COL_COUNT * BOXES_PER_CELL);

    let kept = parser.run(&output).unwrap().into_detections();
    assert_eq!(kept.len(), 5);
    assert!(kept.windows(2).all(|w| w[0].confidence >= w[1].confidence));
    // Bottom-right cell carries the largest objectness.
    assert_eq!(kept[0].class_id, (12 + 12) % 20);
}

#[test]
fn run_parser_accepts_flat_buffer() {
    let mut values = tensors::filled(-10.);
    tensors::plant(&mut values, 2, 2, 0, 6, [0., 0., 0., 0., 8.]);
    tensors::plant(&mut values, 10, 10, 3, 12, [0., 0., 0., 0., 8.]);

    let detections = bvr_yolo_parser::run_parser(&parser(), &values).unwrap();
    let mut labels: Vec<&str> = detections.iter().map(|d| d.label.as_str()).collect();
    labels.sort();
    assert_eq!(labels, ["car", "horse"]);
}

#[test]
fn run_parser_rejects_short_buffer() {
    let err = bvr_yolo_parser::run_parser(&parser(), &[0.; 845]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("845") && msg.contains("21125"), "{}", msg);
}

#[test]
fn detections_map_to_image_and_serialize() {
    let mut values = tensors::filled(-10.);
    tensors::plant(&mut values, 6, 6, 0, 14, [0., 0., 0., 0., 8.]);
    let output = ModelOutput::from_vec(values).unwrap();

    let parser = parser();
    let transform = parser.image_transform(832, 832);
    assert_eq!(transform, ImageTransformInfo::new(416, 416, 832, 832));
    let y = parser.run(&output).unwrap().with_name("person.jpg").map_to_image(&transform);
    assert_eq!(y.len(), 1);

    let det = &y.detections()[0];
    assert!((det.bbox.cx() - 6.5 * 32. * 2.).abs() < 1e-2);
    assert!((det.bbox.cy() - 6.5 * 32. * 2.).abs() < 1e-2);

    let json: serde_json::Value = serde_json::from_str(&y.to_json().unwrap()).unwrap();
    assert_eq!(json["name"], "person.jpg");
    assert_eq!(json["detections"][0]["label"], "person");
    assert_eq!(json["detections"][0]["colour"], "Tan");
}

#[test]
fn parallel_batch_matches_sequential() {
    let parser = parser();
    let outputs: Vec<ModelOutput> = (0..6).map(|seed| tensors::random_output(100 + seed, 5.)).collect();
    let batch = parser.parse_batch(&outputs).unwrap();
    for (output, y) in outputs.iter().zip(batch.iter()) {
        assert_eq!(&parser.run(output).unwrap(), y);
    }
}

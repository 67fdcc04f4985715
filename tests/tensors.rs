use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use bvr_yolo_parser::data::{flat_index, ModelOutput, OUTPUT_LEN};

#[allow(dead_code)]
pub(crate) fn filled(value: f32) -> Vec<f32> {
    vec![value; OUTPUT_LEN]
}

/// Writes raw `[tx, ty, tw, th, to]` for one slot and a dominant logit for `class_id`.
#[allow(dead_code)]
pub(crate) fn plant(values: &mut [f32], col: usize, row: usize, slot: usize, class_id: usize, raw: [f32; 5]) {
    let channel = slot * 25;
    for (k, v) in raw.iter().enumerate() {
        values[flat_index(col, row, channel + k)] = *v;
    }
    values[flat_index(col, row, channel + 5 + class_id)] = 10.;
}

#[allow(dead_code)]
pub(crate) fn random_output(seed: u64, spread: f32) -> ModelOutput {
    let mut rng = StdRng::seed_from_u64(seed);
    let values = (0..OUTPUT_LEN).map(|_| rng.gen_range(-spread..spread)).collect();
    ModelOutput::from_vec(values).unwrap()
}

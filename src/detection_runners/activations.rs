/// Logistic function, `e^v / (1 + e^v)`, evaluated so that neither branch overflows.
pub fn sigmoid(value: f32) -> f32 {
    if value >= 0. {
        1. / (1. + (-value).exp())
    } else {
        let k = value.exp();
        k / (1. + k)
    }
}

/// Softmax with max subtraction. Accumulates in f64.
pub fn softmax(values: &[f32]) -> Vec<f32> {
    let max = match values.iter().copied().reduce(f32::max) {
        Some(max) => max as f64,
        None => return Vec::new(),
    };
    let exp: Vec<f64> = values.iter().map(|&v| (v as f64 - max).exp()).collect();
    let sum: f64 = exp.iter().sum();
    exp.into_iter().map(|v| (v / sum) as f32).collect()
}

/// Index and value of the largest entry; the first one wins ties.
pub fn top_class(probs: &[f32]) -> Option<(usize, f32)> {
    probs
        .iter()
        .copied()
        .enumerate()
        .fold(None, |best, (i, p)| match best {
            Some((_, best_p)) if p <= best_p => best,
            _ => Some((i, p)),
        })
}

pub trait Nms {
    fn iou(&self, other: &Self) -> f32;
    fn confidence(&self) -> f32;
}

/// Greedy non-max suppression.
///
/// Boxes are ranked by descending confidence (stable, so equal scores keep their
/// input order). Each surviving box is kept and deactivates every later box
/// whose IoU with it exceeds `overlap_threshold`. Stops as soon as
/// `max_results` boxes have been kept.
pub fn non_max_suppression<T: Nms>(mut boxes: Vec<T>, max_results: usize, overlap_threshold: f32) -> Vec<T> {
    if max_results == 0 || boxes.is_empty() {
        return Vec::new();
    }

    boxes.sort_by(|b1, b2| b2.confidence().total_cmp(&b1.confidence()));

    let mut active = vec![true; boxes.len()];
    let mut keep = Vec::with_capacity(max_results.min(boxes.len()));

    for i in 0..boxes.len() {
        if !active[i] {
            continue;
        }
        keep.push(i);
        if keep.len() >= max_results {
            break;
        }
        for j in (i + 1)..boxes.len() {
            if active[j] && boxes[i].iou(&boxes[j]) > overlap_threshold {
                active[j] = false;
            }
        }
    }

    let mut keep = keep.into_iter().peekable();
    boxes
        .into_iter()
        .enumerate()
        .filter_map(|(idx, b)| match keep.peek() {
            Some(&k) if k == idx => {
                keep.next();
                Some(b)
            }
            _ => None,
        })
        .collect()
}

use std::time::{Duration, Instant};

/// Logs the time spent since `prev` and the running total since `start`. Returns the new running total.
pub(crate) fn trace(l_type: &str, l_step: &str, start: Instant, prev: Duration) -> Duration {
    let now = start.elapsed();
    log::trace!("{} | Total={:.2?} | {}={:.2?}", l_type, now, l_step, now.saturating_sub(prev));
    now
}

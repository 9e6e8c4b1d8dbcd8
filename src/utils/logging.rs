use log::{log_enabled, warn, Level};
use std::time::{Duration, Instant};

/// Traces the start and end of a labelled simulator section together with the
/// number of bodies it ran over.
pub struct ScopedTimer<'a> {
    label: &'a str,
    bodies: usize,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str, bodies: usize) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("{label}: start over {bodies} bodies");
        }
        Self {
            label,
            bodies,
            start: Instant::now(),
        }
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            log::trace!(
                "{}: {} bodies in {} µs",
                self.label,
                self.bodies,
                self.start.elapsed().as_micros()
            );
        }
    }
}

/// Warns when one `step` overran its budget. Returns whether it did.
pub fn warn_if_step_budget_exceeded(elapsed: Duration, budget_ms: f32, bodies: usize) -> bool {
    let elapsed_ms = elapsed.as_micros() as f32 / 1000.0;
    if elapsed_ms <= budget_ms {
        return false;
    }
    warn!("step over {bodies} bodies took {elapsed_ms:.2} ms, budget is {budget_ms:.2} ms");
    true
}

use std::time::{Duration, Instant};

/// Timing and workload of the most recent `Simulator::step`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StepProfile {
    pub collision_time: Duration,
    pub integration_time: Duration,
    pub total_time: Duration,

    pub substeps: u32,
    pub body_count: usize,
    /// Contacts resolved across all substeps.
    pub contact_count: usize,
}

impl StepProfile {
    /// Mean contacts per substep.
    pub fn contacts_per_substep(&self) -> f32 {
        if self.substeps == 0 {
            return 0.0;
        }
        self.contact_count as f32 / self.substeps as f32
    }

    pub fn report(&self) {
        let total_us = self.total_time.as_micros() as f32;
        if total_us < 1.0 {
            return;
        }

        log::info!(
            "step: {} bodies, {} contacts over {} substeps, {:.2} ms total \
             (collision {:.1}%, integration {:.1}%)",
            self.body_count,
            self.contact_count,
            self.substeps,
            self.total_time.as_secs_f32() * 1000.0,
            (self.collision_time.as_micros() as f32 / total_us) * 100.0,
            (self.integration_time.as_micros() as f32 / total_us) * 100.0,
        );
    }
}

/// Adds the lifetime of the guard to `output`.
pub struct SectionTimer<'a> {
    start: Instant,
    output: &'a mut Duration,
}

impl<'a> SectionTimer<'a> {
    pub fn new(output: &'a mut Duration) -> Self {
        Self {
            start: Instant::now(),
            output,
        }
    }
}

impl<'a> Drop for SectionTimer<'a> {
    fn drop(&mut self) {
        *self.output += self.start.elapsed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_timer_accumulates() {
        let mut total = Duration::ZERO;
        {
            let _timer = SectionTimer::new(&mut total);
        }
        let first = total;
        {
            let _timer = SectionTimer::new(&mut total);
        }
        assert!(total >= first);
    }

    #[test]
    fn contacts_per_substep_handles_empty_profile() {
        let mut profile = StepProfile::default();
        assert_eq!(profile.contacts_per_substep(), 0.0);
        profile.substeps = 8;
        profile.contact_count = 12;
        assert_eq!(profile.contacts_per_substep(), 1.5);
    }
}

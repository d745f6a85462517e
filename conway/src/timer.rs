// timer.rs - Scoped section timing, logged at trace level

use std::time::Instant;

/// Logs how long a named section took when dropped.
pub struct TickTimer {
    label: &'static str,
    start: Option<Instant>,
}

impl TickTimer {
    pub fn new(label: &'static str) -> Self {
        let start = log::log_enabled!(log::Level::Trace).then(Instant::now);
        Self { label, start }
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        if let Some(start) = self.start {
            log::trace!("{}: {:?}", self.label, start.elapsed());
        }
    }
}

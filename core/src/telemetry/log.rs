use log::{info, warn};

/// Thin wrapper over the `log` facade for station events.
pub struct EventLog;

impl EventLog {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!("{}", message);
    }

    pub fn alert(&self, message: &str) {
        warn!("{}", message);
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}

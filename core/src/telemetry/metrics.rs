use std::sync::Mutex;

use serde::Serialize;

/// Counters accumulated across a station run.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MetricsSnapshot {
    pub motion_ticks: usize,
    pub spawned: usize,
    pub retired: usize,
    pub sweeps_completed: usize,
}

pub struct MetricsRecorder {
    inner: Mutex<MetricsSnapshot>,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsSnapshot::default()),
        }
    }

    pub fn record_motion_tick(&self, spawned: usize, retired: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.motion_ticks += 1;
            metrics.spawned += spawned;
            metrics.retired += retired;
        }
    }

    pub fn record_spawned(&self, count: usize) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.spawned += count;
        }
    }

    pub fn record_sweep(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.sweeps_completed += 1;
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.inner.lock().map(|m| *m).unwrap_or_default()
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_accumulate_across_ticks() {
        let recorder = MetricsRecorder::new();
        recorder.record_motion_tick(1, 0);
        recorder.record_motion_tick(0, 2);
        recorder.record_spawned(3);
        recorder.record_sweep();

        let snapshot = recorder.snapshot();
        assert_eq!(snapshot.motion_ticks, 2);
        assert_eq!(snapshot.spawned, 4);
        assert_eq!(snapshot.retired, 2);
        assert_eq!(snapshot.sweeps_completed, 1);
    }
}

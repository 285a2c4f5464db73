use chcore::math::TraceStats;
use chcore::station::StationSnapshot;
use serde::{Deserialize, Serialize};

/// One published frame of scope state, with stats derived for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScopeFrame {
    pub powered: bool,
    pub trace_ready: bool,
    pub sweep_progress: f32,
    pub goniometer_deg: f32,
    pub contact_count: usize,
    pub trace: Vec<f32>,
    pub trace_rms: f32,
    pub peak_deflection: f32,
}

impl ScopeFrame {
    /// Builds a frame from a station snapshot and the trace to show,
    /// which may be the live mid-sweep render rather than the archived one.
    pub fn from_snapshot(snapshot: &StationSnapshot, live_trace: &[f32]) -> Self {
        Self {
            powered: snapshot.powered,
            trace_ready: snapshot.trace_ready,
            sweep_progress: snapshot.sweep_progress,
            goniometer_deg: snapshot.goniometer_deg,
            contact_count: snapshot.contacts.len(),
            trace: live_trace.to_vec(),
            trace_rms: TraceStats::rms(live_trace),
            peak_deflection: TraceStats::peak(live_trace),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_derives_stats_from_the_live_trace() {
        let snapshot = StationSnapshot {
            powered: true,
            goniometer_deg: 150.0,
            ..StationSnapshot::default()
        };
        let frame = ScopeFrame::from_snapshot(&snapshot, &[3.0, 4.0]);
        assert!(frame.powered);
        assert_eq!(frame.goniometer_deg, 150.0);
        assert_eq!(frame.contact_count, 0);
        assert_eq!(frame.peak_deflection, 4.0);
        assert!((frame.trace_rms - 3.5355339).abs() < 1e-4);
    }
}

use chcore::math::TraceStats;

use crate::display::model::ScopeFrame;

const GLYPHS: [char; 5] = [' ', '.', ':', '|', '#'];

/// Console stand-in for the plotting display: renders each frame as one
/// coarse ASCII A-scope strip.
pub struct ConsolePresenter {
    columns: usize,
}

impl ConsolePresenter {
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(16),
        }
    }

    pub fn publish(&self, frame: &ScopeFrame) {
        println!(
            "[SCOPE] {:>5.1}° |{}| peak {:>5.1} rms {:>5.1} | {} contacts",
            frame.goniometer_deg,
            self.scope_line(&frame.trace),
            frame.peak_deflection,
            frame.trace_rms,
            frame.contact_count
        );
    }

    pub fn publish_status(&self, message: &str) {
        println!("[SCOPE] {}", message);
    }

    /// Downsamples the trace into a fixed-width glyph strip, one glyph per
    /// column, scaled to the frame's own peak.
    fn scope_line(&self, samples: &[f32]) -> String {
        if samples.is_empty() {
            return " ".repeat(self.columns);
        }
        let peak = TraceStats::peak(samples).max(1.0);
        (0..self.columns)
            .map(|col| {
                let start = col * samples.len() / self.columns;
                let end = (((col + 1) * samples.len() / self.columns).max(start + 1))
                    .min(samples.len());
                let bucket_peak = TraceStats::peak(&samples[start..end]);
                let level = (bucket_peak / peak * (GLYPHS.len() - 1) as f32).round() as usize;
                GLYPHS[level.min(GLYPHS.len() - 1)]
            })
            .collect()
    }
}

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::contact::Contact;
use crate::prelude::{SweepConfig, TraceConfig};
use crate::simulation::signal::SignalModel;

/// Phase of the scan cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepState {
    /// Station unpowered, nothing scanning.
    Idle,
    /// Beam position advancing across the sweep axis.
    Sweeping,
    /// A finalized trace is up on the scope.
    TraceReady,
}

/// Outcome of one sweep tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepEvent {
    None,
    /// Progress reached the sweep width; the trace wants finalizing.
    Completed,
    /// The hold expired and a new cycle started.
    Restarted,
}

/// One A-scope trace: deflection samples ordered along the range axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub samples: Vec<f32>,
}

/// Time-driven scan cycle: `Idle -> Sweeping -> TraceReady -> Sweeping`.
///
/// Progress is monotone within a cycle and only returns to zero on a
/// cycle restart or a reset.
#[derive(Debug, Clone)]
pub struct SweepCycle {
    config: SweepConfig,
    state: SweepState,
    progress: f32,
    hold_elapsed: f32,
    trace: Option<Trace>,
    history: VecDeque<Trace>,
}

impl SweepCycle {
    pub fn new(config: SweepConfig) -> Self {
        Self {
            config,
            state: SweepState::Idle,
            progress: 0.0,
            hold_elapsed: 0.0,
            trace: None,
            history: VecDeque::new(),
        }
    }

    pub fn state(&self) -> SweepState {
        self.state
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// Archived traces, oldest first.
    pub fn history(&self) -> impl Iterator<Item = &Trace> {
        self.history.iter()
    }

    /// Starts a cycle from zero progress.
    pub fn begin(&mut self) {
        self.state = SweepState::Sweeping;
        self.progress = 0.0;
        self.hold_elapsed = 0.0;
    }

    /// Drops all cycle state. Used on power-off.
    pub fn reset(&mut self) {
        self.state = SweepState::Idle;
        self.progress = 0.0;
        self.hold_elapsed = 0.0;
        self.trace = None;
        self.history.clear();
    }

    /// Advances the cycle by `dt` seconds of wall-clock time.
    pub fn tick(&mut self, dt: f32) -> SweepEvent {
        match self.state {
            SweepState::Idle => SweepEvent::None,
            SweepState::Sweeping => {
                let rate = self.config.width / self.config.duration_s;
                self.progress = (self.progress + rate * dt).min(self.config.width);
                if self.progress >= self.config.width {
                    self.state = SweepState::TraceReady;
                    self.hold_elapsed = 0.0;
                    SweepEvent::Completed
                } else {
                    SweepEvent::None
                }
            }
            SweepState::TraceReady => {
                if !self.config.auto_repeat {
                    return SweepEvent::None;
                }
                self.hold_elapsed += dt;
                if self.hold_elapsed >= self.config.hold_s {
                    self.begin();
                    SweepEvent::Restarted
                } else {
                    SweepEvent::None
                }
            }
        }
    }

    /// Stores the finalized trace, archiving the previous one when history
    /// is enabled. History stays within its cap, oldest evicted first.
    pub fn finalize(&mut self, trace: Trace) {
        if self.config.history_enabled {
            if let Some(previous) = self.trace.take() {
                self.history.push_back(previous);
                while self.history.len() > self.config.history_cap {
                    self.history.pop_front();
                }
            }
        }
        self.trace = Some(trace);
    }
}

/// Samples the visible portion of the trace up to `progress`.
///
/// Read-only over the contact set; repeated calls with unchanged state
/// differ only in the grass noise drawn from `rng`. Each sample takes the
/// peak pulse-shaped return among contacts inside the beam window and
/// saturates the deflection at the scope bound.
pub fn sample_trace(
    contacts: &[Contact],
    model: &SignalModel,
    goniometer_deg: f32,
    progress: f32,
    sweep: &SweepConfig,
    trace_cfg: &TraceConfig,
    rng: &mut impl Rng,
) -> Trace {
    let base_range = model.tuning().base_range;
    let mut samples = Vec::with_capacity((progress / trace_cfg.sample_step) as usize + 1);

    let mut x = 0.0f32;
    while x <= progress {
        let range_at_x = x / sweep.width * base_range;

        let mut peak = 0.0f32;
        for contact in contacts {
            let offset = (contact.range() - range_at_x).abs();
            if offset <= trace_cfg.beam_width {
                let pulse = 1.0 - offset / trace_cfg.beam_width;
                peak = peak.max(model.strength(contact, goniometer_deg) * pulse);
            }
        }

        let grass = if trace_cfg.grass > 0.0 {
            rng.gen_range(0.0..trace_cfg.grass)
        } else {
            0.0
        };
        let deflection = (peak * trace_cfg.deflection_scale + grass).min(trace_cfg.max_deflection);
        samples.push(deflection);

        x += trace_cfg.sample_step;
    }

    Trace { samples }
}

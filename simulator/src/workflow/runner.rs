use anyhow::Context;
use chcore::math::TraceStats;
use chcore::prelude::SectorConfig;
use chcore::station::{RadarStation, StationSnapshot};
use log::debug;

use crate::workflow::config::RunConfig;

/// Outcome of a scripted offline run.
pub struct RunSummary {
    pub sweeps_completed: usize,
    pub spawned: usize,
    pub retired: usize,
    pub peak_deflection: f32,
    pub trace_rms: f32,
    pub final_snapshot: StationSnapshot,
}

/// Sawtooth pan of the goniometer across the scan sector, reversing at
/// the sector edges. Inactive at rate 0.
pub struct GoniometerPan {
    rate_deg_s: f32,
    direction: f32,
}

impl GoniometerPan {
    pub fn new(rate_deg_s: f32) -> Self {
        Self {
            rate_deg_s,
            direction: 1.0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.rate_deg_s != 0.0
    }

    /// Next goniometer setting after `dt` seconds.
    pub fn step(&mut self, current_deg: f32, dt: f32, sector: &SectorConfig) -> f32 {
        if !self.is_active() {
            return current_deg;
        }
        let mut next = current_deg + self.direction * self.rate_deg_s * dt;
        if next >= sector.max_deg() {
            next = sector.max_deg();
            self.direction = -1.0;
        } else if next <= sector.min_deg() {
            next = sector.min_deg();
            self.direction = 1.0;
        }
        next
    }
}

/// Drives a station through a run entirely in simulated time.
#[derive(Clone)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Powers a station on, interleaves motion and sweep ticks for the
    /// configured duration, and returns the collected summary.
    pub fn execute(&self) -> anyhow::Result<RunSummary> {
        let cfg = &self.config;
        let mut station =
            RadarStation::new(cfg.station.clone(), cfg.seed).context("building station")?;

        station.power_on();
        station.set_goniometer(cfg.goniometer_deg);

        let motion_dt = cfg.motion_tick_ms as f32 / 1_000.0;
        let sweep_dt = cfg.sweep_tick_ms as f32 / 1_000.0;
        let steps = (cfg.duration_s / sweep_dt).ceil() as usize;

        let mut pan = GoniometerPan::new(cfg.pan_rate_deg_s);
        let mut since_motion = 0.0f32;

        for _ in 0..steps {
            since_motion += sweep_dt;
            while since_motion >= motion_dt {
                station.motion_tick(motion_dt);
                since_motion -= motion_dt;
            }
            if pan.is_active() {
                let next = pan.step(station.goniometer_deg(), sweep_dt, &cfg.station.sector);
                station.set_goniometer(next);
            }
            station.sweep_tick(sweep_dt);
        }

        let trace = station.render_trace();
        let metrics = station.metrics();
        let final_snapshot = station.snapshot();
        debug!(
            "run finished with {} live contacts after {} motion ticks",
            final_snapshot.contacts.len(),
            metrics.motion_ticks
        );

        Ok(RunSummary {
            sweeps_completed: metrics.sweeps_completed,
            spawned: metrics.spawned,
            retired: metrics.retired,
            peak_deflection: TraceStats::peak(&trace.samples),
            trace_rms: TraceStats::rms(&trace.samples),
            final_snapshot,
        })
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::contact::{AircraftClass, Contact, ContactId, CLASS_TABLE};
use crate::prelude::{SimResult, StationConfig};
use crate::simulation::{
    sample_trace, MotionIntegrator, SignalModel, SweepCycle, SweepEvent, SweepState,
    TargetGenerator, Trace,
};
use crate::telemetry::{EventLog, MetricsRecorder, MetricsSnapshot};

/// Row of the contact table shown beside the scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactReport {
    pub id: ContactId,
    pub range: f32,
    pub bearing_deg: f32,
    pub heading_deg: f32,
    pub speed: f32,
    pub altitude_ft: f32,
    pub class: AircraftClass,
    pub formation: u32,
}

/// Read model published to presentation consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationSnapshot {
    pub powered: bool,
    pub trace_ready: bool,
    pub sweep_progress: f32,
    pub goniometer_deg: f32,
    pub contacts: Vec<ContactReport>,
    pub trace: Vec<f32>,
    pub trace_history: Vec<Vec<f32>>,
}

/// The station controller.
///
/// Owns every piece of mutable simulation state (contacts, scan cycle,
/// goniometer, power) and advances it only through the explicit tick
/// operations, so a driver can bind them to real timers while tests drive
/// simulated time directly. Trace noise comes from a second RNG so that
/// rendering never perturbs the simulation stream.
pub struct RadarStation {
    config: StationConfig,
    signal: SignalModel,
    generator: TargetGenerator,
    motion: MotionIntegrator,
    sweep: SweepCycle,
    contacts: Vec<Contact>,
    goniometer_deg: f32,
    powered: bool,
    rng: StdRng,
    noise_rng: StdRng,
    log: EventLog,
    metrics: MetricsRecorder,
}

impl RadarStation {
    pub fn new(config: StationConfig, seed: u64) -> SimResult<Self> {
        config.validate()?;
        let generator =
            TargetGenerator::new(CLASS_TABLE.to_vec(), config.traffic.escort_probability)?;
        let motion = MotionIntegrator::new(
            &config.traffic,
            config.sector.clone(),
            config.tuning.base_range,
        );
        let signal = SignalModel::new(config.tuning.clone());
        let sweep = SweepCycle::new(config.sweep.clone());
        let goniometer_deg = config.sector.center_deg;

        Ok(Self {
            config,
            signal,
            generator,
            motion,
            sweep,
            contacts: Vec::new(),
            goniometer_deg,
            powered: false,
            rng: StdRng::seed_from_u64(seed),
            noise_rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
            log: EventLog::new(),
            metrics: MetricsRecorder::new(),
        })
    }

    pub fn config(&self) -> &StationConfig {
        &self.config
    }

    pub fn powered(&self) -> bool {
        self.powered
    }

    pub fn goniometer_deg(&self) -> f32 {
        self.goniometer_deg
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn sweep_state(&self) -> SweepState {
        self.sweep.state()
    }

    pub fn sweep_progress(&self) -> f32 {
        self.sweep.progress()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Powers the station up and raises the opening raid.
    pub fn power_on(&mut self) {
        if self.powered {
            return;
        }
        self.powered = true;
        let initial = self
            .rng
            .gen_range(1..=self.config.traffic.max_initial_contacts);
        for _ in 0..initial {
            let contact = self.motion.spawn_inbound(&mut self.generator, &mut self.rng);
            self.contacts.push(contact);
        }
        self.metrics.record_spawned(initial);
        self.sweep.begin();
        self.log
            .record(&format!("power on, {} contacts raised", initial));
    }

    /// Powers the station down, clearing contacts and cycle state.
    ///
    /// Ticks on an unpowered station are no-ops, so nothing mutates state
    /// after this returns.
    pub fn power_off(&mut self) {
        if !self.powered {
            return;
        }
        self.powered = false;
        self.contacts.clear();
        self.sweep.reset();
        self.log.record("power off, station cleared");
    }

    /// Applies a goniometer setting, clamped into the scan sector.
    pub fn set_goniometer(&mut self, deg: f32) {
        let wanted = if deg.is_finite() {
            deg
        } else {
            self.config.sector.center_deg
        };
        self.goniometer_deg = self.config.sector.clamp_deg(wanted);
    }

    /// Advances target kinematics by `dt` seconds of simulated time.
    pub fn motion_tick(&mut self, dt: f32) {
        if !self.powered {
            return;
        }
        let report = self
            .motion
            .advance(&mut self.contacts, dt, &mut self.generator, &mut self.rng);
        self.metrics.record_motion_tick(report.spawned, report.retired);
        if report.retired > 0 {
            self.log
                .record(&format!("{} contact(s) passed overhead", report.retired));
        }
        if self.contacts.len() < self.config.traffic.population_floor {
            self.log.alert("plot below the population floor");
        }
    }

    /// Advances the scan cycle by `dt` seconds of wall-clock time.
    pub fn sweep_tick(&mut self, dt: f32) {
        if !self.powered {
            return;
        }
        match self.sweep.tick(dt) {
            SweepEvent::Completed => {
                let trace = self.sample_at(self.sweep.progress());
                self.sweep.finalize(trace);
                self.metrics.record_sweep();
                self.log.record("sweep complete, trace up");
            }
            SweepEvent::Restarted => self.log.record("new scan cycle"),
            SweepEvent::None => {}
        }
    }

    /// Renders the trace visible at the current sweep progress.
    ///
    /// Reads simulation state only; repeated calls with unchanged state
    /// differ solely in the grass noise.
    pub fn render_trace(&mut self) -> Trace {
        self.sample_at(self.sweep.progress())
    }

    fn sample_at(&mut self, progress: f32) -> Trace {
        sample_trace(
            &self.contacts,
            &self.signal,
            self.goniometer_deg,
            progress,
            &self.config.sweep,
            &self.config.trace,
            &mut self.noise_rng,
        )
    }

    pub fn snapshot(&self) -> StationSnapshot {
        StationSnapshot {
            powered: self.powered,
            trace_ready: self.sweep.state() == SweepState::TraceReady,
            sweep_progress: self.sweep.progress(),
            goniometer_deg: self.goniometer_deg,
            contacts: self
                .contacts
                .iter()
                .map(|c| ContactReport {
                    id: c.id,
                    range: c.range(),
                    bearing_deg: c.bearing_deg(),
                    heading_deg: c.heading_deg,
                    speed: c.speed,
                    altitude_ft: c.altitude_ft,
                    class: c.class,
                    formation: c.formation,
                })
                .collect(),
            trace: self
                .sweep
                .trace()
                .map(|t| t.samples.clone())
                .unwrap_or_default(),
            trace_history: self.sweep.history().map(|t| t.samples.clone()).collect(),
        }
    }
}

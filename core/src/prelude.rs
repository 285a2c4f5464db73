use serde::{Deserialize, Serialize};

use crate::contact::Mission;

/// Scan sector the aerials cover; also bounds the goniometer control.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectorConfig {
    pub center_deg: f32,
    pub half_width_deg: f32,
}

impl SectorConfig {
    pub fn min_deg(&self) -> f32 {
        self.center_deg - self.half_width_deg
    }

    pub fn max_deg(&self) -> f32 {
        self.center_deg + self.half_width_deg
    }

    pub fn clamp_deg(&self, deg: f32) -> f32 {
        deg.clamp(self.min_deg(), self.max_deg())
    }
}

impl Default for SectorConfig {
    fn default() -> Self {
        Self {
            center_deg: 160.0,
            half_width_deg: 50.0,
        }
    }
}

/// Contact population knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficConfig {
    /// Contacts closer than this are overhead and dropped from the plot.
    pub min_contact_range: f32,
    /// The live set is replenished whenever it falls below this floor.
    pub population_floor: usize,
    /// Upper bound on the raid size raised at power-on.
    pub max_initial_contacts: usize,
    /// Probability that a fresh contact flies an escort mission.
    pub escort_probability: f64,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            min_contact_range: 5.0,
            population_floor: 2,
            max_initial_contacts: 5,
            escort_probability: 0.3,
        }
    }
}

/// Tuning knobs for the directional signal-strength model.
///
/// The exponent and gains changed between receiver calibrations, so they
/// are configuration rather than constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalTuning {
    /// Maximum simulated range in range units.
    pub base_range: f32,
    /// Even exponent applied to the cosine lobe; higher narrows the beam.
    pub gain_exponent: u32,
    pub base_gain: f32,
    /// Per-aircraft formation bonus; 0 keeps returns flat across raid sizes.
    pub formation_gain: f32,
    /// Fraction of `base_range` visible for a contact at minimum altitude.
    pub detection_floor: f32,
    pub min_altitude_ft: f32,
    pub max_altitude_ft: f32,
}

impl Default for SignalTuning {
    fn default() -> Self {
        Self {
            base_range: 200.0,
            gain_exponent: 8,
            base_gain: 3.0,
            formation_gain: 0.1,
            detection_floor: 0.4,
            min_altitude_ft: 1_000.0,
            max_altitude_ft: 30_000.0,
        }
    }
}

/// Scan cycle timing and trace-history policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    /// Width of the sweep axis in scope units.
    pub width: f32,
    /// Wall-clock seconds for one full sweep.
    pub duration_s: f32,
    /// Seconds a finished trace stays up before the next cycle starts.
    pub hold_s: f32,
    /// Restart automatically after the hold; otherwise wait for power cycle.
    pub auto_repeat: bool,
    /// Archive finished traces for persistence overlays.
    pub history_enabled: bool,
    pub history_cap: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            width: 1_200.0,
            duration_s: 2.0,
            hold_s: 1.0,
            auto_repeat: true,
            history_enabled: false,
            history_cap: 3,
        }
    }
}

/// Discretization and shaping of the rendered trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Spacing between samples along the sweep axis.
    pub sample_step: f32,
    /// Half-width, in range units, of the pulse matching window.
    pub beam_width: f32,
    /// Deflection units per amplitude unit.
    pub deflection_scale: f32,
    /// Saturation bound for the vertical deflection.
    pub max_deflection: f32,
    /// Peak amplitude of the baseline noise floor.
    pub grass: f32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            sample_step: 4.0,
            beam_width: 2.0,
            deflection_scale: 40.0,
            max_deflection: 100.0,
            grass: 1.5,
        }
    }
}

/// Complete engine configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    pub sector: SectorConfig,
    pub traffic: TrafficConfig,
    pub tuning: SignalTuning,
    pub sweep: SweepConfig,
    pub trace: TraceConfig,
}

impl StationConfig {
    /// Rejects settings the engine cannot run with. Called once at station
    /// construction so later ticks never re-check.
    pub fn validate(&self) -> SimResult<()> {
        if self.tuning.gain_exponent == 0 || self.tuning.gain_exponent % 2 != 0 {
            return Err(SimError::InvalidTuning(format!(
                "gain exponent {} must be a positive even integer",
                self.tuning.gain_exponent
            )));
        }
        if !(self.tuning.base_range > 0.0) {
            return Err(SimError::InvalidTuning("base range must be positive".into()));
        }
        if self.tuning.max_altitude_ft <= self.tuning.min_altitude_ft {
            return Err(SimError::InvalidTuning(
                "altitude ceiling must exceed the floor".into(),
            ));
        }
        if !(self.sweep.width > 0.0) || !(self.sweep.duration_s > 0.0) {
            return Err(SimError::InvalidTuning(
                "sweep width and duration must be positive".into(),
            ));
        }
        if !(self.trace.sample_step > 0.0) || !(self.trace.beam_width > 0.0) {
            return Err(SimError::InvalidTuning(
                "trace step and beam width must be positive".into(),
            ));
        }
        if self.traffic.max_initial_contacts == 0 {
            return Err(SimError::InvalidTuning(
                "at least one initial contact is required".into(),
            ));
        }
        Ok(())
    }
}

/// Common error type for engine operations.
#[derive(thiserror::Error, Debug)]
pub enum SimError {
    #[error("no aircraft classes fly {0} missions")]
    EmptyClassTable(Mission),
    #[error("invalid tuning: {0}")]
    InvalidTuning(String),
}

pub type SimResult<T> = Result<T, SimError>;

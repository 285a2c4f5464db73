use anyhow::Context;
use chcore::prelude::StationConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Driver-level configuration for one station run.
///
/// Partial YAML files work; anything omitted falls back to the defaults,
/// including the whole embedded station section.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub seed: u64,
    /// Simulated seconds to drive in offline mode.
    pub duration_s: f32,
    /// Period of the motion integrator timer, milliseconds.
    pub motion_tick_ms: u64,
    /// Period of the sweep/render timer, milliseconds.
    pub sweep_tick_ms: u64,
    /// Initial goniometer bearing, degrees.
    pub goniometer_deg: f32,
    /// Degrees per second the goniometer pans across the sector; 0 holds it.
    pub pan_rate_deg_s: f32,
    pub station: StationConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            duration_s: 30.0,
            motion_tick_ms: 100,
            sweep_tick_ms: 50,
            goniometer_deg: 160.0,
            pan_rate_deg_s: 0.0,
            station: StationConfig::default(),
        }
    }
}

impl RunConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading run config {}", path_ref.display()))?;
        let config: RunConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing run config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(seed: u64, duration_s: f32, goniometer_deg: f32) -> Self {
        Self {
            seed,
            duration_s,
            goniometer_deg,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn config_from_args_keeps_timer_defaults() {
        let cfg = RunConfig::from_args(9, 12.0, 145.0);
        assert_eq!(cfg.seed, 9);
        assert_eq!(cfg.duration_s, 12.0);
        assert_eq!(cfg.goniometer_deg, 145.0);
        assert_eq!(cfg.motion_tick_ms, 100);
        assert_eq!(cfg.sweep_tick_ms, 50);
    }

    #[test]
    fn config_load_reads_partial_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"seed: 7\nduration_s: 5.0\npan_rate_deg_s: 20.0\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = RunConfig::load(&path).unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.duration_s, 5.0);
        assert_eq!(cfg.pan_rate_deg_s, 20.0);
        // Untouched sections keep engine defaults.
        assert_eq!(cfg.station.sweep.duration_s, 2.0);
    }

    #[test]
    fn config_load_reads_nested_station_overrides() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"station:\n  tuning:\n    gain_exponent: 4\n    base_gain: 2.0\n")
            .unwrap();
        let path = temp.into_temp_path();
        let cfg = RunConfig::load(&path).unwrap();
        assert_eq!(cfg.station.tuning.gain_exponent, 4);
        assert_eq!(cfg.station.tuning.base_gain, 2.0);
        assert_eq!(cfg.station.tuning.base_range, 200.0);
    }
}

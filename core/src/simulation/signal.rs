use crate::contact::Contact;
use crate::math::angles;
use crate::prelude::SignalTuning;

/// Directional receiver model.
///
/// Evaluated once per contact per trace sample, so the hot path is a pair
/// of trig calls and no allocation.
pub struct SignalModel {
    tuning: SignalTuning,
}

impl SignalModel {
    pub fn new(tuning: SignalTuning) -> Self {
        Self { tuning }
    }

    pub fn tuning(&self) -> &SignalTuning {
        &self.tuning
    }

    /// Maximum range at which a contact at `altitude_ft` returns an echo.
    ///
    /// Low flyers slip under the lobe and are caught late; a contact at the
    /// ceiling is seen across the full base range. Altitude is clamped into
    /// the station band first, so defective inputs interpolate instead of
    /// propagating.
    pub fn max_detection_range(&self, altitude_ft: f32) -> f32 {
        let t = &self.tuning;
        let altitude = if altitude_ft.is_finite() {
            altitude_ft.clamp(t.min_altitude_ft, t.max_altitude_ft)
        } else {
            t.min_altitude_ft
        };
        let fraction = (altitude - t.min_altitude_ft) / (t.max_altitude_ft - t.min_altitude_ft);
        t.base_range * (t.detection_floor + (1.0 - t.detection_floor) * fraction)
    }

    /// Return strength of `contact` with the goniometer at `goniometer_deg`.
    pub fn strength(&self, contact: &Contact, goniometer_deg: f32) -> f32 {
        let range = contact.range();
        if !range.is_finite() {
            return 0.0;
        }

        let separation = angles::arc_separation_deg(contact.bearing_deg(), goniometer_deg);
        let lobe = separation.to_radians().cos();
        if lobe <= 0.0 {
            // 90° or more off the goniometer bearing: dead side of the lobe.
            // Clamping here keeps the even exponent from resurrecting it.
            return 0.0;
        }
        let gain = lobe.powi(self.tuning.gain_exponent as i32);

        let attenuation = (1.0 - range / self.max_detection_range(contact.altitude_ft)).max(0.0);

        let formation_factor =
            1.0 + self.tuning.formation_gain * contact.formation.saturating_sub(1) as f32;

        gain * attenuation * self.tuning.base_gain * formation_factor
    }
}

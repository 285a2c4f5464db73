use serde::{Deserialize, Serialize};
use std::fmt;

use crate::contact::class::AircraftClass;
use crate::math::angles;

/// Identifier unique among contacts spawned by one generator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct ContactId(pub u64);

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

/// A tracked aircraft formation with ground-truth kinematic state.
///
/// Position is the Cartesian offset from the station in range units
/// (x east, y north); range and bearing are derived on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub x: f32,
    pub y: f32,
    /// Fixed heading flown for the contact's lifetime, degrees.
    pub heading_deg: f32,
    /// Ground speed in range units per second.
    pub speed: f32,
    pub altitude_ft: f32,
    pub class: AircraftClass,
    /// Number of aircraft represented by this single plot.
    pub formation: u32,
}

impl Contact {
    /// Distance to the station; never negative.
    pub fn range(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Compass bearing from the station, degrees in `[0, 360)`.
    pub fn bearing_deg(&self) -> f32 {
        angles::bearing_deg(self.x, self.y)
    }

    /// Advance along the fixed heading by `distance` range units.
    pub fn advance(&mut self, distance: f32) {
        let (dx, dy) = angles::polar_offset(distance, self.heading_deg);
        self.x += dx;
        self.y += dy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact_at(x: f32, y: f32, heading_deg: f32) -> Contact {
        Contact {
            id: ContactId(0),
            x,
            y,
            heading_deg,
            speed: 1.0,
            altitude_ft: 15_000.0,
            class: AircraftClass::He111,
            formation: 4,
        }
    }

    #[test]
    fn range_and_bearing_follow_the_offset() {
        let contact = contact_at(0.0, -40.0, 0.0);
        assert!((contact.range() - 40.0).abs() < 1e-4);
        assert!((contact.bearing_deg() - 180.0).abs() < 1e-3);
    }

    #[test]
    fn inbound_advance_reduces_range() {
        let (x, y) = crate::math::angles::polar_offset(50.0, 160.0);
        let mut contact = contact_at(x, y, crate::math::angles::reciprocal_deg(160.0));
        let before = contact.range();
        contact.advance(2.0);
        assert!((contact.range() - (before - 2.0)).abs() < 1e-3);
        // Bearing is unchanged while flying the reciprocal heading.
        assert!((contact.bearing_deg() - 160.0).abs() < 1e-2);
    }

    #[test]
    fn id_displays_with_prefix() {
        assert_eq!(ContactId(7).to_string(), "C7");
    }
}

//! Compass-angle arithmetic shared by the motion and signal models.
//!
//! Bearings are degrees, 0° = north, increasing clockwise.

/// Wraps an angle in degrees into `[0, 360)`.
pub fn wrap_deg(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

/// Shortest-arc separation between two bearings, in `[0, 180]`.
pub fn arc_separation_deg(a_deg: f32, b_deg: f32) -> f32 {
    let diff = wrap_deg(a_deg - b_deg);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Compass bearing of a Cartesian offset (x east, y north).
pub fn bearing_deg(x: f32, y: f32) -> f32 {
    wrap_deg(x.atan2(y).to_degrees())
}

/// Cartesian offset of a point at `range` along a compass bearing.
pub fn polar_offset(range: f32, bearing_deg: f32) -> (f32, f32) {
    let rad = bearing_deg.to_radians();
    (range * rad.sin(), range * rad.cos())
}

/// Reciprocal of a compass bearing.
pub fn reciprocal_deg(deg: f32) -> f32 {
    wrap_deg(deg + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_normalizes_negative_angles() {
        assert_eq!(wrap_deg(-90.0), 270.0);
        assert_eq!(wrap_deg(360.0), 0.0);
        assert_eq!(wrap_deg(725.0), 5.0);
    }

    #[test]
    fn separation_takes_the_shorter_arc() {
        assert_eq!(arc_separation_deg(10.0, 350.0), 20.0);
        assert_eq!(arc_separation_deg(350.0, 10.0), 20.0);
        assert_eq!(arc_separation_deg(0.0, 180.0), 180.0);
        assert_eq!(arc_separation_deg(160.0, 160.0), 0.0);
    }

    #[test]
    fn bearing_follows_compass_convention() {
        assert!((bearing_deg(0.0, 1.0) - 0.0).abs() < 1e-4);
        assert!((bearing_deg(1.0, 0.0) - 90.0).abs() < 1e-4);
        assert!((bearing_deg(0.0, -1.0) - 180.0).abs() < 1e-4);
        assert!((bearing_deg(-1.0, 0.0) - 270.0).abs() < 1e-4);
    }

    #[test]
    fn polar_offset_round_trips_through_bearing() {
        let (x, y) = polar_offset(50.0, 160.0);
        assert!((bearing_deg(x, y) - 160.0).abs() < 1e-3);
        assert!((x.hypot(y) - 50.0).abs() < 1e-3);
    }

    #[test]
    fn reciprocal_flips_the_bearing() {
        assert_eq!(reciprocal_deg(160.0), 340.0);
        assert_eq!(reciprocal_deg(340.0), 160.0);
    }
}

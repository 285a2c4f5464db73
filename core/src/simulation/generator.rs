use rand::Rng;

use crate::contact::{ClassSpec, Contact, ContactId, Mission};
use crate::math::angles;
use crate::prelude::{SimError, SimResult};

/// Spawns contacts with mission-constrained attributes.
///
/// The class table is validated once at construction; after that every
/// spawn succeeds, so the tick path never handles generation errors.
#[derive(Debug)]
pub struct TargetGenerator {
    classes: Vec<ClassSpec>,
    escort_probability: f64,
    next_id: u64,
}

impl TargetGenerator {
    pub fn new(classes: Vec<ClassSpec>, escort_probability: f64) -> SimResult<Self> {
        if !(0.0..=1.0).contains(&escort_probability) {
            return Err(SimError::InvalidTuning(format!(
                "escort probability {} outside [0, 1]",
                escort_probability
            )));
        }
        for mission in [Mission::Escort, Mission::Bomber] {
            if !classes.iter().any(|spec| spec.mission == mission) {
                return Err(SimError::EmptyClassTable(mission));
            }
        }
        Ok(Self {
            classes,
            escort_probability,
            next_id: 0,
        })
    }

    /// Spawns a contact at the given polar position, flying radially inbound.
    pub fn spawn(&mut self, range: f32, bearing_deg: f32, rng: &mut impl Rng) -> Contact {
        let mission = if rng.gen_bool(self.escort_probability) {
            Mission::Escort
        } else {
            Mission::Bomber
        };
        let candidates: Vec<&ClassSpec> = self
            .classes
            .iter()
            .filter(|spec| spec.mission == mission)
            .collect();
        let spec = candidates[rng.gen_range(0..candidates.len())];

        let speed = rng.gen_range(spec.speed.0..=spec.speed.1);
        let altitude_ft = rng.gen_range(spec.altitude_ft.0..=spec.altitude_ft.1);
        let formation = match mission {
            Mission::Escort => rng.gen_range(1..=2),
            Mission::Bomber => rng.gen_range(3..=10),
        };

        let (x, y) = angles::polar_offset(range, bearing_deg);
        let id = ContactId(self.next_id);
        self.next_id += 1;

        Contact {
            id,
            x,
            y,
            heading_deg: angles::reciprocal_deg(bearing_deg),
            speed,
            altitude_ft,
            class: spec.class,
            formation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::CLASS_TABLE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn generator() -> TargetGenerator {
        TargetGenerator::new(CLASS_TABLE.to_vec(), 0.3).unwrap()
    }

    fn spec_for(class: crate::contact::AircraftClass) -> &'static ClassSpec {
        CLASS_TABLE.iter().find(|s| s.class == class).unwrap()
    }

    #[test]
    fn spawned_attributes_stay_inside_the_class_envelope() {
        let mut gen = generator();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let contact = gen.spawn(120.0, 160.0, &mut rng);
            let spec = spec_for(contact.class);
            assert!(contact.speed >= spec.speed.0 && contact.speed <= spec.speed.1);
            assert!(
                contact.altitude_ft >= spec.altitude_ft.0
                    && contact.altitude_ft <= spec.altitude_ft.1
            );
            match spec.mission {
                Mission::Escort => assert!((1..=2).contains(&contact.formation)),
                Mission::Bomber => assert!((3..=10).contains(&contact.formation)),
            }
        }
    }

    #[test]
    fn spawn_places_the_contact_on_the_requested_radial() {
        let mut gen = generator();
        let mut rng = StdRng::seed_from_u64(3);
        let contact = gen.spawn(80.0, 145.0, &mut rng);
        assert!((contact.range() - 80.0).abs() < 1e-3);
        assert!((contact.bearing_deg() - 145.0).abs() < 1e-2);
        assert!((contact.heading_deg - 325.0).abs() < 1e-3);
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut gen = generator();
        let mut rng = StdRng::seed_from_u64(0);
        let a = gen.spawn(50.0, 160.0, &mut rng);
        let b = gen.spawn(50.0, 160.0, &mut rng);
        assert!(b.id > a.id);
    }

    #[test]
    fn same_seed_reproduces_the_same_raid() {
        let mut gen_a = generator();
        let mut gen_b = generator();
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let a = gen_a.spawn(100.0, 170.0, &mut rng_a);
            let b = gen_b.spawn(100.0, 170.0, &mut rng_b);
            assert_eq!(a.class, b.class);
            assert_eq!(a.formation, b.formation);
            assert_eq!(a.speed, b.speed);
            assert_eq!(a.altitude_ft, b.altitude_ft);
        }
    }

    #[test]
    fn one_mission_table_fails_fast() {
        let bombers: Vec<ClassSpec> = CLASS_TABLE
            .iter()
            .filter(|s| s.mission == Mission::Bomber)
            .cloned()
            .collect();
        let err = TargetGenerator::new(bombers, 0.3).unwrap_err();
        assert!(matches!(err, SimError::EmptyClassTable(Mission::Escort)));
    }

    #[test]
    fn out_of_range_escort_probability_is_rejected() {
        assert!(TargetGenerator::new(CLASS_TABLE.to_vec(), 1.5).is_err());
    }
}

use rand::Rng;

use crate::contact::Contact;
use crate::prelude::{SectorConfig, TrafficConfig};
use crate::simulation::generator::TargetGenerator;

/// Per-tick kinematic update and population management.
///
/// Runs on the motion timer, once per tick of simulated time, and is the
/// sole replenishment path for the contact set.
pub struct MotionIntegrator {
    min_range: f32,
    population_floor: usize,
    spawn_range_max: f32,
    sector: SectorConfig,
}

/// Counts of contacts added and removed during one tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct MotionReport {
    pub retired: usize,
    pub spawned: usize,
}

impl MotionIntegrator {
    pub fn new(traffic: &TrafficConfig, sector: SectorConfig, spawn_range_max: f32) -> Self {
        Self {
            min_range: traffic.min_contact_range,
            population_floor: traffic.population_floor,
            spawn_range_max,
            sector,
        }
    }

    /// Advances every live contact by `dt` seconds, retires contacts that
    /// have reached the station, and replenishes the set when it falls
    /// below the population floor.
    pub fn advance(
        &self,
        contacts: &mut Vec<Contact>,
        dt: f32,
        generator: &mut TargetGenerator,
        rng: &mut impl Rng,
    ) -> MotionReport {
        let mut report = MotionReport::default();

        contacts.retain_mut(|contact| {
            if contact.range() <= self.min_range {
                report.retired += 1;
                return false;
            }
            contact.advance(contact.speed * dt);
            true
        });

        if contacts.len() < self.population_floor {
            contacts.push(self.spawn_inbound(generator, rng));
            report.spawned += 1;
        }

        report
    }

    /// Spawns one contact at a density-compensated range inside the sector.
    ///
    /// The square root keeps spawn positions uniform over the covered area
    /// instead of bunching near the station.
    pub fn spawn_inbound(&self, generator: &mut TargetGenerator, rng: &mut impl Rng) -> Contact {
        let range = rng.gen_range(0.0f32..1.0).sqrt() * self.spawn_range_max;
        let bearing = rng.gen_range(self.sector.min_deg()..=self.sector.max_deg());
        generator.spawn(range, bearing, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::CLASS_TABLE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn integrator() -> MotionIntegrator {
        MotionIntegrator::new(&TrafficConfig::default(), SectorConfig::default(), 200.0)
    }

    fn generator() -> TargetGenerator {
        TargetGenerator::new(CLASS_TABLE.to_vec(), 0.3).unwrap()
    }

    #[test]
    fn ranges_stay_non_negative_and_shrink_each_tick() {
        let motion = integrator();
        let mut gen = generator();
        let mut rng = StdRng::seed_from_u64(5);
        let mut contacts = vec![
            gen.spawn(150.0, 120.0, &mut rng),
            gen.spawn(90.0, 200.0, &mut rng),
            gen.spawn(40.0, 160.0, &mut rng),
        ];
        let before: Vec<f32> = contacts.iter().map(|c| c.range()).collect();

        motion.advance(&mut contacts, 0.1, &mut gen, &mut rng);

        for (contact, before) in contacts.iter().zip(before) {
            assert!(contact.range() >= 0.0);
            assert!(contact.range() < before);
        }
    }

    #[test]
    fn contacts_below_the_threshold_are_retired() {
        let motion = integrator();
        let mut gen = generator();
        let mut rng = StdRng::seed_from_u64(9);
        let mut contacts = vec![
            gen.spawn(4.0, 160.0, &mut rng),
            gen.spawn(100.0, 150.0, &mut rng),
            gen.spawn(120.0, 170.0, &mut rng),
        ];

        let report = motion.advance(&mut contacts, 0.1, &mut gen, &mut rng);

        assert_eq!(report.retired, 1);
        assert_eq!(contacts.len(), 2);
        assert!(contacts.iter().all(|c| c.range() > 4.0));
    }

    #[test]
    fn population_recovers_to_the_floor_within_two_ticks() {
        let motion = integrator();
        let mut gen = generator();
        let mut rng = StdRng::seed_from_u64(21);
        let mut contacts = Vec::new();

        motion.advance(&mut contacts, 0.1, &mut gen, &mut rng);
        assert_eq!(contacts.len(), 1);
        motion.advance(&mut contacts, 0.1, &mut gen, &mut rng);
        assert_eq!(contacts.len(), 2);

        // At the floor, no further spawning.
        let report = motion.advance(&mut contacts, 0.1, &mut gen, &mut rng);
        assert_eq!(report.spawned, 0);
        assert_eq!(contacts.len(), 2);
    }

    #[test]
    fn replenished_contacts_appear_inside_the_sector() {
        let motion = integrator();
        let mut gen = generator();
        let mut rng = StdRng::seed_from_u64(33);
        for _ in 0..100 {
            let contact = motion.spawn_inbound(&mut gen, &mut rng);
            let bearing = contact.bearing_deg();
            assert!(
                (110.0 - 0.01..=210.0 + 0.01).contains(&bearing),
                "bearing {} outside sector",
                bearing
            );
            assert!(contact.range() <= 200.0);
        }
    }
}

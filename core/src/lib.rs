//! Simulation and signal-model core for a WWII-era RDF radar station.
//!
//! The engine owns a set of synthetic aerial contacts, advances them in
//! simulated time, and renders goniometer-steered A-scope traces through a
//! time-driven scan cycle. All state lives in one [`RadarStation`]
//! controller; consumers read serializable snapshots.

pub mod contact;
pub mod math;
pub mod prelude;
pub mod simulation;
pub mod station;
pub mod telemetry;

pub use prelude::{SimError, SimResult, StationConfig};
pub use station::{RadarStation, StationSnapshot};

pub mod generator;
pub mod motion;
pub mod signal;
pub mod sweep;

pub use generator::TargetGenerator;
pub use motion::{MotionIntegrator, MotionReport};
pub use signal::SignalModel;
pub use sweep::{sample_trace, SweepCycle, SweepEvent, SweepState, Trace};

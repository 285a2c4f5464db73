use serde::{Deserialize, Serialize};
use std::fmt;

/// Mission flown by a contact; decides class choice and formation size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mission {
    Escort,
    Bomber,
}

impl fmt::Display for Mission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mission::Escort => write!(f, "escort"),
            Mission::Bomber => write!(f, "bomber"),
        }
    }
}

/// Aircraft types the station can plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AircraftClass {
    Bf109,
    Bf110,
    He111,
    Ju88,
    Do17,
}

impl fmt::Display for AircraftClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AircraftClass::Bf109 => write!(f, "Bf 109"),
            AircraftClass::Bf110 => write!(f, "Bf 110"),
            AircraftClass::He111 => write!(f, "He 111"),
            AircraftClass::Ju88 => write!(f, "Ju 88"),
            AircraftClass::Do17 => write!(f, "Do 17"),
        }
    }
}

/// Performance envelope for one aircraft class.
///
/// Speeds are range units per second; altitudes in feet. Bounds are
/// inclusive and must sit inside the station's altitude band.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassSpec {
    pub class: AircraftClass,
    pub mission: Mission,
    pub speed: (f32, f32),
    pub altitude_ft: (f32, f32),
}

/// Built-in class table covering both mission flags.
pub const CLASS_TABLE: &[ClassSpec] = &[
    ClassSpec {
        class: AircraftClass::Bf109,
        mission: Mission::Escort,
        speed: (1.6, 2.0),
        altitude_ft: (15_000.0, 30_000.0),
    },
    ClassSpec {
        class: AircraftClass::Bf110,
        mission: Mission::Escort,
        speed: (1.4, 1.8),
        altitude_ft: (12_000.0, 28_000.0),
    },
    ClassSpec {
        class: AircraftClass::He111,
        mission: Mission::Bomber,
        speed: (0.9, 1.2),
        altitude_ft: (10_000.0, 20_000.0),
    },
    ClassSpec {
        class: AircraftClass::Ju88,
        mission: Mission::Bomber,
        speed: (1.0, 1.4),
        altitude_ft: (12_000.0, 24_000.0),
    },
    ClassSpec {
        class: AircraftClass::Do17,
        mission: Mission::Bomber,
        speed: (0.9, 1.2),
        altitude_ft: (8_000.0, 18_000.0),
    },
];

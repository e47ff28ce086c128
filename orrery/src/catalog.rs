use crate::error::OrbitError;
use crate::orbit::OrbitShape;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Sequence)]
#[serde(rename_all = "lowercase")]
pub enum NamedColor {
    Gray,
    Orange,
    Blue,
    Red,
    Brown,
    Gold,
    LightBlue,
    DarkBlue,
}

impl NamedColor {
    pub const fn rgb(&self) -> [u8; 3] {
        match self {
            NamedColor::Gray => [128, 128, 128],
            NamedColor::Orange => [255, 165, 0],
            NamedColor::Blue => [0, 0, 255],
            NamedColor::Red => [255, 0, 0],
            NamedColor::Brown => [165, 42, 42],
            NamedColor::Gold => [255, 215, 0],
            NamedColor::LightBlue => [173, 216, 230],
            NamedColor::DarkBlue => [0, 0, 139],
        }
    }
}

/// A body of the multi-body view, moving on a circle of radius
/// `semi_major_axis` (AU) once every `period` years.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetState {
    pub name: &'static str,
    pub semi_major_axis: f64,
    pub period: f64,
    pub color: NamedColor,
}

impl PlanetState {
    pub const fn new(name: &'static str, semi_major_axis: f64, period: f64, color: NamedColor) -> Self {
        PlanetState {
            name,
            semi_major_axis,
            period,
            color,
        }
    }

    pub fn validate(&self) -> Result<(), OrbitError> {
        if !self.period.is_finite() || self.period <= 0.0 {
            return Err(OrbitError::invalid(
                "period",
                self.period,
                "must be finite and positive",
            ));
        }
        self.orbit().map(|_| ())
    }

    /// The circular approximation of this body's orbit.
    pub fn orbit(&self) -> Result<OrbitShape, OrbitError> {
        OrbitShape::circular(self.semi_major_axis)
    }

    /// Period predicted by `T = a^(3/2)`, for comparison against `period`.
    pub fn kepler_period(&self) -> f64 {
        self.semi_major_axis.powf(1.5)
    }
}

pub const SOLAR_SYSTEM: [PlanetState; 8] = [
    PlanetState::new("Mercury", 0.39, 0.24, NamedColor::Gray),
    PlanetState::new("Venus", 0.72, 0.62, NamedColor::Orange),
    PlanetState::new("Earth", 1.00, 1.00, NamedColor::Blue),
    PlanetState::new("Mars", 1.52, 1.88, NamedColor::Red),
    PlanetState::new("Jupiter", 5.20, 11.86, NamedColor::Brown),
    PlanetState::new("Saturn", 9.58, 29.46, NamedColor::Gold),
    PlanetState::new("Uranus", 19.2, 84.01, NamedColor::LightBlue),
    PlanetState::new("Neptune", 30.1, 164.8, NamedColor::DarkBlue),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exoplanet {
    pub name: &'static str,
    pub semi_major_axis: f64,
    pub eccentricity: f64,
}

impl Exoplanet {
    pub fn orbit(&self) -> Result<OrbitShape, OrbitError> {
        OrbitShape::new(self.semi_major_axis, self.eccentricity)
    }
}

pub const EXOPLANETS: [Exoplanet; 2] = [
    Exoplanet {
        name: "HD 222582 b",
        semi_major_axis: 1.34,
        eccentricity: 0.73,
    },
    Exoplanet {
        name: "HD 171028 b",
        semi_major_axis: 1.32,
        eccentricity: 0.59,
    },
];

pub fn find_planet(name: &str) -> Option<&'static PlanetState> {
    SOLAR_SYSTEM
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

pub fn find_exoplanet(name: &str) -> Option<&'static Exoplanet> {
    EXOPLANETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
}

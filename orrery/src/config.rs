//! Simulation setup, read from YAML and overridable from the command line.
//!
//! ```yaml
//! frames: 300
//! formula: true_anomaly
//! orbit:
//!   kind: semi_axes
//!   a: 1.0
//!   b: 0.8
//! animation:
//!   width: 600
//!   height: 600
//!   font: /usr/share/fonts/truetype/dejavu/DejaVuSans.ttf
//! ```

use crate::catalog::find_exoplanet;
use crate::error::OrbitError;
use crate::orbit::{OrbitShape, PositionFormula};
use crate::sampler::{OrbitTrack, Scene, SystemTrack, DEFAULT_FRAME_COUNT, DEFAULT_OUTLINE_SAMPLES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed simulation config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown exoplanet {0:?}")]
    UnknownExoplanet(String),

    #[error(transparent)]
    Orbit(#[from] OrbitError),
}

/// Where the animated orbit comes from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrbitSource {
    /// Ellipse given by its semi-major and semi-minor axes (AU).
    SemiAxes { a: f64, b: f64 },
    /// Ellipse given by semi-major axis (AU) and eccentricity.
    Elements { a: f64, e: f64 },
    /// A catalogued exoplanet, looked up by name.
    Exoplanet { name: String },
    /// The eight-planet catalog on circular orbits.
    SolarSystem,
}

impl Default for OrbitSource {
    fn default() -> Self {
        OrbitSource::SemiAxes { a: 1.0, b: 0.8 }
    }
}

impl OrbitSource {
    /// `None` for the multi-body source, which has no single shape.
    pub fn shape(&self) -> Result<Option<OrbitShape>, ConfigError> {
        Ok(match self {
            OrbitSource::SemiAxes { a, b } => Some(OrbitShape::from_semi_axes(*a, *b)?),
            OrbitSource::Elements { a, e } => Some(OrbitShape::new(*a, *e)?),
            OrbitSource::Exoplanet { name } => {
                let exo = find_exoplanet(name)
                    .ok_or_else(|| ConfigError::UnknownExoplanet(name.clone()))?;
                Some(exo.orbit()?)
            }
            OrbitSource::SolarSystem => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub width: u32,
    pub height: u32,
    /// Overrides the per-view playback interval when set.
    pub frame_delay_ms: Option<u32>,
    /// TrueType/OpenType font for the period caption and body labels.
    /// Text is skipped when unset.
    pub font: Option<PathBuf>,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            width: 600,
            height: 600,
            frame_delay_ms: None,
            font: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub frames: usize,
    pub outline_samples: usize,
    pub formula: PositionFormula,
    pub orbit: OrbitSource,
    pub animation: AnimationConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            frames: DEFAULT_FRAME_COUNT,
            outline_samples: DEFAULT_OUTLINE_SAMPLES,
            formula: PositionFormula::default(),
            orbit: OrbitSource::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = SimulationConfig::from_yaml_str(&s)?;
        log::debug!("loaded simulation config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validates the orbit and precomputes every frame.
    pub fn scene(&self) -> Result<Scene, ConfigError> {
        Ok(match self.orbit.shape()? {
            Some(shape) => Scene::Single(OrbitTrack::sample(
                shape,
                self.formula,
                self.frames,
                self.outline_samples,
            )?),
            None => Scene::System(SystemTrack::solar_system(
                self.frames,
                self.outline_samples,
            )?),
        })
    }

    pub fn frame_delay_ms(&self, scene: &Scene) -> u32 {
        self.animation
            .frame_delay_ms
            .unwrap_or_else(|| scene.default_frame_delay_ms())
    }
}

/// Orbit selection shared by the command line tools.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct OrbitArgs {
    /// YAML simulation config; the options below override it
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Semi-major axis a (AU)
    #[arg(long, short('a'))]
    pub semi_major_axis: Option<f64>,

    /// Semi-minor axis b (AU)
    #[arg(long, short('b'), conflicts_with = "eccentricity")]
    pub semi_minor_axis: Option<f64>,

    /// Eccentricity, in place of the semi-minor axis
    #[arg(long, short('e'))]
    pub eccentricity: Option<f64>,

    /// Animate a catalogued exoplanet, e.g. "HD 222582 b"
    #[arg(long, conflicts_with_all = ["semi_major_axis", "semi_minor_axis", "eccentricity"])]
    pub exoplanet: Option<String>,

    /// Animate the solar system on circular orbits
    #[arg(long, conflicts_with_all = ["semi_major_axis", "semi_minor_axis", "eccentricity", "exoplanet"])]
    pub solar_system: bool,

    /// Number of animation frames per period
    #[arg(long, short('n'))]
    pub frames: Option<usize>,

    /// How positions are computed from the eccentric anomaly
    #[arg(long, value_enum)]
    pub formula: Option<PositionFormula>,
}

impl OrbitArgs {
    pub fn resolve(&self) -> Result<SimulationConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load(path)?,
            None => SimulationConfig::default(),
        };
        self.apply_to(&mut config);
        Ok(config)
    }

    pub fn apply_to(&self, config: &mut SimulationConfig) {
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(formula) = self.formula {
            config.formula = formula;
        }

        if self.solar_system {
            config.orbit = OrbitSource::SolarSystem;
            return;
        }
        if let Some(name) = &self.exoplanet {
            config.orbit = OrbitSource::Exoplanet { name: name.clone() };
            return;
        }

        if self.semi_major_axis.is_none()
            && self.semi_minor_axis.is_none()
            && self.eccentricity.is_none()
        {
            return;
        }

        let (a, b, e) = match config.orbit {
            OrbitSource::SemiAxes { a, b } => (a, Some(b), None),
            OrbitSource::Elements { a, e } => (a, None, Some(e)),
            _ => {
                if self.semi_minor_axis.is_none() && self.eccentricity.is_none() {
                    log::warn!("no eccentricity or semi-minor axis given, using a circular orbit");
                }
                (1.0, None, Some(0.0))
            }
        };

        let a = self.semi_major_axis.unwrap_or(a);
        config.orbit = match (self.semi_minor_axis.or(b), self.eccentricity.or(e)) {
            (_, Some(e)) if self.eccentricity.is_some() => OrbitSource::Elements { a, e },
            (Some(b), _) => OrbitSource::SemiAxes { a, b },
            (None, e) => OrbitSource::Elements {
                a,
                e: e.unwrap_or(0.0),
            },
        };
    }
}

//! Frame sequencing for the single-orbit and multi-body views.
//!
//! Every position here is a pure function of the frame index and immutable
//! parameters, so any frame can be recomputed without replaying earlier ones.
//! The `*Track` types precompute the whole sequence once for consumers that
//! index by frame number.

use crate::aabb::AABB;
use crate::catalog::{PlanetState, SOLAR_SYSTEM};
use crate::error::OrbitError;
use crate::math::{apply, linspace, DVec2, TAU};
use crate::orbit::{OrbitShape, PositionFormula};

pub const DEFAULT_FRAME_COUNT: usize = 300;
pub const DEFAULT_OUTLINE_SAMPLES: usize = 1000;

/// Horizontal offset (AU) of a body's label from the body itself.
pub const LABEL_OFFSET: f64 = 0.2;

/// Half width (AU) of the square multi-body view, wide enough for Neptune.
pub const SYSTEM_VIEW_HALF_WIDTH: f64 = 32.0;

/// Fraction of each semi-axis added around a single orbit's view.
pub const ORBIT_VIEW_MARGIN: f64 = 0.1;

fn check_frame_count(frames: usize) -> Result<(), OrbitError> {
    match frames {
        0 => Err(OrbitError::InvalidFrameCount(frames)),
        _ => Ok(()),
    }
}

fn check_outline_samples(samples: usize) -> Result<(), OrbitError> {
    match samples {
        0 | 1 => Err(OrbitError::InvalidOutlineSamples(samples)),
        _ => Ok(()),
    }
}

/// `2*pi*frame/total`: one sweep of the frame range is one full period.
pub fn mean_anomaly_at_frame(frame: usize, total: usize) -> f64 {
    TAU * frame as f64 / total as f64
}

pub fn position_at_frame(
    shape: &OrbitShape,
    formula: PositionFormula,
    frame: usize,
    total: usize,
) -> DVec2 {
    shape.position_at_mean(formula, mean_anomaly_at_frame(frame, total))
}

/// Closed outline of the ellipse; the first and last points coincide.
pub fn elliptical_outline(shape: &OrbitShape, samples: usize) -> Vec<DVec2> {
    apply(&linspace(0.0, TAU, samples), |ea| {
        shape.position_at_eccentric(ea)
    })
}

/// Angle of a circular-approximation body after `frame` of `total` frames,
/// where `total` frames span one reference period (one year for the catalog).
pub fn phase_angle(planet: &PlanetState, frame: usize, total: usize) -> f64 {
    TAU * (frame as f64 / total as f64) * (1.0 / planet.period)
}

pub fn circular_position(planet: &PlanetState, frame: usize, total: usize) -> DVec2 {
    DVec2::from_angle(phase_angle(planet, frame, total)) * planet.semi_major_axis
}

/// Precomputed single-orbit animation: outline, per-frame positions, period.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitTrack {
    pub shape: OrbitShape,
    pub formula: PositionFormula,
    pub outline: Vec<DVec2>,
    pub frames: Vec<DVec2>,
}

impl OrbitTrack {
    pub fn sample(
        shape: OrbitShape,
        formula: PositionFormula,
        frames: usize,
        outline_samples: usize,
    ) -> Result<Self, OrbitError> {
        check_frame_count(frames)?;
        check_outline_samples(outline_samples)?;

        log::debug!(
            "sampling {frames} frames of a={:.3} e={:.3} orbit ({formula:?})",
            shape.semi_major_axis(),
            shape.eccentricity()
        );

        Ok(OrbitTrack {
            shape,
            formula,
            outline: elliptical_outline(&shape, outline_samples),
            frames: (0..frames)
                .map(|f| position_at_frame(&shape, formula, f, frames))
                .collect(),
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Position at any frame number; playback loops past the last frame.
    pub fn frame(&self, frame: usize) -> DVec2 {
        self.frames[frame % self.frames.len()]
    }

    pub fn period(&self) -> f64 {
        self.shape.period()
    }

    pub fn period_caption(&self) -> String {
        format!("Period ≈ {:.2} years", self.period())
    }

    pub fn bounds(&self) -> AABB {
        let a = self.shape.semi_major_axis();
        let b = self.shape.semi_minor_axis();
        let center = DVec2::new(-self.shape.focus_offset(), 0.0);
        AABB::from_center(center, DVec2::new(2.0 * a, 2.0 * b))
            .padded(DVec2::new(a, b) * ORBIT_VIEW_MARGIN)
    }
}

/// One catalog body of the multi-body view.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyTrack {
    pub planet: PlanetState,
    pub outline: Vec<DVec2>,
    pub frames: Vec<DVec2>,
}

impl BodyTrack {
    pub fn label(&self) -> &'static str {
        self.planet.name
    }

    pub fn frame(&self, frame: usize) -> DVec2 {
        self.frames[frame % self.frames.len()]
    }

    pub fn label_anchor(&self, frame: usize) -> DVec2 {
        self.frame(frame) + DVec2::X * LABEL_OFFSET
    }

    fn bounds(&self) -> Option<AABB> {
        AABB::from_list(&self.outline).map(|b| b.padded(DVec2::X * LABEL_OFFSET))
    }
}

/// Precomputed multi-body animation over a shared frame count.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemTrack {
    pub bodies: Vec<BodyTrack>,
    pub frame_count: usize,
}

impl SystemTrack {
    pub fn sample(
        catalog: &[PlanetState],
        frames: usize,
        outline_samples: usize,
    ) -> Result<Self, OrbitError> {
        check_frame_count(frames)?;
        check_outline_samples(outline_samples)?;
        for planet in catalog {
            planet.validate()?;
        }

        log::debug!("sampling {frames} frames of {} bodies", catalog.len());

        let bodies = catalog
            .iter()
            .map(|planet| -> Result<BodyTrack, OrbitError> {
                let shape = planet.orbit()?;
                Ok(BodyTrack {
                    planet: *planet,
                    outline: elliptical_outline(&shape, outline_samples),
                    frames: (0..frames)
                        .map(|f| circular_position(planet, f, frames))
                        .collect(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SystemTrack {
            bodies,
            frame_count: frames,
        })
    }

    pub fn solar_system(frames: usize, outline_samples: usize) -> Result<Self, OrbitError> {
        SystemTrack::sample(&SOLAR_SYSTEM, frames, outline_samples)
    }

    pub fn body(&self, name: &str) -> Option<&BodyTrack> {
        self.bodies
            .iter()
            .find(|b| b.planet.name.eq_ignore_ascii_case(name))
    }

    pub fn positions_at(&self, frame: usize) -> impl Iterator<Item = (&PlanetState, DVec2)> + '_ {
        self.bodies.iter().map(move |b| (&b.planet, b.frame(frame)))
    }

    /// Fixed square around the central body, widened if a body would not fit.
    pub fn bounds(&self) -> AABB {
        let view = AABB::from_center(DVec2::ZERO, DVec2::splat(2.0 * SYSTEM_VIEW_HALF_WIDTH));
        self.bodies
            .iter()
            .filter_map(|b| b.bounds())
            .fold(view, |acc, b| acc.union(&b))
    }
}

/// What a configuration resolves to: one ellipse or a catalog of circles.
#[derive(Debug, Clone, PartialEq)]
pub enum Scene {
    Single(OrbitTrack),
    System(SystemTrack),
}

impl Scene {
    pub fn frame_count(&self) -> usize {
        match self {
            Scene::Single(track) => track.frame_count(),
            Scene::System(track) => track.frame_count,
        }
    }

    pub fn bounds(&self) -> AABB {
        match self {
            Scene::Single(track) => track.bounds(),
            Scene::System(track) => track.bounds(),
        }
    }

    /// Playback interval of the single-orbit and multi-body views.
    pub fn default_frame_delay_ms(&self) -> u32 {
        match self {
            Scene::Single(_) => 40,
            Scene::System(_) => 50,
        }
    }
}

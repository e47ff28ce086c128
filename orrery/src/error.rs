/// Errors raised while building orbits and sampling their trajectories.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OrbitError {
    /// A shape or catalog parameter is outside the bound-ellipse domain.
    #[error("invalid orbit parameter {name} = {value}: {reason}")]
    InvalidOrbitParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Eccentricity is so close to 1 that the Kepler solver derivative
    /// `1 - e*cos(E)` vanishes near periapsis.
    #[error("eccentricity {eccentricity} is too close to 1 for the fixed-step Kepler solve")]
    NumericDegeneracy { eccentricity: f64 },

    #[error("frame count must be positive, got {0}")]
    InvalidFrameCount(usize),

    #[error("an orbit outline needs at least 2 samples, got {0}")]
    InvalidOutlineSamples(usize),
}

impl OrbitError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        OrbitError::InvalidOrbitParameter {
            name,
            value,
            reason,
        }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, OrbitError::InvalidOrbitParameter { .. })
    }
}

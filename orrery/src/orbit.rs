use crate::anomaly::{anomaly_e2t, anomaly_m2e};
use crate::error::OrbitError;
use crate::math::{DVec2, PI};
use clap::ValueEnum;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// Eccentricities closer to 1 than this are refused as numerically degenerate.
/// Up to `1 - DEGENERATE_ECCENTRICITY_MARGIN` the fixed-step Kepler solve meets
/// a residual of 1e-9 for every mean anomaly; it breaks down just past 0.993.
pub const DEGENERATE_ECCENTRICITY_MARGIN: f64 = 0.01;

/// How an eccentric anomaly is turned into a focus-centered position.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Sequence, ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum PositionFormula {
    /// `(a*cos(E) - c, b*sin(E))`
    #[default]
    Parametric,
    /// true anomaly, then the polar equation of the conic
    TrueAnomaly,
}

/// Shape of a bound Keplerian ellipse with the central mass at its focus.
///
/// The major axis lies along +x, so periapsis is at `(a - c, 0)`. Lengths are
/// in AU and the period in years, with the central mass normalized so that
/// `T^2 = a^3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitShape {
    semi_major_axis: f64,
    eccentricity: f64,
}

impl OrbitShape {
    pub fn new(semi_major_axis: f64, eccentricity: f64) -> Result<Self, OrbitError> {
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(OrbitError::invalid(
                "semi_major_axis",
                semi_major_axis,
                "must be finite and positive",
            ));
        }
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitError::invalid(
                "eccentricity",
                eccentricity,
                "must lie in [0, 1) for a bound ellipse",
            ));
        }
        if 1.0 - eccentricity < DEGENERATE_ECCENTRICITY_MARGIN {
            return Err(OrbitError::NumericDegeneracy { eccentricity });
        }
        Ok(OrbitShape {
            semi_major_axis,
            eccentricity,
        })
    }

    /// Derives `e = sqrt(1 - (b/a)^2)` from the two semi-axes.
    pub fn from_semi_axes(semi_major_axis: f64, semi_minor_axis: f64) -> Result<Self, OrbitError> {
        if !semi_minor_axis.is_finite() || semi_minor_axis <= 0.0 {
            return Err(OrbitError::invalid(
                "semi_minor_axis",
                semi_minor_axis,
                "must be finite and positive",
            ));
        }
        if semi_minor_axis > semi_major_axis {
            return Err(OrbitError::invalid(
                "semi_minor_axis",
                semi_minor_axis,
                "must not exceed the semi-major axis",
            ));
        }
        let ratio = semi_minor_axis / semi_major_axis;
        OrbitShape::new(semi_major_axis, (1.0 - ratio.powi(2)).sqrt())
    }

    pub fn circular(radius: f64) -> Result<Self, OrbitError> {
        OrbitShape::new(radius, 0.0)
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity.powi(2)).sqrt()
    }

    /// Distance from the ellipse center to the occupied focus.
    pub fn focus_offset(&self) -> f64 {
        self.semi_major_axis * self.eccentricity
    }

    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity.powi(2))
    }

    /// Kepler's third law, `T = a^(3/2)`.
    pub fn period(&self) -> f64 {
        self.semi_major_axis.powf(1.5)
    }

    pub fn radius_at(&self, true_anomaly: f64) -> f64 {
        self.semi_latus_rectum() / (1.0 + self.eccentricity * true_anomaly.cos())
    }

    pub fn position_at(&self, true_anomaly: f64) -> DVec2 {
        DVec2::from_angle(true_anomaly) * self.radius_at(true_anomaly)
    }

    /// Parametric form, also used to trace the outline.
    pub fn position_at_eccentric(&self, eccentric_anomaly: f64) -> DVec2 {
        DVec2::new(
            self.semi_major_axis * eccentric_anomaly.cos() - self.focus_offset(),
            self.semi_minor_axis() * eccentric_anomaly.sin(),
        )
    }

    pub fn position_via_true_anomaly(&self, eccentric_anomaly: f64) -> DVec2 {
        self.position_at(anomaly_e2t(self.eccentricity, eccentric_anomaly))
    }

    pub fn position(&self, formula: PositionFormula, eccentric_anomaly: f64) -> DVec2 {
        match formula {
            PositionFormula::Parametric => self.position_at_eccentric(eccentric_anomaly),
            PositionFormula::TrueAnomaly => self.position_via_true_anomaly(eccentric_anomaly),
        }
    }

    pub fn position_at_mean(&self, formula: PositionFormula, mean_anomaly: f64) -> DVec2 {
        self.position(formula, anomaly_m2e(self.eccentricity, mean_anomaly))
    }

    pub fn periapsis(&self) -> DVec2 {
        self.position_at(0.0)
    }

    pub fn periapsis_r(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis(&self) -> DVec2 {
        self.position_at(PI)
    }

    pub fn apoapsis_r(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::linspace;
    use approx::assert_relative_eq;
    use enum_iterator::all;

    #[test]
    fn derived_quantities() {
        let o = OrbitShape::from_semi_axes(1.0, 0.8).unwrap();
        assert_relative_eq!(o.eccentricity(), 0.6, epsilon = 1E-12);
        assert_relative_eq!(o.focus_offset(), 0.6, epsilon = 1E-12);
        assert_relative_eq!(o.semi_minor_axis(), 0.8, epsilon = 1E-12);
        assert_relative_eq!(o.period(), 1.0);

        let o = OrbitShape::new(4.0, 0.0).unwrap();
        assert_relative_eq!(o.period(), 8.0, epsilon = 1E-12);
        assert_relative_eq!(o.semi_latus_rectum(), 4.0, epsilon = 1E-12);
    }

    #[test]
    fn rejects_invalid_shapes() {
        assert!(OrbitShape::new(0.0, 0.1).unwrap_err().is_invalid_parameter());
        assert!(OrbitShape::new(-1.0, 0.1).unwrap_err().is_invalid_parameter());
        assert!(OrbitShape::new(f64::NAN, 0.1).unwrap_err().is_invalid_parameter());
        assert!(OrbitShape::new(1.0, 1.0).unwrap_err().is_invalid_parameter());
        assert!(OrbitShape::new(1.0, 1.5).unwrap_err().is_invalid_parameter());
        assert!(OrbitShape::new(1.0, -0.01).unwrap_err().is_invalid_parameter());
        assert!(OrbitShape::new(1.0, f64::INFINITY).unwrap_err().is_invalid_parameter());
        assert!(OrbitShape::from_semi_axes(1.0, 1.2).unwrap_err().is_invalid_parameter());
        assert!(OrbitShape::from_semi_axes(1.0, 0.0).unwrap_err().is_invalid_parameter());
        assert!(OrbitShape::from_semi_axes(0.0, 0.0).unwrap_err().is_invalid_parameter());
        assert!(OrbitShape::from_semi_axes(-1.0, 0.5).unwrap_err().is_invalid_parameter());
    }

    #[test]
    fn refuses_degenerate_eccentricity() {
        for ecc in [0.995, 0.999, 0.9999, 0.999999, 1.0 - 1E-12] {
            assert_eq!(
                OrbitShape::new(1.0, ecc),
                Err(OrbitError::NumericDegeneracy { eccentricity: ecc })
            );
        }
        assert!(matches!(
            OrbitShape::from_semi_axes(1.0, 0.05),
            Err(OrbitError::NumericDegeneracy { .. })
        ));
        assert!(OrbitShape::new(1.0, 0.99).is_ok());
        assert!(OrbitShape::from_semi_axes(1.0, 0.15).is_ok());
    }

    #[test]
    fn equal_axes_give_a_circle() {
        let o = OrbitShape::from_semi_axes(2.5, 2.5).unwrap();
        assert_eq!(o.eccentricity(), 0.0);
        for ea in linspace(0.0, 6.0, 13) {
            assert_relative_eq!(o.position_at_eccentric(ea).length(), 2.5, epsilon = 1E-12);
        }
    }

    #[test]
    fn apsides_on_major_axis() {
        let o = OrbitShape::new(1.34, 0.73).unwrap();
        assert_relative_eq!(o.periapsis().x, o.periapsis_r(), epsilon = 1E-12);
        assert_relative_eq!(o.apoapsis().x, -o.apoapsis_r(), epsilon = 1E-12);
        assert_relative_eq!(o.apoapsis().y, 0.0, epsilon = 1E-12);

        for formula in all::<PositionFormula>() {
            let p = o.position(formula, 0.0);
            assert_relative_eq!(p.x, o.periapsis_r(), epsilon = 1E-12);
            assert_relative_eq!(p.y, 0.0, epsilon = 1E-12);
        }
    }

    #[test]
    fn positions_lie_on_the_conic() {
        let o = OrbitShape::new(1.32, 0.59).unwrap();
        for ea in linspace(0.0, 6.2, 40) {
            let p = o.position_at_eccentric(ea);
            let center = DVec2::new(-o.focus_offset(), 0.0);
            let u = (p - center) / DVec2::new(o.semi_major_axis(), o.semi_minor_axis());
            assert_relative_eq!(u.length_squared(), 1.0, epsilon = 1E-12);
        }
    }
}

//! Conversions between mean, eccentric and true anomaly on a bound ellipse.
//!
//! Every function takes the eccentricity first and assumes `0 <= ecc < 1`;
//! that domain is enforced when an [`OrbitShape`](crate::orbit::OrbitShape)
//! is built, not here.

use crate::math::wrap_0_2pi;

/// Newton-Raphson steps taken by [`anomaly_m2e`]. The count is fixed and no
/// convergence test is made.
pub const KEPLER_ITERATIONS: usize = 10;

/// `E - e*sin(E) - M`, zero when `E` solves Kepler's equation for `M`.
pub fn kepler_residual(ecc: f64, eccentric_anomaly: f64, mean_anomaly: f64) -> f64 {
    anomaly_e2m(ecc, eccentric_anomaly) - mean_anomaly
}

pub fn anomaly_e2m(ecc: f64, eccentric_anomaly: f64) -> f64 {
    eccentric_anomaly - ecc * eccentric_anomaly.sin()
}

/// Solves Kepler's equation `E - e*sin(E) = M` for the eccentric anomaly.
///
/// Starts from `M + e*sin(M)`, which is exactly `M` for a circular orbit, and
/// runs [`KEPLER_ITERATIONS`] Newton steps. For `e = 0` every step is zero, so
/// the result is `M` bit for bit.
pub fn anomaly_m2e(ecc: f64, mean_anomaly: f64) -> f64 {
    let mut e = mean_anomaly + ecc * mean_anomaly.sin();
    for _ in 0..KEPLER_ITERATIONS {
        e -= kepler_residual(ecc, e, mean_anomaly) / (1.0 - ecc * e.cos());
    }
    e
}

/// Half-angle form, free of the quadrant ambiguity of `acos`.
pub fn anomaly_e2t(ecc: f64, eccentric_anomaly: f64) -> f64 {
    let half = 0.5 * eccentric_anomaly;
    2.0 * f64::atan2(
        (1.0 + ecc).sqrt() * half.sin(),
        (1.0 - ecc).sqrt() * half.cos(),
    )
}

pub fn anomaly_t2e(ecc: f64, true_anomaly: f64) -> f64 {
    f64::atan2(
        true_anomaly.sin() * (1.0 - ecc.powi(2)).sqrt(),
        true_anomaly.cos() + ecc,
    )
}

pub fn anomaly_t2m(ecc: f64, true_anomaly: f64) -> f64 {
    wrap_0_2pi(anomaly_e2m(ecc, anomaly_t2e(ecc, true_anomaly)))
}

pub fn anomaly_m2t(ecc: f64, mean_anomaly: f64) -> f64 {
    anomaly_e2t(ecc, anomaly_m2e(ecc, mean_anomaly))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{linspace, PI, TAU};
    use approx::assert_abs_diff_eq;
    use more_asserts::assert_lt;

    fn assert_solved(ecc: f64, mean_anomaly: f64) {
        let e = anomaly_m2e(ecc, mean_anomaly);
        let residual = kepler_residual(ecc, e, mean_anomaly);
        assert_lt!(
            residual.abs(),
            1E-9,
            "ecc {ecc} M {mean_anomaly} gave E {e}"
        );
    }

    #[test]
    fn circular_orbit_is_identity() {
        for m in linspace(-10.0, 10.0, 1001) {
            assert_eq!(anomaly_m2e(0.0, m), m);
        }
    }

    #[test]
    fn converges_over_one_period() {
        for ecc in [0.0, 0.05, 0.2, 0.5, 0.73, 0.9, 0.95] {
            for i in 0..2000 {
                assert_solved(ecc, TAU * i as f64 / 2000.0);
            }
        }
    }

    #[test]
    fn converges_near_parabolic() {
        for i in 0..20000 {
            assert_solved(0.99, TAU * i as f64 / 20000.0);
        }
    }

    #[test]
    fn unrestricted_mean_anomaly() {
        for m in linspace(-30.0, 30.0, 777) {
            assert_solved(0.6, m);
        }
    }

    #[test]
    fn apsides() {
        for ecc in [0.0, 0.3, 0.9] {
            assert_eq!(anomaly_m2e(ecc, 0.0), 0.0);
            assert_abs_diff_eq!(anomaly_m2e(ecc, PI), PI, epsilon = 1E-12);
            assert_abs_diff_eq!(anomaly_e2t(ecc, PI), PI, epsilon = 1E-12);
        }
    }

    #[test]
    fn true_eccentric_round_trip() {
        let ecc = 0.59;
        for ta in linspace(-3.0, 3.0, 61) {
            let e = anomaly_t2e(ecc, ta);
            assert_abs_diff_eq!(anomaly_e2t(ecc, e), ta, epsilon = 1E-12);
        }
    }

    #[test]
    fn mean_true_round_trip() {
        let ecc = 0.3;
        for ma in linspace(0.1, 6.0, 25) {
            let ta = anomaly_m2t(ecc, ma);
            assert_abs_diff_eq!(anomaly_t2m(ecc, ta), ma, epsilon = 1E-9);
        }
    }

    #[test]
    fn true_anomaly_leads_mean_anomaly_after_periapsis() {
        let ecc = 0.73;
        let ma = 0.5;
        assert_lt!(ma, anomaly_m2e(ecc, ma));
        assert_lt!(anomaly_m2e(ecc, ma), anomaly_m2t(ecc, ma));
    }
}

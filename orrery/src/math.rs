pub use glam::f64::DVec2;

pub const PI: f64 = std::f64::consts::PI;
pub const TAU: f64 = std::f64::consts::TAU;

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn apply<T: Copy, R>(x: &[T], func: impl Fn(T) -> R) -> Vec<R> {
    x.iter().map(|x| func(*x)).collect()
}

/// n evenly spaced samples over [a, b], both endpoints included
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    if n < 2 {
        return vec![a];
    }
    if n == 2 {
        return vec![a, b];
    }
    (0..n)
        .map(|i| {
            let t = i as f64 / (n - 1) as f64;
            lerp(a, b, t)
        })
        .collect()
}

/// floored modulo; the result carries the sign of n
pub fn fmod(a: f64, n: f64) -> f64 {
    a - n * (a / n).floor()
}

pub fn wrap_0_2pi(x: f64) -> f64 {
    fmod(x, TAU)
}

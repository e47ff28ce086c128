pub mod aabb;
pub mod anomaly;
pub mod catalog;
pub mod config;
pub mod error;
pub mod file_export;
pub mod math;
pub mod orbit;
pub mod prelude;
pub mod render;
pub mod sampler;

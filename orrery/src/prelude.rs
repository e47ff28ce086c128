pub use crate::aabb::AABB;
pub use crate::anomaly::{
    anomaly_e2m, anomaly_e2t, anomaly_m2e, anomaly_m2t, anomaly_t2e, anomaly_t2m,
    kepler_residual, KEPLER_ITERATIONS,
};
pub use crate::catalog::{
    find_exoplanet, find_planet, Exoplanet, NamedColor, PlanetState, EXOPLANETS, SOLAR_SYSTEM,
};
pub use crate::config::{AnimationConfig, ConfigError, OrbitArgs, OrbitSource, SimulationConfig};
pub use crate::error::OrbitError;
pub use crate::file_export::{export_orbit_track, export_scene, export_system_track, write_csv};
pub use crate::math::{apply, linspace, wrap_0_2pi, DVec2, PI, TAU};
pub use crate::orbit::{OrbitShape, PositionFormula, DEGENERATE_ECCENTRICITY_MARGIN};
pub use crate::render::{load_font, write_gif, Annotation, Canvas, RenderError};
pub use crate::sampler::{
    circular_position, elliptical_outline, mean_anomaly_at_frame, phase_angle, position_at_frame,
    BodyTrack, OrbitTrack, Scene, SystemTrack, DEFAULT_FRAME_COUNT, DEFAULT_OUTLINE_SAMPLES,
};

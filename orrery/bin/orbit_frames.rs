use clap::Parser;
use orrery::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Prints the per-frame positions of an orbit animation as CSV
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub orbit: OrbitArgs,

    /// Write to this file instead of stdout
    #[arg(long, short)]
    pub out: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.orbit.resolve()?;
    let scene = config.scene()?;

    match &scene {
        Scene::Single(track) => log::info!(
            "a = {:.2} AU, e = {:.3}, {}",
            track.shape.semi_major_axis(),
            track.shape.eccentricity(),
            track.period_caption()
        ),
        Scene::System(track) => log::info!("{} bodies", track.bodies.len()),
    }

    match &args.out {
        Some(path) => export_scene(&scene, BufWriter::new(File::create(path)?))?,
        None => export_scene(&scene, std::io::stdout().lock())?,
    }

    Ok(())
}

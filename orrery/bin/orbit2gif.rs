use clap::Parser;
use orrery::prelude::*;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Renders a Keplerian orbit animation to an animated GIF
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(flatten)]
    pub orbit: OrbitArgs,

    /// Destination filepath for the GIF
    #[arg(long, short)]
    pub out: PathBuf,

    /// Image width in pixels
    #[arg(long, short('W'))]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long, short('H'))]
    pub height: Option<u32>,

    /// Milliseconds between frames
    #[arg(long, short('d'))]
    pub delay: Option<u32>,

    /// Write a single frame as PNG instead of the whole animation
    #[arg(long)]
    pub still: Option<usize>,

    /// Font file for the period caption and body labels
    #[arg(long)]
    pub font: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut config = args.orbit.resolve()?;
    if let Some(width) = args.width {
        config.animation.width = width;
    }
    if let Some(height) = args.height {
        config.animation.height = height;
    }
    if args.delay.is_some() {
        config.animation.frame_delay_ms = args.delay;
    }
    if args.font.is_some() {
        config.animation.font = args.font.clone();
    }

    let scene = config.scene()?;
    if let Scene::Single(track) = &scene {
        log::info!("{}", track.period_caption());
    }

    let mut canvas = Canvas::for_scene(config.animation.width, config.animation.height, &scene)?;
    match &config.animation.font {
        Some(path) => canvas = canvas.with_font(load_font(path)?),
        None => log::warn!("no font given, frames are rendered without text"),
    }

    if let Some(frame) = args.still {
        canvas.render_frame(&scene, frame).save(&args.out)?;
        log::info!("wrote frame {} to {}", frame, args.out.display());
        return Ok(());
    }

    let writer = BufWriter::new(File::create(&args.out)?);
    write_gif(&scene, &canvas, config.frame_delay_ms(&scene), writer)?;
    log::info!("wrote {}", args.out.display());

    Ok(())
}

//! Rasterizes precomputed tracks and encodes them as an animated GIF.

use crate::aabb::AABB;
use crate::math::DVec2;
use crate::sampler::{OrbitTrack, Scene, SystemTrack};
use ab_glyph::{FontVec, PxScale};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_text_mut};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

const BACKGROUND: [u8; 3] = [255, 255, 255];
const ORBIT_COLOR: [u8; 3] = [0, 0, 255];
const STAR_COLOR: [u8; 3] = [255, 215, 0];
const PLANET_COLOR: [u8; 3] = [255, 0, 0];
const TEXT_COLOR: [u8; 3] = [0, 0, 0];

/// Text height as a fraction of the smaller image side.
const TEXT_HEIGHT: f64 = 0.04;

/// Segments per dash of the multi-body outlines.
const DASH_LENGTH: usize = 8;

/// NeuQuant speed handed to the GIF encoder, 1 (best) to 30 (fastest).
const GIF_ENCODER_SPEED: i32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("canvas must be at least 2x2 pixels, got {width}x{height}")]
    Canvas { width: u32, height: u32 },

    #[error("view has no area: {0:?}")]
    EmptyView(AABB),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error("unusable font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn rgba(c: [u8; 3]) -> Rgba<u8> {
    Rgba([c[0], c[1], c[2], 255])
}

/// Half-transparent color over the background.
fn faded(c: [u8; 3]) -> [u8; 3] {
    let mix = |a: u8, b: u8| ((a as u16 + b as u16) / 2) as u8;
    [
        mix(c[0], BACKGROUND[0]),
        mix(c[1], BACKGROUND[1]),
        mix(c[2], BACKGROUND[2]),
    ]
}

pub fn load_font(path: &Path) -> Result<FontVec, RenderError> {
    let font = FontVec::try_from_vec(std::fs::read(path)?)?;
    log::debug!("loaded font {}", path.display());
    Ok(font)
}

/// A piece of text placed on a frame, top-left corner in pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub text: String,
    pub at: (i32, i32),
    pub color: [u8; 3],
}

/// Pixel raster onto which a world-space view (AU) is mapped at equal aspect.
#[derive(Clone)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
    view: AABB,
    scale: f64,
    font: Option<Arc<FontVec>>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, view: AABB) -> Result<Self, RenderError> {
        if width < 2 || height < 2 {
            return Err(RenderError::Canvas { width, height });
        }
        let span = view.span();
        if !(span.x > 0.0 && span.y > 0.0) {
            return Err(RenderError::EmptyView(view));
        }
        let scale = f64::min(width as f64 / span.x, height as f64 / span.y);
        Ok(Canvas {
            width,
            height,
            view,
            scale,
            font: None,
        })
    }

    /// Enables the period caption and body labels.
    pub fn with_font(mut self, font: FontVec) -> Self {
        self.font = Some(Arc::new(font));
        self
    }

    pub fn for_scene(width: u32, height: u32, scene: &Scene) -> Result<Self, RenderError> {
        Canvas::new(width, height, scene.bounds())
    }

    /// World to pixel coordinates, y pointing down.
    pub fn to_pixel(&self, p: DVec2) -> (f32, f32) {
        let d = (p - self.view.center()) * self.scale;
        (
            (self.width as f64 / 2.0 + d.x) as f32,
            (self.height as f64 / 2.0 - d.y) as f32,
        )
    }

    fn to_pixel_i32(&self, p: DVec2) -> (i32, i32) {
        let (x, y) = self.to_pixel(p);
        (x.round() as i32, y.round() as i32)
    }

    fn blank(&self) -> RgbaImage {
        RgbaImage::from_pixel(self.width, self.height, rgba(BACKGROUND))
    }

    /// Marker radius as a fraction of the smaller image side.
    fn marker(&self, fraction: f64) -> i32 {
        ((self.width.min(self.height) as f64 * fraction).round() as i32).max(2)
    }

    fn text_height(&self) -> f32 {
        (self.width.min(self.height) as f64 * TEXT_HEIGHT) as f32
    }

    /// Text for the frame: the period caption in the top-left corner for a
    /// single orbit, or each body's name beside it for the solar system.
    pub fn annotations(&self, scene: &Scene, frame: usize) -> Vec<Annotation> {
        match scene {
            Scene::Single(track) => {
                let margin = self.marker(0.02);
                vec![Annotation {
                    text: track.period_caption(),
                    at: (margin, margin),
                    color: TEXT_COLOR,
                }]
            }
            Scene::System(track) => {
                let half = (self.text_height() / 2.0).round() as i32;
                track
                    .bodies
                    .iter()
                    .map(|body| {
                        let (x, y) = self.to_pixel_i32(body.label_anchor(frame));
                        Annotation {
                            text: body.label().to_string(),
                            at: (x, y - half),
                            color: body.planet.color.rgb(),
                        }
                    })
                    .collect()
            }
        }
    }

    fn draw_annotations(&self, img: &mut RgbaImage, scene: &Scene, frame: usize) {
        let Some(font) = &self.font else {
            return;
        };
        let scale = PxScale::from(self.text_height());
        for a in self.annotations(scene, frame) {
            draw_text_mut(img, rgba(a.color), a.at.0, a.at.1, scale, font.as_ref(), &a.text);
        }
    }

    fn draw_polyline(&self, img: &mut RgbaImage, points: &[DVec2], color: [u8; 3], dashed: bool) {
        for (i, pair) in points.windows(2).enumerate() {
            if dashed && (i / DASH_LENGTH) % 2 == 1 {
                continue;
            }
            draw_line_segment_mut(
                img,
                self.to_pixel(pair[0]),
                self.to_pixel(pair[1]),
                rgba(color),
            );
        }
    }

    pub fn render_orbit_frame(&self, track: &OrbitTrack, frame: usize) -> RgbaImage {
        let mut img = self.blank();
        self.draw_polyline(&mut img, &track.outline, ORBIT_COLOR, false);
        draw_filled_circle_mut(
            &mut img,
            self.to_pixel_i32(DVec2::ZERO),
            self.marker(0.025),
            rgba(STAR_COLOR),
        );
        draw_filled_circle_mut(
            &mut img,
            self.to_pixel_i32(track.frame(frame)),
            self.marker(0.016),
            rgba(PLANET_COLOR),
        );
        img
    }

    pub fn render_system_frame(&self, track: &SystemTrack, frame: usize) -> RgbaImage {
        let mut img = self.blank();
        for body in &track.bodies {
            self.draw_polyline(&mut img, &body.outline, faded(body.planet.color.rgb()), true);
        }
        draw_filled_circle_mut(
            &mut img,
            self.to_pixel_i32(DVec2::ZERO),
            self.marker(0.02),
            rgba(STAR_COLOR),
        );
        for (planet, p) in track.positions_at(frame) {
            draw_filled_circle_mut(
                &mut img,
                self.to_pixel_i32(p),
                self.marker(0.008),
                rgba(planet.color.rgb()),
            );
        }
        img
    }

    pub fn render_frame(&self, scene: &Scene, frame: usize) -> RgbaImage {
        let mut img = match scene {
            Scene::Single(track) => self.render_orbit_frame(track, frame),
            Scene::System(track) => self.render_system_frame(track, frame),
        };
        self.draw_annotations(&mut img, scene, frame);
        img
    }
}

/// Encodes every frame of the scene as a looping GIF.
pub fn write_gif<W: Write>(
    scene: &Scene,
    canvas: &Canvas,
    frame_delay_ms: u32,
    writer: W,
) -> Result<(), RenderError> {
    let mut encoder = GifEncoder::new_with_speed(writer, GIF_ENCODER_SPEED);
    encoder.set_repeat(Repeat::Infinite)?;
    let delay = Delay::from_numer_denom_ms(frame_delay_ms, 1);

    for i in 0..scene.frame_count() {
        let img = canvas.render_frame(scene, i);
        encoder.encode_frame(Frame::from_parts(img, 0, 0, delay))?;
    }

    log::info!(
        "encoded {} frames at {} ms per frame",
        scene.frame_count(),
        frame_delay_ms
    );

    Ok(())
}

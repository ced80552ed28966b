//! Headless renderer drawing frames into an RGBA image.

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::camera::Viewport;
use crate::frame::Vertex;
use crate::solar::ProjectedMarker;
use crate::Color;

/// What the frame loop needs from a drawing surface
pub trait Renderer {
    fn viewport(&self) -> Viewport;

    fn clear(&mut self);

    /// Draw the body vertex buffer with additive blending
    fn draw_points(&mut self, vertices: &[Vertex]);

    /// Draw an orbit guide, one pixel per sample
    fn draw_strip(&mut self, vertices: &[Vertex]);

    fn draw_marker(&mut self, marker: &ProjectedMarker);
}

pub const MARKER_RADIUS: f64 = 5.0;
pub const MARKER_THICKNESS: f64 = 2.0;
const CROSSHAIR_COLOR: Color = Rgba([128, 128, 128, 255]);

/// Software canvas backed by an [`RgbaImage`]
pub struct Canvas {
    image: RgbaImage,
    background: [u8; 3],
}

fn scale(channel: u8, alpha: u8) -> u8 {
    ((channel as u32 * alpha as u32 + 127) / 255) as u8
}

fn over(dst: u8, src: u8, alpha: u8) -> u8 {
    ((src as u32 * alpha as u32 + dst as u32 * (255 - alpha as u32) + 127) / 255) as u8
}

impl Canvas {
    pub fn new(viewport: Viewport, background: [u8; 3]) -> Self {
        let [r, g, b] = background;
        Canvas {
            image: RgbaImage::from_pixel(viewport.width, viewport.height, Rgba([r, g, b, 255])),
            background,
        }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    fn pixel_index(&self, x: f64, y: f64) -> Option<(u32, u32)> {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            return None;
        }
        let (px, py) = (x as u32, y as u32);
        (px < self.image.width() && py < self.image.height()).then_some((px, py))
    }

    fn add(&mut self, x: f64, y: f64, color: Color) {
        if let Some((px, py)) = self.pixel_index(x, y) {
            let [r, g, b, a] = color.0;
            let pixel = self.image.get_pixel_mut(px, py);
            for (dst, src) in pixel.0.iter_mut().zip([r, g, b]) {
                *dst = dst.saturating_add(scale(src, a));
            }
        }
    }

    fn blend(&mut self, x: f64, y: f64, color: Color) {
        if let Some((px, py)) = self.pixel_index(x, y) {
            let [r, g, b, a] = color.0;
            let pixel = self.image.get_pixel_mut(px, py);
            for (dst, src) in pixel.0.iter_mut().zip([r, g, b]) {
                *dst = over(*dst, src, a);
            }
        }
    }

    /// Small gray dot at the view center
    pub fn draw_crosshair(&mut self) {
        let (cx, cy) = self.viewport().center();
        self.blend(cx, cy, CROSSHAIR_COLOR);
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        self.image.save(path)
    }
}

impl Renderer for Canvas {
    fn viewport(&self) -> Viewport {
        Viewport::new(self.image.width(), self.image.height())
    }

    fn clear(&mut self) {
        let [r, g, b] = self.background;
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([r, g, b, 255]);
        }
    }

    fn draw_points(&mut self, vertices: &[Vertex]) {
        for v in vertices.iter().filter(|v| v.is_visible()) {
            self.add(v.position[0] as f64, v.position[1] as f64, v.color);
        }
    }

    fn draw_strip(&mut self, vertices: &[Vertex]) {
        for v in vertices.iter().filter(|v| v.is_visible()) {
            self.blend(v.position[0] as f64, v.position[1] as f64, v.color);
        }
    }

    /// Ring outline around the marker position
    fn draw_marker(&mut self, marker: &ProjectedMarker) {
        if marker.color.0[3] == 0 {
            return;
        }
        let outer = MARKER_RADIUS + MARKER_THICKNESS;
        let reach = outer.ceil() as i32;
        let (cx, cy) = (marker.screen.x.floor(), marker.screen.y.floor());
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let r = ((dx * dx + dy * dy) as f64).sqrt();
                if (MARKER_RADIUS..=outer).contains(&r) {
                    self.blend(cx + dx as f64, cy + dy as f64, marker.color);
                }
            }
        }
    }
}

//! Procedural app icon: gradient background, isometric delivery box, "W"
//! glyph, checkmark and a soft highlight band near the top.
//!
//! Rendering is two passes over one RGB buffer. [`render_base`] draws every
//! opaque layer; [`apply_highlight`] then reads pixels back from that buffer
//! and blends the highlight over them. All geometry is a fraction of the
//! canvas size, so the same design comes out at every catalog size, and the
//! output for a given size is always identical.

use iconforge_core::{check_size, Result};
use image::{Rgb, RgbImage};

pub mod draw;

use draw::{hline, lerp_trunc, mix, stroke, Pt, WHITE};

pub const GRADIENT_START: Rgb<u8> = Rgb([34, 193, 195]);
pub const GRADIENT_END: Rgb<u8> = Rgb([183, 33, 255]);
pub const ACCENT: Rgb<u8> = Rgb([255, 119, 48]);

const FRONT_EDGE_STEPS: u32 = 20;
const TOP_FACE_STEPS: u32 = 15;

/// Shared geometry for one canvas size.
#[derive(Debug, Clone, Copy)]
struct Layout {
    size: u32,
    cx: f64,
    cy: f64,
    /// Edge of the box's bounding square, half the canvas.
    box_size: f64,
}

impl Layout {
    fn new(size: u32) -> Self {
        let c = (size / 2) as f64;
        Self {
            size,
            cx: c,
            cy: c,
            box_size: (size as f64 * 0.5).trunc(),
        }
    }

    fn at(&self, fx: f64, fy: f64) -> Pt {
        (self.cx + self.box_size * fx, self.cy + self.box_size * fy)
    }

    /// Pen width `size / divisor`, never below `min`.
    fn pen(&self, divisor: u32, min: u32) -> u32 {
        (self.size / divisor).max(min)
    }
}

/// Render the full icon at `size x size`.
pub fn render_icon(size: u32) -> Result<RgbImage> {
    let size = check_size(size)?;
    let mut img = render_base(size);
    apply_highlight(&mut img);
    tracing::trace!(event = "icon_rendered", size = size);
    Ok(img)
}

/// First pass: every layer except the highlight.
pub fn render_base(size: u32) -> RgbImage {
    let layout = Layout::new(size);
    let mut img = RgbImage::new(size, size);
    draw_background(&mut img);
    draw_box_front(&mut img, &layout);
    draw_box_top(&mut img, &layout);
    draw_glyph(&mut img, &layout);
    draw_checkmark(&mut img, &layout);
    img
}

fn draw_background(img: &mut RgbImage) {
    let size = img.height();
    for y in 0..size {
        let ratio = y as f64 / size as f64;
        hline(img, y, mix(GRADIENT_START, GRADIENT_END, ratio));
    }
}

fn draw_box_front(img: &mut RgbImage, l: &Layout) {
    let face = [
        l.at(-0.4, -0.2),
        l.at(0.4, -0.2),
        l.at(0.4, 0.3),
        l.at(-0.4, 0.3),
    ];
    let width = l.pen(50, 2);
    let dt = 1.0 / FRONT_EDGE_STEPS as f64;
    for (i, &p) in face.iter().enumerate() {
        let q = face[(i + 1) % face.len()];
        for step in 0..FRONT_EDGE_STEPS {
            let t = step as f64 * dt;
            let color = mix(WHITE, ACCENT, t);
            stroke(img, lerp_trunc(p, q, t), lerp_trunc(p, q, t + dt), width, color);
        }
    }
}

fn draw_box_top(img: &mut RgbImage, l: &Layout) {
    let face = [
        l.at(-0.4, -0.2),
        l.at(-0.2, -0.4),
        l.at(0.2, -0.4),
        l.at(0.4, -0.2),
    ];
    let apex = l.at(0.0, -0.3);
    let width = l.pen(60, 1);
    for (i, &p) in face.iter().enumerate() {
        let q = face[(i + 1) % face.len()];
        for step in 0..TOP_FACE_STEPS {
            let t = step as f64 / TOP_FACE_STEPS as f64;
            let color = mix(WHITE, ACCENT, t * 0.5);
            stroke(img, lerp_trunc(p, q, t), apex, width, color);
        }
    }
}

fn draw_glyph(img: &mut RgbImage, l: &Layout) {
    let w = (l.box_size * 0.6).trunc();
    let (x, y) = (l.cx, l.cy + l.box_size * 0.05);
    let width = l.pen(30, 3);
    let left_top = (x - w * 0.35, y - w * 0.15);
    let left_bottom = (x - w * 0.35, y + w * 0.15);
    let middle = (x, y - w * 0.05);
    let right_top = (x + w * 0.35, y - w * 0.15);
    let right_bottom = (x + w * 0.35, y + w * 0.15);

    stroke(img, left_top, left_bottom, width, WHITE);
    stroke(img, left_bottom, middle, width, WHITE);
    stroke(img, middle, right_bottom, width, WHITE);
    stroke(img, right_top, right_bottom, width, WHITE);
}

fn draw_checkmark(img: &mut RgbImage, l: &Layout) {
    let a = (l.box_size * 0.25).trunc();
    let (x, y) = l.at(0.5, -0.1);
    let width = l.pen(40, 2);
    let start = (x - a * 0.3, y);
    let knee = (x - a * 0.1, y + a * 0.2);
    let tip = (x + a * 0.3, y - a * 0.2);
    stroke(img, start, knee, width, WHITE);
    stroke(img, knee, tip, width, WHITE);
}

/// Second pass: a band of thin ellipses fading from white into whatever is
/// already on the canvas. Each row samples the center column as left by the
/// rows above it.
pub fn apply_highlight(img: &mut RgbImage) {
    let size = img.width();
    let span = size as f64 * 0.1;
    let top = (size as f64 * 0.15) as u32;
    let rows = span as u32;
    let cx = size / 2;
    let rx = (size as f64 * 0.3) as i32;

    for y in top..top + rows {
        let alpha = 1.0 - (y - top) as f64 / span;
        let under = *img.get_pixel(cx, y);
        let color = mix(under, WHITE, alpha);
        draw::ellipse(img, (cx as i32, y as i32), rx, 2, color);
    }
}

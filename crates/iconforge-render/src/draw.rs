use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_ellipse_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;

pub type Pt = (f64, f64);

pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Point at `t` along `a -> b`.
pub fn lerp(a: Pt, b: Pt, t: f64) -> Pt {
    (a.0 * (1.0 - t) + b.0 * t, a.1 * (1.0 - t) + b.1 * t)
}

/// Same as [`lerp`] but snapped toward zero to whole pixels.
pub fn lerp_trunc(a: Pt, b: Pt, t: f64) -> Pt {
    let (x, y) = lerp(a, b, t);
    (x.trunc(), y.trunc())
}

/// Per-channel linear mix, truncated.
pub fn mix(a: Rgb<u8>, b: Rgb<u8>, t: f64) -> Rgb<u8> {
    let ch = |i: usize| (a[i] as f64 * (1.0 - t) + b[i] as f64 * t) as u8;
    Rgb([ch(0), ch(1), ch(2)])
}

/// Fill row `y` entirely.
pub fn hline(img: &mut RgbImage, y: u32, color: Rgb<u8>) {
    for x in 0..img.width() {
        img.put_pixel(x, y, color);
    }
}

/// Stroke `from -> to` with a `width`-pixel pen. Wide pens fill the
/// quadrilateral around the segment; a zero-length wide stroke is a dot.
pub fn stroke(img: &mut RgbImage, from: Pt, to: Pt, width: u32, color: Rgb<u8>) {
    if width <= 1 {
        draw_line_segment_mut(
            img,
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            color,
        );
        return;
    }

    let half = width as f64 / 2.0;
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let len = dx.hypot(dy);
    if len < f64::EPSILON {
        dot(img, from, half, color);
        return;
    }
    let (nx, ny) = (-dy / len * half, dx / len * half);
    let corner = |p: Pt, sign: f64| {
        Point::new(
            (p.0 + sign * nx).round() as i32,
            (p.1 + sign * ny).round() as i32,
        )
    };
    let quad = [
        corner(from, 1.0),
        corner(to, 1.0),
        corner(to, -1.0),
        corner(from, -1.0),
    ];
    // imageproc rejects closed polygons
    if quad[0] == quad[3] {
        dot(img, from, half, color);
        return;
    }
    draw_polygon_mut(img, &quad, color);
}

fn dot(img: &mut RgbImage, at: Pt, radius: f64, color: Rgb<u8>) {
    draw_filled_circle_mut(
        img,
        (at.0.round() as i32, at.1.round() as i32),
        radius.floor() as i32,
        color,
    );
}

/// Filled axis-aligned ellipse.
pub fn ellipse(img: &mut RgbImage, center: (i32, i32), rx: i32, ry: i32, color: Rgb<u8>) {
    draw_filled_ellipse_mut(img, center, rx, ry, color);
}

use image::{Rgba, RgbaImage};

use crate::design::{scaled, IconDesign};

/// Render the default PodcastReady icon (camera on a lavender circle).
pub fn generate_icon(size: u32) -> RgbaImage {
    render_icon(size, &IconDesign::default())
}

/// Render a `size` x `size` opaque icon: background fill, accent circle, camera glyph.
pub fn render_icon(size: u32, design: &IconDesign) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, design.background);
    let center = (size / 2) as i64;

    let radius = scaled(size, design.circle_radius);
    fill_circle(&mut img, center, center, radius, design.accent);

    draw_camera(&mut img, center, center, size, design);
    img
}

/// Draw the camera glyph centred at (`cx`, `cy`); every dimension derives from `size`.
pub fn draw_camera(img: &mut RgbaImage, cx: i64, cy: i64, size: u32, design: &IconDesign) {
    // Body
    let body_w = scaled(size, design.body_width);
    let body_h = scaled(size, design.body_height);
    let body_left = cx - body_w.div_euclid(2);
    let body_top = cy - body_h.div_euclid(2) + scaled(size, design.body_drop);
    let body_right = body_left + body_w;
    let body_bottom = body_top + body_h;
    let corner = scaled(size, design.body_corner_radius);
    fill_rounded_rect(
        img,
        (body_left, body_top, body_right, body_bottom),
        corner,
        design.glyph,
    );

    // Viewfinder hump resting on the body's top edge
    let hump_w = scaled(size, design.hump_bottom_width);
    let hump_top_w = scaled(size, design.hump_top_width);
    let hump_h = scaled(size, design.hump_height);
    let hump_cx = cx + scaled(size, design.hump_shift);
    let hump_bottom = body_top;
    let hump_top = hump_bottom - hump_h;
    fill_trapezoid(
        img,
        [
            (hump_cx - hump_w.div_euclid(2), hump_bottom),
            (hump_cx - hump_top_w.div_euclid(2), hump_top),
            (hump_cx + hump_top_w.div_euclid(2), hump_top),
            (hump_cx + hump_w.div_euclid(2), hump_bottom),
        ],
        design.glyph,
    );

    // Lens ring
    let lens_cx = cx;
    let lens_cy = (body_top + body_bottom).div_euclid(2) + scaled(size, design.lens_drop);
    fill_circle(img, lens_cx, lens_cy, scaled(size, design.lens_radius), design.accent);
    fill_circle(
        img,
        lens_cx,
        lens_cy,
        scaled(size, design.inner_lens_radius),
        design.background,
    );

    // Reflection dot
    let offset = scaled(size, design.glint_offset);
    fill_circle(
        img,
        lens_cx - offset,
        lens_cy - offset,
        scaled(size, design.glint_radius),
        design.glyph,
    );
}

/// Paint every pixel of the inclusive box `(x0, y0, x1, y1)` that satisfies `inside`.
fn fill_where<F>(img: &mut RgbaImage, bounds: (i64, i64, i64, i64), color: Rgba<u8>, inside: F)
where
    F: Fn(i64, i64) -> bool,
{
    let (w, h) = (img.width() as i64, img.height() as i64);
    if w == 0 || h == 0 {
        return;
    }
    let (x0, y0, x1, y1) = bounds;
    for y in y0.max(0)..=y1.min(h - 1) {
        for x in x0.max(0)..=x1.min(w - 1) {
            if inside(x, y) {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}

fn fill_circle(img: &mut RgbaImage, cx: i64, cy: i64, r: i64, color: Rgba<u8>) {
    let r2 = r * r;
    fill_where(img, (cx - r, cy - r, cx + r, cy + r), color, |x, y| {
        let dx = x - cx;
        let dy = y - cy;
        dx * dx + dy * dy <= r2
    });
}

fn fill_rounded_rect(
    img: &mut RgbaImage,
    rect: (i64, i64, i64, i64),
    radius: i64,
    color: Rgba<u8>,
) {
    let (left, top, right, bottom) = rect;
    let r2 = radius * radius;
    fill_where(img, rect, color, |x, y| {
        // Distance to the inner rectangle spanned by the corner centres
        let qx = x.max(left + radius).min(right - radius);
        let qy = y.max(top + radius).min(bottom - radius);
        let dx = x - qx;
        let dy = y - qy;
        dx * dx + dy * dy <= r2
    });
}

fn fill_trapezoid(img: &mut RgbaImage, pts: [(i64, i64); 4], color: Rgba<u8>) {
    let f = pts.map(|(x, y)| (x as f64, y as f64));
    let x0 = pts.iter().map(|p| p.0).min().unwrap_or(0);
    let x1 = pts.iter().map(|p| p.0).max().unwrap_or(0);
    let y0 = pts.iter().map(|p| p.1).min().unwrap_or(0);
    let y1 = pts.iter().map(|p| p.1).max().unwrap_or(0);
    fill_where(img, (x0, y0, x1, y1), color, |x, y| {
        let (px, py) = (x as f64, y as f64);
        point_in_triangle(px, py, f[0], f[1], f[2]) || point_in_triangle(px, py, f[0], f[2], f[3])
    });
}

#[inline]
fn cross(ax: f64, ay: f64, bx: f64, by: f64) -> f64 { ax * by - ay * bx }

fn point_in_triangle(px: f64, py: f64, p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) -> bool {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    let c1 = cross(x2 - x1, y2 - y1, px - x1, py - y1);
    let c2 = cross(x3 - x2, y3 - y2, px - x2, py - y2);
    let c3 = cross(x1 - x3, y1 - y3, px - x3, py - y3);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_and_opacity() {
        for size in [1u32, 2, 16, 37, 128] {
            let img = generate_icon(size);
            assert_eq!(img.dimensions(), (size, size));
            assert!(img.pixels().all(|p| p.0[3] == 255), "transparent pixel at size {size}");
        }
    }

    #[test]
    fn test_master_layout() {
        let d = IconDesign::default();
        let img = generate_icon(1024);

        // Corner stays background, diagonal inside the circle is accent
        assert_eq!(*img.get_pixel(0, 0), d.background);
        assert_eq!(*img.get_pixel(1023, 1023), d.background);
        assert_eq!(*img.get_pixel(295, 295), d.accent);
        // Just outside the 389px circle along the diagonal
        assert_eq!(*img.get_pixel(512 - 280, 512 - 280), d.background);

        // Body, hump and reflection dot are white
        assert_eq!(*img.get_pixel(225, 600), d.glyph);
        assert_eq!(*img.get_pixel(532, 300), d.glyph);
        assert_eq!(*img.get_pixel(492, 542), d.glyph);

        // Lens ring around (512, 562) and its dark core
        assert_eq!(*img.get_pixel(612, 562), d.accent);
        assert_eq!(*img.get_pixel(512, 512), d.background);
    }

    #[test]
    fn test_rounded_corners_are_cut() {
        let d = IconDesign::default();
        let img = generate_icon(1024);
        // Body spans x 205..=819, y 337..=767 with a 51px corner radius
        assert_eq!(*img.get_pixel(205, 600), d.glyph);
        assert_ne!(*img.get_pixel(206, 766), d.glyph);
        assert_eq!(*img.get_pixel(256, 766), d.glyph);
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(generate_icon(256), generate_icon(256));
    }

    #[test]
    fn test_glyph_scales_with_size() {
        let d = IconDesign::default();
        let mut img = RgbaImage::from_pixel(200, 200, d.background);
        draw_camera(&mut img, 100, 100, 100, &d);
        // Body of a 100px glyph spans x 70..=130
        assert_eq!(*img.get_pixel(72, 110), d.glyph);
        assert_eq!(*img.get_pixel(60, 110), d.background);
        assert_eq!(*img.get_pixel(160, 110), d.background);
    }

    #[test]
    fn test_point_in_triangle() {
        let (a, b, c) = ((0.0, 0.0), (10.0, 0.0), (0.0, 10.0));
        assert!(point_in_triangle(2.0, 2.0, a, b, c));
        assert!(point_in_triangle(5.0, 0.0, a, b, c));
        assert!(!point_in_triangle(8.0, 8.0, a, b, c));
    }
}

//! Rectangles, triangles and circles
//!
//! All shapes take corner or center coordinates and clip against the
//! framebuffer. Corners may be given in any order.

use crate::color::Color;
use crate::framebuffer::FrameBuffer;

/// Sort two values so the first is the smaller
fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b { (a, b) } else { (b, a) }
}

fn square(v: i64) -> i128 {
    i128::from(v) * i128::from(v)
}

fn isqrt(v: i128) -> i64 {
    u128::try_from(v).map_or(0, |v| v.isqrt() as i64)
}

/// Last column offset of the first octant of a midpoint circle
///
/// Largest `a` with `a <= b` in the octant, i.e. `2a² - a < r²`.
fn octant_end(r: i64) -> i64 {
    if r == 0 {
        return 0;
    }
    (1 + isqrt(8 * square(r) - 7)) / 4
}

/// Row offset `b` the midpoint recurrence holds at column offset `a`
///
/// Largest `b` with `b(b - 1) < r² - a²`.
fn octant_height(r: i64, a: i64) -> i64 {
    let n = square(r) - square(a);
    if n <= 0 {
        return 0;
    }
    (1 + isqrt(4 * n - 3)) / 2
}

/// Half height of the filled circle at column offset `d`, `0 <= d <= r`
///
/// Columns inside the octant end at the outline point `(d, b)`; further out
/// they end at the last octant point mirrored onto column `d`.
fn column_height(r: i64, d: i64) -> i64 {
    if d <= octant_end(r) {
        octant_height(r, d)
    } else {
        isqrt(square(r) - i128::from(d) * i128::from(d - 1) - 1)
    }
}

/// Call `f` once per maximal run in the union of `ranges` clipped to `0..=end`
fn for_each_range<const N: usize>(
    mut ranges: [(i64, i64); N],
    end: i64,
    mut f: impl FnMut(i64, i64),
) {
    ranges.sort_unstable();
    let mut next = 0;
    for (lo, hi) in ranges {
        let (lo, hi) = (lo.max(next), hi.min(end));
        if lo <= hi {
            f(lo, hi);
            next = hi + 1;
        }
    }
}

/// Offsets `d` for which `center + d` or `center - d` lies in `0..limit`
fn visible_offsets(center: i64, limit: u32) -> [(i64, i64); 2] {
    let last = i64::from(limit) - 1;
    [(-center, last - center), (center - last, center)]
}

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw a rectangle between two opposite corners, both included
    ///
    /// With `fill` the inside is painted too, one bank row at a time.
    pub fn rectangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color, fill: bool) {
        let (x0, x1) = ordered(x0, x1);
        let (y0, y1) = ordered(y0, y1);

        if fill {
            // Saturation only drops pixels at i32::MAX, which is never on screen
            let width = x0.abs_diff(x1).saturating_add(1);
            let height = y0.abs_diff(y1).saturating_add(1);
            self.fill_area(x0, y0, width, height, color);
        } else {
            let (x0, y0, x1, y1) = (
                i64::from(x0),
                i64::from(y0),
                i64::from(x1),
                i64::from(y1),
            );
            self.hspan(x0, x1, y0, color);
            self.hspan(x0, x1, y1, color);
            self.vspan(x0, y0, y1, color);
            self.vspan(x1, y0, y1, color);
        }
    }

    /// Draw the outline of a triangle
    pub fn triangle(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
        self.line(x0, y0, x1, y1, color);
        self.line(x1, y1, x2, y2, color);
        self.line(x2, y2, x0, y0, color);
    }

    /// Draw a filled triangle
    ///
    /// Scan lines are filled top to bottom: the upper half runs along edges
    /// 0-1 and 0-2, the lower half along edges 1-2 and 0-2. Rows outside the
    /// buffer are skipped without being computed.
    pub fn fill_triangle(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        color: Color,
    ) {
        let (mut p0, mut p1, mut p2) = (
            (i64::from(x0), i64::from(y0)),
            (i64::from(x1), i64::from(y1)),
            (i64::from(x2), i64::from(y2)),
        );
        if p0.1 > p1.1 {
            core::mem::swap(&mut p0, &mut p1);
        }
        if p1.1 > p2.1 {
            core::mem::swap(&mut p1, &mut p2);
        }
        if p0.1 > p1.1 {
            core::mem::swap(&mut p0, &mut p1);
        }
        let ((x0, y0), (x1, y1), (x2, y2)) = (p0, p1, p2);

        if y0 == y2 {
            let left = x0.min(x1).min(x2);
            let right = x0.max(x1).max(x2);
            self.hspan(left, right, y0, color);
            return;
        }

        let (dx01, dy01) = (i128::from(x1 - x0), i128::from(y1 - y0));
        let (dx02, dy02) = (i128::from(x2 - x0), i128::from(y2 - y0));
        let (dx12, dy12) = (i128::from(x2 - x1), i128::from(y2 - y1));
        let bottom = i64::from(self.height()) - 1;

        // With a flat bottom the upper half includes row y1, otherwise the
        // lower half starts there
        let last = if y1 == y2 { y1 } else { y1 - 1 };

        let first = y0.max(0);
        let mut sa = dx01 * i128::from(first - y0);
        let mut sb = dx02 * i128::from(first - y0);
        for y in first..=last.min(bottom) {
            let a = x0 + (sa / dy01) as i64;
            let b = x0 + (sb / dy02) as i64;
            sa += dx01;
            sb += dx02;
            self.hspan(a.min(b), a.max(b), y, color);
        }

        let first = (last + 1).max(0);
        let mut sa = dx12 * i128::from(first - y1);
        let mut sb = dx02 * i128::from(first - y0);
        for y in first..=y2.min(bottom) {
            let a = x1 + (sa / dy12) as i64;
            let b = x0 + (sb / dy02) as i64;
            sa += dx12;
            sb += dx02;
            self.hspan(a.min(b), a.max(b), y, color);
        }
    }

    /// Draw the outline of a circle of radius `r` centered on `(x0, y0)`
    ///
    /// Midpoint algorithm over one octant, mirrored eight ways. The octant is
    /// only walked where a mirrored point can land in the buffer; each walk
    /// starts from the recurrence state at its first column.
    pub fn circle(&mut self, x0: i32, y0: i32, r: u32, color: Color) {
        let (x0, y0, r) = (i64::from(x0), i64::from(y0), i64::from(r));
        let [xa, xb] = visible_offsets(x0, self.width());
        let [ya, yb] = visible_offsets(y0, self.height());

        for_each_range([xa, xb, ya, yb], octant_end(r), |first, last| {
            let mut a = first;
            let mut b = octant_height(r, a);
            let Ok(mut p) = i64::try_from(square(a + 1) + square(b) - i128::from(b) - square(r))
            else {
                return;
            };

            while a <= last {
                self.plot(x0 + a, y0 + b, color);
                self.plot(x0 + b, y0 + a, color);
                self.plot(x0 + a, y0 - b, color);
                self.plot(x0 + b, y0 - a, color);
                self.plot(x0 - a, y0 + b, color);
                self.plot(x0 - b, y0 + a, color);
                self.plot(x0 - a, y0 - b, color);
                self.plot(x0 - b, y0 - a, color);

                if p < 0 {
                    p += 3 + 2 * a;
                } else {
                    p += 5 + 2 * (a - b);
                    b -= 1;
                }
                a += 1;
            }
        });
    }

    /// Draw a filled circle of radius `r` centered on `(x0, y0)`
    ///
    /// Every visible column is one vertical run between the outline's top
    /// and bottom pixel, so each pixel is written once and drawing again
    /// with the inverse color restores the previous content.
    pub fn fill_circle(&mut self, x0: i32, y0: i32, r: u32, color: Color) {
        let (x0, y0, r) = (i64::from(x0), i64::from(y0), i64::from(r));

        for_each_range(visible_offsets(x0, self.width()), r, |first, last| {
            for d in first..=last {
                let h = column_height(r, d);
                self.vspan(x0 + d, y0 - h, y0 + h, color);
                if d != 0 {
                    self.vspan(x0 - d, y0 - h, y0 + h, color);
                }
            }
        });
    }

    /// Draw a rectangle with beveled corners
    ///
    /// Rectangles of 5 pixels or less on either side are not drawn.
    pub fn rounded_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color, fill: bool) {
        let (x0, x1) = ordered(x0, x1);
        let (y0, y1) = ordered(y0, y1);
        if x0.abs_diff(x1) <= 4 || y0.abs_diff(y1) <= 4 {
            return;
        }

        if fill {
            self.rectangle(x0, y0, x1, y1, color, true);
            let background = !color;
            for (cx, cy, dx, dy) in [(x0, y0, 1, 1), (x1, y0, -1, 1), (x0, y1, 1, -1), (x1, y1, -1, -1)]
            {
                self.set_pixel(cx, cy, background);
                self.set_pixel(cx + dx, cy, background);
                self.set_pixel(cx, cy + dy, background);
            }
        } else {
            self.set_pixel(x0 + 1, y0 + 1, color);
            self.set_pixel(x1 - 1, y0 + 1, color);
            self.set_pixel(x0 + 1, y1 - 1, color);
            self.set_pixel(x1 - 1, y1 - 1, color);

            let width = x0.abs_diff(x1) - 3;
            let height = y0.abs_diff(y1) - 3;
            self.hline(x0 + 2, y0, width, color);
            self.hline(x0 + 2, y1, width, color);
            self.vline(x0, y0 + 2, height, color);
            self.vline(x1, y0 + 2, height, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Dimensions;
    use alloc::vec;
    use alloc::vec::Vec;

    fn framebuffer() -> FrameBuffer<Vec<u8>> {
        FrameBuffer::new(vec![0u8; 1024], Dimensions::SSD1306_128X64).unwrap()
    }

    fn count_lit(fb: &FrameBuffer<Vec<u8>>) -> u32 {
        fb.as_bytes().iter().map(|b| b.count_ones()).sum()
    }

    fn is_on(fb: &FrameBuffer<Vec<u8>>, x: i32, y: i32) -> bool {
        fb.get_pixel(x, y) == Some(Color::On)
    }

    #[test]
    fn test_filled_rectangle_matches_per_pixel_reference() {
        for y0 in 0..8 {
            for height in 1..=20u32 {
                let mut fast = framebuffer();
                let mut reference = framebuffer();
                let y1 = y0 + height as i32 - 1;
                fast.rectangle(3, y0, 12, y1, Color::On, true);
                for y in y0..=y1 {
                    for x in 3..=12 {
                        reference.set_pixel(x, y, Color::On);
                    }
                }
                assert_eq!(fast.as_bytes(), reference.as_bytes(), "y0 {y0} height {height}");
            }
        }
    }

    #[test]
    fn test_rectangle_corners_in_any_order() {
        let mut a = framebuffer();
        let mut b = framebuffer();
        a.rectangle(10, 5, 30, 25, Color::On, false);
        b.rectangle(30, 25, 10, 5, Color::On, false);
        assert_eq!(a.as_bytes(), b.as_bytes());
        // Perimeter of a 21 x 21 square
        assert_eq!(count_lit(&a), 4 * 21 - 4);
        assert!(!is_on(&a, 20, 15));
    }

    #[test]
    fn test_filled_rectangle_clips() {
        let mut fb = framebuffer();
        fb.rectangle(-5, -5, 200, 100, Color::On, true);
        assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_triangle_outline_hits_vertices() {
        let mut fb = framebuffer();
        fb.triangle(5, 5, 40, 10, 20, 50, Color::On);
        for (x, y) in [(5, 5), (40, 10), (20, 50)] {
            assert!(is_on(&fb, x, y));
        }
        assert!(!is_on(&fb, 20, 20));
    }

    #[test]
    fn test_fill_triangle_flat_case() {
        let mut fb = framebuffer();
        fb.fill_triangle(10, 7, 3, 7, 25, 7, Color::On);
        assert_eq!(count_lit(&fb), 23);
        assert!(is_on(&fb, 3, 7));
        assert!(is_on(&fb, 25, 7));
    }

    #[test]
    fn test_fill_triangle_right_angle() {
        let mut fb = framebuffer();
        fb.fill_triangle(0, 0, 10, 10, 0, 10, Color::On);
        // Row y holds x = 0..=y
        for y in 0..=10 {
            for x in 0..=12 {
                assert_eq!(is_on(&fb, x, y), x <= y, "({x}, {y})");
            }
        }
    }

    #[test]
    fn test_fill_triangle_vertex_order_is_irrelevant() {
        let mut a = framebuffer();
        let mut b = framebuffer();
        a.fill_triangle(30, 2, 5, 40, 60, 25, Color::On);
        b.fill_triangle(60, 25, 30, 2, 5, 40, Color::On);
        assert_eq!(a.as_bytes(), b.as_bytes());
        assert!(is_on(&a, 30, 25));
    }

    #[test]
    fn test_fill_triangle_flat_top_and_bottom() {
        let mut fb = framebuffer();
        // Flat top: y0 == y1
        fb.fill_triangle(10, 10, 20, 10, 15, 20, Color::On);
        assert!(is_on(&fb, 10, 10));
        assert!(is_on(&fb, 20, 10));
        assert!(is_on(&fb, 15, 20));

        let mut fb = framebuffer();
        // Flat bottom: y1 == y2
        fb.fill_triangle(15, 10, 10, 20, 20, 20, Color::On);
        assert!(is_on(&fb, 15, 10));
        for x in 10..=20 {
            assert!(is_on(&fb, x, 20));
        }
    }

    /// Points produced by the midpoint algorithm for one octant
    fn midpoint_octant(r: i32) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        let (mut a, mut b, mut p) = (0, r, 1 - r);
        while a <= b {
            points.push((a, b));
            if p < 0 {
                p += 3 + 2 * a;
            } else {
                p += 5 + 2 * (a - b);
                b -= 1;
            }
            a += 1;
        }
        points
    }

    #[test]
    fn test_circle_matches_midpoint_reference() {
        let (cx, cy) = (64, 32);
        for r in [1, 5, 12, 20] {
            let mut fb = framebuffer();
            fb.circle(cx, cy, r as u32, Color::On);

            let mut reference = framebuffer();
            for (a, b) in midpoint_octant(r) {
                for (dx, dy) in [(a, b), (b, a)] {
                    for (sx, sy) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
                        reference.set_pixel(cx + sx * dx, cy + sy * dy, Color::On);
                    }
                }
            }
            assert_eq!(fb.as_bytes(), reference.as_bytes(), "r {r}");
        }
    }

    #[test]
    fn test_circle_radius_tolerance() {
        let (cx, cy, r) = (64, 32, 20);
        let mut fb = framebuffer();
        fb.circle(cx, cy, r as u32, Color::On);

        // Cardinal points sit exactly on the radius
        for (x, y) in [(cx + r, cy), (cx - r, cy), (cx, cy + r), (cx, cy - r)] {
            assert!(is_on(&fb, x, y));
        }

        // Every lit pixel is within one pixel of the ideal circle
        for y in 0..64 {
            for x in 0..128 {
                if is_on(&fb, x, y) {
                    let d2 = (x - cx).pow(2) + (y - cy).pow(2);
                    assert!((r - 1).pow(2) <= d2 && d2 <= (r + 1).pow(2), "({x}, {y})");
                }
            }
        }

        // The diagonal crosses the outline near r / sqrt(2)
        let diagonal = (0..=r).any(|d| is_on(&fb, cx + d, cy + d) && (13..=15).contains(&d));
        assert!(diagonal);
    }

    #[test]
    fn test_fill_circle_symmetric_and_solid() {
        let (cx, cy, r) = (40, 30, 10);
        let mut fb = framebuffer();
        fb.fill_circle(cx, cy, r as u32, Color::On);

        assert!(is_on(&fb, cx, cy));
        assert!(is_on(&fb, cx, cy - r));
        assert!(is_on(&fb, cx, cy + r));
        assert!(is_on(&fb, cx - r, cy));
        assert!(is_on(&fb, cx + r, cy));
        assert!(!is_on(&fb, cx + r, cy + r));

        for dy in -r..=r {
            for dx in -r..=r {
                let on = is_on(&fb, cx + dx, cy + dy);
                assert_eq!(on, is_on(&fb, cx - dx, cy + dy));
                assert_eq!(on, is_on(&fb, cx + dx, cy - dy));
                // Inside the inscribed square everything is lit
                if 2 * (dx * dx + dy * dy) <= r * r {
                    assert!(on, "({dx}, {dy})");
                }
            }
        }
    }

    #[test]
    fn test_fill_circle_covers_outline() {
        for r in 1..25u32 {
            let mut outline = framebuffer();
            outline.circle(64, 32, r, Color::On);
            let mut filled = framebuffer();
            filled.fill_circle(64, 32, r, Color::On);
            for (o, f) in outline.as_bytes().iter().zip(filled.as_bytes()) {
                assert_eq!(o & f, *o, "r {r}");
            }
        }
    }

    #[test]
    fn test_fill_circle_erases_what_it_draws() {
        let mut fb = framebuffer();
        fb.fill_circle(64, 32, 15, Color::On);
        assert!(count_lit(&fb) > 0);
        fb.fill_circle(64, 32, 15, Color::Off);
        assert_eq!(count_lit(&fb), 0);
    }

    #[test]
    fn test_extreme_rectangles() {
        let mut fb = framebuffer();
        fb.rectangle(i32::MIN, 0, i32::MAX, 10, Color::On, false);
        for x in 0..128 {
            assert!(is_on(&fb, x, 0));
            assert!(is_on(&fb, x, 10));
        }
        assert_eq!(count_lit(&fb), 2 * 128);

        let mut fb = framebuffer();
        fb.rectangle(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::On, true);
        assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_extreme_triangles() {
        let mut fb = framebuffer();
        fb.fill_triangle(i32::MIN, 0, i32::MAX, 0, 0, i32::MAX, Color::On);
        assert!(fb.as_bytes().iter().all(|&b| b == 0xFF));

        let mut fb = framebuffer();
        fb.fill_triangle(i32::MIN, 9, 0, 9, i32::MAX, 9, Color::On);
        assert_eq!(count_lit(&fb), 128);
        assert!((0..128).all(|x| is_on(&fb, x, 9)));

        let mut fb = framebuffer();
        fb.triangle(i32::MIN, i32::MIN, i32::MAX, 0, 0, i32::MAX, Color::On);
        fb.fill_triangle(
            i32::MAX,
            i32::MAX,
            i32::MAX - 1,
            i32::MAX,
            i32::MAX,
            i32::MAX - 7,
            Color::On,
        );
        fb.fill_triangle(0, i32::MIN, 1, i32::MIN, 2, -1, Color::On);
    }

    #[test]
    fn test_circle_far_off_screen_draws_nothing() {
        let mut fb = framebuffer();
        fb.circle(i32::MAX - 2, 10, 5, Color::On);
        fb.circle(i32::MIN, i32::MIN, u32::MAX, Color::On);
        fb.fill_circle(i32::MAX - 2, 10, 5, Color::On);
        fb.fill_circle(i32::MIN + 2, i32::MAX, 5, Color::On);
        assert_eq!(count_lit(&fb), 0);
    }

    #[test]
    fn test_huge_fill_circle_covers_screen() {
        for r in [1 << 30, u32::MAX] {
            let mut fb = framebuffer();
            fb.fill_circle(64, 32, r, Color::On);
            assert!(fb.as_bytes().iter().all(|&b| b == 0xFF), "r {r}");
        }
    }

    #[test]
    fn test_clipped_circle_matches_midpoint_reference() {
        for (cx, cy, r) in [(-1000, 32, 1050), (64, 1200, 1190), (300, -40, 250), (10, 20, 700)] {
            let mut fb = framebuffer();
            fb.circle(cx, cy, r as u32, Color::On);

            let mut reference = framebuffer();
            for (a, b) in midpoint_octant(r) {
                for (dx, dy) in [(a, b), (b, a)] {
                    for (sx, sy) in [(1, 1), (1, -1), (-1, 1), (-1, -1)] {
                        reference.set_pixel(cx + sx * dx, cy + sy * dy, Color::On);
                    }
                }
            }
            assert_eq!(fb.as_bytes(), reference.as_bytes(), "({cx}, {cy}) r {r}");
            assert!(count_lit(&fb) > 0);
        }
    }

    #[test]
    fn test_clipped_fill_circle_is_outline_hull() {
        for (cx, cy, r) in [(-1000, 32, 1050), (64, 32, 40), (130, -5, 30), (20, 70, 9)] {
            let mut fb = framebuffer();
            fb.fill_circle(cx, cy, r as u32, Color::On);

            // Each column spans the outline's extent in that column
            let mut extent = alloc::collections::BTreeMap::new();
            for (a, b) in midpoint_octant(r) {
                for (dx, dy) in [(a, b), (b, a), (-a, b), (-b, a)] {
                    let h = extent.entry(dx).or_insert(0);
                    *h = dy.max(*h);
                }
            }
            let mut reference = framebuffer();
            for (dx, h) in extent {
                for dy in -h..=h {
                    reference.set_pixel(cx + dx, cy + dy, Color::On);
                }
            }
            assert_eq!(fb.as_bytes(), reference.as_bytes(), "({cx}, {cy}) r {r}");
        }
    }

    #[test]
    fn test_rounded_rect_too_small_is_noop() {
        let mut fb = framebuffer();
        fb.rounded_rect(0, 0, 4, 20, Color::On, true);
        fb.rounded_rect(0, 0, 20, 4, Color::On, false);
        assert_eq!(count_lit(&fb), 0);
    }

    #[test]
    fn test_rounded_rect_filled_corners() {
        let mut fb = framebuffer();
        fb.rounded_rect(10, 10, 20, 20, Color::On, true);
        // 11 x 11 minus 3 pixels per corner
        assert_eq!(count_lit(&fb), 121 - 12);
        for (x, y) in [(10, 10), (11, 10), (10, 11), (20, 20), (19, 20), (20, 19)] {
            assert!(!is_on(&fb, x, y));
        }
        assert!(is_on(&fb, 11, 11));
    }

    #[test]
    fn test_rounded_rect_outline() {
        let mut a = framebuffer();
        a.rounded_rect(20, 20, 10, 10, Color::On, false);
        let mut b = framebuffer();
        b.rounded_rect(10, 10, 20, 20, Color::On, false);
        assert_eq!(a.as_bytes(), b.as_bytes());

        assert!(is_on(&a, 11, 11));
        assert!(is_on(&a, 19, 19));
        assert!(is_on(&a, 12, 10));
        assert!(is_on(&a, 18, 10));
        assert!(!is_on(&a, 11, 10));
        assert!(!is_on(&a, 10, 10));
        assert!(is_on(&a, 10, 12));
        assert!(is_on(&a, 20, 18));
        // 4 edges of 7 pixels plus 4 corner pixels
        assert_eq!(count_lit(&a), 4 * 7 + 4);
    }
}

//! Line drawing
//!
//! Horizontal runs touch one bit in consecutive bytes of a single bank.
//! Vertical runs touch one byte per bank and are split in three phases:
//! the partial top bank, whole bytes, and the partial bottom bank.

use crate::color::Color;
use crate::framebuffer::{FrameBuffer, clip_span, lsb2msb, msb2lsb, span_mask};

impl<B> FrameBuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Draw a horizontal line of `len` pixels starting at `(x, y)`
    pub fn hline(&mut self, x: i32, y: i32, len: u32, color: Color) {
        let Ok(y) = u32::try_from(y) else {
            return;
        };
        if y >= self.height() {
            return;
        }
        if let Some((x, len)) = clip_span(x, len, self.width()) {
            self.apply_run(y >> 3, x, len, 1 << (y & 7), color);
        }
    }

    /// Draw a vertical line of `len` pixels starting at `(x, y)`
    pub fn vline(&mut self, x: i32, y: i32, len: u32, color: Color) {
        self.fill_area(x, y, 1, len, color);
    }

    /// Draw a line between two points, both ends included
    ///
    /// Only the part of the major axis inside the buffer is stepped through;
    /// the error term is advanced in one go to the first visible column.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        let (x0, y0, x1, y1) = (
            i64::from(x0),
            i64::from(y0),
            i64::from(x1),
            i64::from(y1),
        );
        if x0 == x1 {
            self.vspan(x0, y0.min(y1), y0.max(y1), color);
            return;
        }
        if y0 == y1 {
            self.hspan(x0.min(x1), x0.max(x1), y0, color);
            return;
        }

        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        let (mut x0, mut y0, mut x1, mut y1) = if steep {
            (y0, x0, y1, x1)
        } else {
            (x0, y0, x1, y1)
        };
        if x0 > x1 {
            core::mem::swap(&mut x0, &mut x1);
            core::mem::swap(&mut y0, &mut y1);
        }

        let limit = i64::from(if steep { self.height() } else { self.width() });
        let first = x0.max(0);
        let last = x1.min(limit - 1);
        if first > last {
            return;
        }

        let dx = x1 - x0;
        let dy = (y1 - y0).abs();
        let step = if y0 < y1 { 1 } else { -1 };

        // Bresenham state after `first - x0` steps: `rises` minor steps taken,
        // error back in 0..dx
        let (skipped, half) = (i128::from(first - x0), i128::from(dx / 2));
        let rises = (skipped * i128::from(dy) - half + i128::from(dx) - 1)
            .div_euclid(i128::from(dx));
        let Ok(mut err) = i64::try_from(half - skipped * i128::from(dy) + rises * i128::from(dx))
        else {
            return;
        };
        let Ok(rises) = i64::try_from(rises) else {
            return;
        };
        let mut y = y0 + step * rises;

        for x in first..=last {
            if steep {
                self.plot(y, x, color);
            } else {
                self.plot(x, y, color);
            }
            err -= dy;
            if err < 0 {
                y += step;
                err += dx;
            }
        }
    }

    /// Horizontal run from `x0` to `x1` (both included) on row `y`
    pub(crate) fn hspan(&mut self, x0: i64, x1: i64, y: i64, color: Color) {
        let Ok(y) = u32::try_from(y) else {
            return;
        };
        if y >= self.height() {
            return;
        }
        let x0 = x0.max(0);
        let x1 = x1.min(i64::from(self.width()) - 1);
        if x0 > x1 {
            return;
        }
        self.apply_run(y >> 3, x0 as u32, (x1 - x0 + 1) as u32, 1 << (y & 7), color);
    }

    /// Vertical run from `y0` to `y1` (both included) in column `x`
    pub(crate) fn vspan(&mut self, x: i64, y0: i64, y1: i64, color: Color) {
        let Ok(x) = i32::try_from(x) else {
            return;
        };
        let y0 = y0.max(0);
        let y1 = y1.min(i64::from(self.height()) - 1);
        if y0 > y1 {
            return;
        }
        self.fill_area(x, y0 as i32, 1, (y1 - y0 + 1) as u32, color);
    }

    /// Fill a `width` x `height` area whose top left corner is `(x, y)`
    ///
    /// Each bank row gets one mask: a partial top mask, a whole byte, or a
    /// partial bottom mask.
    pub(crate) fn fill_area(&mut self, x: i32, y: i32, width: u32, height: u32, color: Color) {
        let Some((x, width)) = clip_span(x, width, self.width()) else {
            return;
        };
        let Some((y, mut remaining)) = clip_span(y, height, self.height()) else {
            return;
        };

        let mut bank = y >> 3;
        let offset = y & 7;

        if offset != 0 {
            let room = 8 - offset;
            if remaining < room {
                self.apply_run(bank, x, width, span_mask(offset, remaining), color);
                return;
            }
            self.apply_run(bank, x, width, msb2lsb(room), color);
            remaining -= room;
            bank += 1;
        }

        while remaining >= 8 {
            if width == 1 {
                let index = self.index(x, bank << 3);
                self.set_byte(index, color.fill_byte());
            } else {
                self.apply_run(bank, x, width, 0xFF, color);
            }
            remaining -= 8;
            bank += 1;
        }

        if remaining > 0 {
            self.apply_run(bank, x, width, lsb2msb(remaining), color);
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

    fn lit(fb: &FrameBuffer<Vec<u8>>) -> Vec<(i32, i32)> {
        let mut points = Vec::new();
        for y in 0..64 {
            for x in 0..128 {
                if fb.get_pixel(x, y) == Some(Color::On) {
                    points.push((x, y));
                }
            }
        }
        points
    }

    #[test]
    fn test_hline_on_off_round_trip() {
        let mut fb = framebuffer();
        fb.hline(10, 13, 20, Color::On);
        for x in 10..30 {
            assert_eq!(fb.get_pixel(x, 13), Some(Color::On));
        }
        assert_eq!(lit(&fb).len(), 20);

        fb.hline(10, 13, 20, Color::Off);
        assert!(fb.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_hline_clips() {
        let mut fb = framebuffer();
        fb.hline(120, 0, 50, Color::On);
        fb.hline(-5, 1, 10, Color::On);
        fb.hline(0, 64, 10, Color::On);
        fb.hline(0, -1, 10, Color::On);
        assert_eq!(lit(&fb).len(), 8 + 5);
        assert_eq!(fb.get_pixel(127, 0), Some(Color::On));
        assert_eq!(fb.get_pixel(4, 1), Some(Color::On));
        assert_eq!(fb.get_pixel(5, 1), Some(Color::Off));
    }

    #[test]
    fn test_vline_matches_per_pixel_reference() {
        for start in 0..16 {
            for len in 1..=20u32 {
                let mut fast = framebuffer();
                let mut reference = framebuffer();
                fast.vline(7, start, len, Color::On);
                for y in start..start + len as i32 {
                    reference.set_pixel(7, y, Color::On);
                }
                assert_eq!(fast.as_bytes(), reference.as_bytes(), "start {start} len {len}");

                // Erasing leaves nothing behind
                fast.vline(7, start, len, Color::Off);
                assert!(fast.as_bytes().iter().all(|&b| b == 0));
            }
        }
    }

    #[test]
    fn test_vline_clears_inside_lit_area() {
        let mut fb = framebuffer();
        fb.fill(Color::On);
        fb.vline(3, 5, 12, Color::Off);
        for y in 0..64 {
            let expected = if (5..17).contains(&y) {
                Color::Off
            } else {
                Color::On
            };
            assert_eq!(fb.get_pixel(3, y), Some(expected));
        }
        assert_eq!(fb.get_pixel(4, 6), Some(Color::On));
    }

    #[test]
    fn test_vline_clips() {
        let mut fb = framebuffer();
        fb.vline(0, 60, 20, Color::On);
        fb.vline(1, -3, 5, Color::On);
        fb.vline(128, 0, 5, Color::On);
        assert_eq!(lit(&fb), vec![(1, 0), (1, 1), (0, 60), (0, 61), (0, 62), (0, 63)]);
    }

    #[test]
    fn test_line_axis_aligned_either_direction() {
        let mut fb = framebuffer();
        fb.line(10, 5, 2, 5, Color::On);
        assert_eq!(lit(&fb).len(), 9);

        let mut fb = framebuffer();
        fb.line(4, 20, 4, 11, Color::On);
        assert_eq!(lit(&fb).len(), 10);
        assert_eq!(fb.get_pixel(4, 11), Some(Color::On));
        assert_eq!(fb.get_pixel(4, 20), Some(Color::On));
    }

    #[test]
    fn test_line_diagonal() {
        let mut fb = framebuffer();
        fb.line(0, 0, 7, 7, Color::On);
        let expected: Vec<(i32, i32)> = (0..8).map(|i| (i, i)).collect();
        assert_eq!(lit(&fb), expected);
    }

    #[test]
    fn test_line_endpoints_and_symmetry() {
        let segments = [(3, 4, 40, 19), (50, 2, 45, 60), (100, 50, 10, 30)];
        for (x0, y0, x1, y1) in segments {
            let mut forward = framebuffer();
            forward.line(x0, y0, x1, y1, Color::On);
            assert_eq!(forward.get_pixel(x0, y0), Some(Color::On));
            assert_eq!(forward.get_pixel(x1, y1), Some(Color::On));

            let major = x0.abs_diff(x1).max(y0.abs_diff(y1)) as usize + 1;
            assert_eq!(lit(&forward).len(), major);

            let mut backward = framebuffer();
            backward.line(x1, y1, x0, y0, Color::On);
            assert_eq!(lit(&backward).len(), major);
        }
    }

    #[test]
    fn test_line_clips_off_screen() {
        let mut fb = framebuffer();
        fb.line(-10, -10, 10, 10, Color::On);
        assert_eq!(fb.get_pixel(0, 0), Some(Color::On));
        assert_eq!(fb.get_pixel(10, 10), Some(Color::On));
        assert_eq!(lit(&fb).len(), 11);
    }

    #[test]
    fn test_line_extreme_coordinates() {
        let mut fb = framebuffer();
        fb.line(0, i32::MIN, 0, i32::MAX, Color::On);
        fb.line(i32::MIN, 5, i32::MAX, 5, Color::On);
        for y in 0..64 {
            assert_eq!(fb.get_pixel(0, y), Some(Color::On));
        }
        for x in 0..128 {
            assert_eq!(fb.get_pixel(x, 5), Some(Color::On));
        }
        assert_eq!(lit(&fb).len(), 64 + 128 - 1);

        // Diagonal across the whole i32 range passes through (0, 0)
        let mut fb = framebuffer();
        fb.line(i32::MIN, i32::MIN, i32::MAX, i32::MAX, Color::On);
        let expected: Vec<(i32, i32)> = (0..64).map(|i| (i, i)).collect();
        assert_eq!(lit(&fb), expected);

        let mut fb = framebuffer();
        fb.line(i32::MAX - 3, 0, i32::MAX, 40, Color::On);
        fb.line(i32::MIN, i32::MIN, i32::MIN + 7, i32::MAX, Color::On);
        assert!(lit(&fb).is_empty());
    }

    #[test]
    fn test_clipped_line_matches_unclipped_reference() {
        // Stepping from the line start and skipping ahead give the same pixels
        let segments = [(-40, -7, 150, 70), (-5, 90, 60, -30), (200, 3, -20, 50)];
        for (x0, y0, x1, y1) in segments {
            let mut fb = framebuffer();
            fb.line(x0, y0, x1, y1, Color::On);

            let mut reference = framebuffer();
            let (mut ax, mut ay, mut bx, mut by) = (x0, y0, x1, y1);
            let steep = ay.abs_diff(by) > ax.abs_diff(bx);
            if steep {
                core::mem::swap(&mut ax, &mut ay);
                core::mem::swap(&mut bx, &mut by);
            }
            if ax > bx {
                core::mem::swap(&mut ax, &mut bx);
                core::mem::swap(&mut ay, &mut by);
            }
            let (dx, dy) = (bx - ax, (by - ay).abs());
            let step = if ay < by { 1 } else { -1 };
            let (mut err, mut y) = (dx / 2, ay);
            for x in ax..=bx {
                if steep {
                    reference.set_pixel(y, x, Color::On);
                } else {
                    reference.set_pixel(x, y, Color::On);
                }
                err -= dy;
                if err < 0 {
                    y += step;
                    err += dx;
                }
            }
            assert_eq!(fb.as_bytes(), reference.as_bytes(), "{x0},{y0} -> {x1},{y1}");
        }
    }
}

//! Software back-end: rasterises segment draw commands into an ARGB buffer
//! with integer Bresenham lines.

use crate::renderer::{Renderer, Rgb, Rgba, Segment};

/// Background clear, the classic dark blue-grey (0.07, 0.13, 0.17).
const CLEAR: Rgba = 0xFF_12_21_2B;

#[derive(Default)]
pub struct Software {
    scratch: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Software {
    #[inline]
    fn plot(&mut self, x: i32, y: i32, col: Rgba) {
        if (0..self.width as i32).contains(&x) && (0..self.height as i32).contains(&y) {
            self.scratch[y as usize * self.width + x as usize] = col;
        }
    }

    /// Integer Bresenham line-drawing algorithm.
    fn draw_line(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, col: Rgba) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.plot(x0, y0, col);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                if x0 == x1 {
                    break;
                }
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                if y0 == y1 {
                    break;
                }
                err += dx;
                y0 += sy;
            }
        }
    }

    /// NDC -> pixel, undoing the scene's vertical flip.
    fn to_pixel(&self, p: [f32; 2]) -> (i32, i32) {
        let x = (p[0] + 1.0) * 0.5 * self.width as f32;
        let y = self.height as f32 - (p[1] + 1.0) * 0.5 * self.height as f32;
        (x.round() as i32, y.round() as i32)
    }
}

fn pack(c: Rgb) -> Rgba {
    let chan = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
    0xFF00_0000 | (chan(c[0]) << 16) | (chan(c[1]) << 8) | chan(c[2])
}

impl Renderer for Software {
    fn begin_frame(&mut self, width: usize, height: usize) {
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.scratch.resize(width * height, 0);
        }
        self.scratch.fill(CLEAR);
    }

    fn draw_segment(&mut self, seg: &Segment) {
        let (x0, y0) = self.to_pixel(seg.p1);
        let (x1, y1) = self.to_pixel(seg.p2);
        let col = pack(seg.color);

        // stroke wider lines by repeating along the minor axis
        let w = (seg.width.round() as i32).max(1);
        let x_major = (x1 - x0).abs() > (y1 - y0).abs();
        for k in 0..w {
            let o = k - w / 2;
            if x_major {
                self.draw_line(x0, y0 + o, x1, y1 + o, col);
            } else {
                self.draw_line(x0 + o, y0, x1 + o, y1, col);
            }
        }
    }

    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

//! Rendering abstraction layer.
//!
//! *The rest of the engine never touches a pixel buffer directly.*
//! It produces an ordered list of [`Segment`] draw commands (colored line
//! segments in normalized device coordinates) and hands them to a type that
//! implements [`Renderer`].
//!
//! * Back-ends are swappable without changing engine logic; the crate ships a
//!   software Bresenham rasterizer in [`software`].
//! * A blanket-impl [`RendererExt`] adds `draw_frame` so call-sites stay
//!   short.

pub mod scene;
pub mod software;

pub use software::Software;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// Command color, linear RGB in `0.0..=1.0`.
pub type Rgb = [f32; 3];

/// One colored line segment in normalized device coordinates.
///
/// `width` is the stroke width in pixels (GL line-width semantics: the line
/// thickens symmetrically around its ideal path).
#[derive(Clone, Copy, Debug)]
pub struct Segment {
    pub p1: [f32; 2],
    pub p2: [f32; 2],
    pub color: Rgb,
    pub width: f32,
}

/// A renderer that owns an internal scratch buffer for the whole frame.
///
/// `end_frame` hands the finished buffer to a user-supplied closure;
/// software callers typically forward it to their window manager.
pub trait Renderer {
    /// (Re)allocate internal scratch for the requested resolution and clear
    /// it.
    fn begin_frame(&mut self, width: usize, height: usize);

    /// Rasterise one segment into the internal buffer.
    fn draw_segment(&mut self, seg: &Segment);

    /// Finish the frame and **loan** the finished buffer to `submit`.
    ///
    /// `submit(&[Rgba], w, h)` is run exactly once per frame.
    fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize);
}

/// Convenience blanket-impl with a one-liner `draw_frame` adaptor.
pub trait RendererExt: Renderer {
    fn draw_frame<F>(&mut self, width: usize, height: usize, segments: &[Segment], submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        self.begin_frame(width, height);
        for seg in segments {
            self.draw_segment(seg);
        }
        self.end_frame(submit);
    }
}
impl<T: Renderer + ?Sized> RendererExt for T {}

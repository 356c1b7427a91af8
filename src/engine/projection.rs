//! Distance-to-screen mapping for the pseudo-3D view, plus the pixel-to-NDC
//! transform shared by every primitive.

use crate::engine::raycast::{HitSide, RayHit};
use crate::engine::types::ViewConfig;

/// One projected wall column, in pixel coordinates.
#[derive(Clone, Copy, Debug)]
pub struct WallColumn {
    /// Column centre line x.
    pub x: f32,
    pub top: f32,
    pub bottom: f32,
    pub side: HitSide,
}

/// Project one ray hit into a wall column.
///
/// ```text
/// line_height = cell_size * view_height / corrected_distance
/// ```
/// clamped to `view_height` so a near-zero distance fills the view instead of
/// overflowing it.
pub fn project_hit(hit: &RayHit, index: usize, cell_size: f32, view: &ViewConfig) -> WallColumn {
    let line_height = match cell_size * view.view_height / hit.corrected {
        h if h.is_finite() => h.clamp(0.0, view.view_height),
        // hit at (or inside) the eye: full column
        _ => view.view_height,
    };
    let top = view.center_y - line_height * 0.5;
    WallColumn {
        x: view.origin_x + index as f32 * view.column_width,
        top,
        bottom: top + line_height,
        side: hit.side,
    }
}

/// Map a pixel coordinate linearly into `[-1, 1]` normalized device space.
///
/// Stateless: callers that want screen-up vertical axes pass `h - y`
/// themselves.
#[inline]
pub fn pixel_to_ndc(pixel: f32, dim: usize) -> f32 {
    2.0 * pixel / dim as f32 - 1.0
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

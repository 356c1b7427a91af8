/// Constants that depend on the *window*, not on the map.
#[derive(Clone, Copy)]
pub struct Screen {
    pub w: usize,
    pub h: usize,
}

impl Screen {
    pub fn new(w: usize, h: usize) -> Self {
        Self { w, h }
    }
}

/// Placement of the pseudo-3D viewport inside the window.
///
/// Defaults reproduce the classic 1024x512 split layout: the top-down map on
/// the left half, wall columns starting at x = 530 on the right, eight pixels
/// per column, 320 pixels of usable column height centred on y = 160.
#[derive(Clone, Copy, Debug)]
pub struct ViewConfig {
    /// Left edge of the first wall column, in pixels.
    pub origin_x: f32,
    /// Horizontal pixels per ray column.
    pub column_width: f32,
    /// Maximum (and clamp) height of a wall column, in pixels.
    pub view_height: f32,
    /// Vertical centre line of the 3-D view, in pixels.
    pub center_y: f32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            origin_x: 530.0,
            column_width: 8.0,
            view_height: 320.0,
            center_y: 160.0,
        }
    }
}

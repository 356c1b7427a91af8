use glam::Vec2;
use thiserror::Error;

/// Binary occupancy grid (immutable after construction).
///
/// Cells are stored row-major, one `u8` per cell (0 = open, anything else =
/// wall). Row 0 is the topmost map row on screen; world Y grows with the row
/// index, and the vertical flip for display happens in the NDC mapping, not
/// here.
#[derive(Clone, Debug)]
pub struct GridMap {
    width: usize,
    height: usize,
    cell_size: f32,
    cells: Vec<u8>,
}

/// Errors that can be encountered while building a map.
#[derive(Error, Debug)]
pub enum GridError {
    /// The flat cell array does not match `width * height`.
    #[error("map is {width}x{height} but the cell array holds {got} flags")]
    CellCountMismatch {
        width: usize,
        height: usize,
        got: usize,
    },

    /// Zero-sized map or non-positive cell size.
    #[error("map dimensions and cell size must be positive")]
    DegenerateMap,
}

/// The compiled-in demo arena: fully walled border, a few interior pillars.
#[rustfmt::skip]
const DEMO_CELLS: [u8; 64] = [
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 1, 0, 0, 0, 0, 1,
    1, 0, 1, 0, 0, 1, 0, 1,
    1, 0, 1, 0, 0, 1, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 1, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
];

impl GridMap {
    /// Build a map from a flat row-major cell array.
    pub fn new(
        width: usize,
        height: usize,
        cell_size: f32,
        cells: Vec<u8>,
    ) -> Result<Self, GridError> {
        if width == 0 || height == 0 || cell_size <= 0.0 {
            return Err(GridError::DegenerateMap);
        }
        if cells.len() != width * height {
            return Err(GridError::CellCountMismatch {
                width,
                height,
                got: cells.len(),
            });
        }
        Ok(Self {
            width,
            height,
            cell_size,
            cells,
        })
    }

    /// The built-in 8x8 arena with 64-unit cells.
    pub fn demo() -> Self {
        Self {
            width: 8,
            height: 8,
            cell_size: 64.0,
            cells: DEMO_CELLS.to_vec(),
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Occupancy at cell `(cx, cy)`.
    ///
    /// Any probe outside `[0,width) x [0,height)` reads as **solid**. Ray
    /// traversal and collision both lean on this: an out-of-range lookup ends
    /// the walk instead of escaping the map.
    #[inline]
    pub fn is_wall(&self, cx: i32, cy: i32) -> bool {
        if cx < 0 || cy < 0 || cx as usize >= self.width || cy as usize >= self.height {
            return true;
        }
        self.cells[cy as usize * self.width + cx as usize] != 0
    }

    /// Cell containing the world-space point `p`.
    ///
    /// Floor division, so negative coordinates land in the mathematically
    /// correct (negative-index) cell instead of being truncated toward zero.
    #[inline]
    pub fn world_to_cell(&self, p: Vec2) -> (i32, i32) {
        (
            (p.x / self.cell_size).floor() as i32,
            (p.y / self.cell_size).floor() as i32,
        )
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

//! Grid-map raycasting engine.
//!
//! A fixed binary occupancy grid, a single player view-point, and a
//! two-phase grid-line ray caster feed a pseudo-3D wall view plus a top-down
//! debug map, all expressed as colored line-segment draw commands that a
//! pluggable renderer rasterises.
//!
//! ```bash
//! cargo run --release --bin view_sw
//! ```

pub mod engine;
pub mod renderer;
pub mod sim;
pub mod world;

//! Grid-traversal ray caster.
//!
//! Each ray is resolved in two independent phases: a walk along successive
//! *vertical* grid-line crossings, then a walk along *horizontal* crossings
//! with the reciprocal slope. The nearer candidate wins; which axis produced
//! it is kept so walls facing N/S and E/W can be shaded apart.

use glam::{Vec2, vec2};

use crate::engine::{normalize_deg, to_rad};
use crate::world::{GridMap, Player};

/// Distance reported for a ray that never found a wall (degenerate direction
/// or step cap exhausted). Large enough to project to a sub-pixel column.
pub const FAR: f32 = 100_000.0;

/// |cos| or |sin| at or below this: the ray never crosses that axis' lines.
const AXIS_EPS: f32 = 0.0001;

/// Pulls a probe sitting exactly on a grid line into the cell on the
/// negative side when walking toward -x / -y.
const LINE_NUDGE: f32 = 0.0001;

/// Vertical candidate wins any comparison within this margin, exact ties
/// included. The V/H shading split at grid-line corners depends on it.
const TIE_EPS: f32 = 1e-9;

/// Which family of grid lines a ray terminated on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitSide {
    /// A vertical grid line: the wall face runs north-south.
    Vertical,
    /// A horizontal grid line: the wall face runs east-west.
    Horizontal,
}

/// One ray's terminal record, rebuilt from scratch every frame.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    /// World-space intersection (or the last probe, if the ray gave up).
    pub point: Vec2,
    /// Raw Euclidean distance from the ray origin.
    pub distance: f32,
    /// `distance` scaled by cos(player angle - ray angle): fisheye removed.
    pub corrected: f32,
    pub side: HitSide,
}

/// Knobs for one casting pass.
#[derive(Clone, Copy, Debug)]
pub struct CastConfig {
    /// Rays per frame, one per wall column.
    pub ray_count: usize,
    /// Total horizontal field of view in degrees.
    pub fov_deg: f32,
    /// Upper bound on grid-line crossings per ray per axis.
    pub max_grid_steps: usize,
}

impl CastConfig {
    /// Classic defaults: 60 rays over 60 degrees, step cap sized to the map.
    pub fn for_grid(grid: &GridMap) -> Self {
        Self {
            ray_count: 60,
            fov_deg: 60.0,
            max_grid_steps: grid.width().max(grid.height()),
        }
    }
}

/// Cast the whole fan for one frame.
///
/// Rays sweep from `angle + fov/2` *downward* in equal decrements, which is
/// what orders the hits left-to-right on screen. The result always holds
/// exactly `ray_count` records; there is no partial output.
pub fn cast(grid: &GridMap, player: &Player, cfg: &CastConfig) -> Vec<RayHit> {
    let step_deg = cfg.fov_deg / cfg.ray_count as f32;
    let mut ray_deg = normalize_deg(player.angle_deg() + cfg.fov_deg * 0.5);

    let mut hits = Vec::with_capacity(cfg.ray_count);
    for _ in 0..cfg.ray_count {
        hits.push(cast_ray(grid, player, ray_deg, cfg.max_grid_steps));
        ray_deg = normalize_deg(ray_deg - step_deg);
    }
    hits
}

fn cast_ray(grid: &GridMap, player: &Player, ray_deg: f32, max_steps: usize) -> RayHit {
    let origin = player.pos();
    let rad = to_rad(ray_deg);

    let (v_point, v_dist) = vertical_search(grid, origin, rad, max_steps);
    let (h_point, h_dist) = horizontal_search(grid, origin, rad, max_steps);

    let (point, distance, side) = if v_dist - h_dist < TIE_EPS {
        (v_point, v_dist, HitSide::Vertical)
    } else {
        (h_point, h_dist, HitSide::Horizontal)
    };

    let corrected = distance * to_rad(normalize_deg(player.angle_deg() - ray_deg)).cos();
    RayHit {
        point,
        distance,
        corrected,
        side,
    }
}

/// Walk the ray across successive vertical grid lines (x = k * cell).
fn vertical_search(grid: &GridMap, origin: Vec2, rad: f32, max_steps: usize) -> (Vec2, f32) {
    let cell = grid.cell_size();
    let cos_a = rad.cos();

    let (first_x, step_x) = if cos_a > AXIS_EPS {
        // facing right: first line right of the origin
        ((origin.x / cell).floor() * cell + cell, cell)
    } else if cos_a < -AXIS_EPS {
        // facing left: nudge off the line so the probe lands in the left cell
        ((origin.x / cell).floor() * cell - LINE_NUDGE, -cell)
    } else {
        // ray parallel to the vertical lines: zero steps
        return (origin, FAR);
    };

    let tan_a = rad.tan();
    let probe = vec2(first_x, origin.y + (first_x - origin.x) * tan_a);
    let step = vec2(step_x, step_x * tan_a);
    march(grid, origin, probe, step, max_steps)
}

/// Walk the ray across successive horizontal grid lines (y = k * cell).
fn horizontal_search(grid: &GridMap, origin: Vec2, rad: f32, max_steps: usize) -> (Vec2, f32) {
    let cell = grid.cell_size();
    let sin_a = rad.sin();

    let (first_y, step_y) = if sin_a > AXIS_EPS {
        ((origin.y / cell).floor() * cell + cell, cell)
    } else if sin_a < -AXIS_EPS {
        ((origin.y / cell).floor() * cell - LINE_NUDGE, -cell)
    } else {
        return (origin, FAR);
    };

    let inv_tan = 1.0 / rad.tan();
    let probe = vec2(origin.x + (first_y - origin.y) * inv_tan, first_y);
    let step = vec2(step_y * inv_tan, step_y);
    march(grid, origin, probe, step, max_steps)
}

/// Advance probe by step until a solid cell absorbs the ray or the cap runs
/// out. Out-of-map probes read as solid, so a walled *or* open boundary both
/// terminate the walk.
fn march(grid: &GridMap, origin: Vec2, mut probe: Vec2, step: Vec2, max_steps: usize) -> (Vec2, f32) {
    for _ in 0..max_steps {
        let (cx, cy) = grid.world_to_cell(probe);
        if grid.is_wall(cx, cy) {
            return (probe, origin.distance(probe));
        }
        probe += step;
    }
    // Cap exhausted without a hit: keep the last probe for the debug overlay,
    // report the far sentinel.
    (probe, FAR)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn bordered_pocket() -> (GridMap, Player) {
        // all-wall 8x8 except one open cell at (3, 3)
        let mut cells = vec![1u8; 64];
        cells[3 * 8 + 3] = 0;
        let grid = GridMap::new(8, 8, 64.0, cells).unwrap();
        // centre of the pocket, facing east
        let player = Player::new(vec2(224.0, 224.0), 0.0);
        (grid, player)
    }

    #[test]
    fn always_exactly_ray_count_hits() {
        let grid = GridMap::demo();
        let player = Player::new(vec2(150.0, 400.0), 90.0);
        for count in [1, 7, 60, 121] {
            let cfg = CastConfig {
                ray_count: count,
                ..CastConfig::for_grid(&grid)
            };
            assert_eq!(cast(&grid, &player, &cfg).len(), count);
        }
    }

    #[test]
    fn sweep_starts_high_and_decreases() {
        let grid = GridMap::demo();
        // open area around (256, 256), facing east
        let player = Player::new(vec2(260.0, 260.0), 0.0);
        let cfg = CastConfig::for_grid(&grid);
        let hits = cast(&grid, &player, &cfg);

        // first ray points at +fov/2 (downward in world y), last at -fov/2
        assert!(hits[0].point.y > player.pos().y);
        assert!(hits[cfg.ray_count - 1].point.y < player.pos().y);
    }

    #[test]
    fn aligned_ray_needs_no_fisheye_correction() {
        let (grid, player) = bordered_pocket();
        let cfg = CastConfig {
            ray_count: 1,
            fov_deg: 0.0,
            max_grid_steps: 8,
        };
        let hit = cast(&grid, &player, &cfg)[0];
        assert_eq!(hit.corrected, hit.distance);
        // pocket centre to the east wall line
        assert!((hit.distance - 32.0).abs() < 1e-3);
        assert_eq!(hit.side, HitSide::Vertical);
    }

    #[test]
    fn degenerate_vertical_ray_still_hits_via_horizontal_search() {
        let (grid, player) = bordered_pocket();
        let player = Player::new(player.pos(), 90.0); // straight down
        let cfg = CastConfig {
            ray_count: 1,
            fov_deg: 0.0,
            max_grid_steps: 8,
        };
        let hit = cast(&grid, &player, &cfg)[0];
        assert_eq!(hit.side, HitSide::Horizontal);
        assert!((hit.distance - 32.0).abs() < 1e-3);
    }

    #[test]
    fn exhausted_step_cap_reports_far_and_favours_vertical() {
        // no walls at all: every in-bounds probe is open
        let grid = GridMap::new(8, 8, 64.0, vec![0; 64]).unwrap();
        let player = Player::new(vec2(260.0, 260.0), 40.0);
        let cfg = CastConfig {
            ray_count: 1,
            fov_deg: 0.0,
            max_grid_steps: 2, // too few crossings to reach the boundary
        };
        let hit = cast(&grid, &player, &cfg)[0];

        // both searches cap out at the sentinel: an exact tie, vertical wins
        assert_eq!(hit.distance, FAR);
        assert_eq!(hit.side, HitSide::Vertical);
        assert!(hit.corrected.is_finite());
        assert!(hit.point.is_finite());
    }

    #[test]
    fn open_boundary_terminates_on_the_outside_probe() {
        // open map, but enough steps to walk off the east edge
        let grid = GridMap::new(4, 4, 64.0, vec![0; 16]).unwrap();
        let player = Player::new(vec2(96.0, 96.0), 0.0);
        let cfg = CastConfig {
            ray_count: 1,
            fov_deg: 0.0,
            max_grid_steps: 8,
        };
        let hit = cast(&grid, &player, &cfg)[0];
        // crossings at 128, 192, 256(out-of-map, solid)
        assert!((hit.distance - 160.0).abs() < 1e-3);
        assert_eq!(hit.side, HitSide::Vertical);
    }

    #[test]
    fn pocket_cast_end_to_end() {
        let (grid, player) = bordered_pocket();
        let cfg = CastConfig::for_grid(&grid);
        let hits = cast(&grid, &player, &cfg);

        assert_eq!(hits.len(), 60);
        let diagonal = (512.0_f32 * 512.0 + 512.0 * 512.0).sqrt();
        assert!(hits.iter().any(|h| h.distance < diagonal));
        for h in &hits {
            assert!(h.distance > 0.0);
            assert!(h.corrected.is_finite());
        }
    }
}

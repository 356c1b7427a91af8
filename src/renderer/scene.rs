//! Per-frame draw-list composition.
//!
//! Builds the ordered segment list the renderer consumes: top-down map cells,
//! per-ray debug lines, the player marker, and the projected wall columns.
//! World units double as pixels in the 2-D view, exactly like the classic
//! split-screen layout this reproduces.

use glam::Vec2;

use crate::engine::{HitSide, RayHit, Screen, ViewConfig, pixel_to_ndc, project_hit};
use crate::renderer::{Rgb, Segment};
use crate::world::{GridMap, Player};

const WALL_CELL: Rgb = [1.0, 1.0, 1.0];
const OPEN_CELL: Rgb = [0.0, 0.0, 0.0];
const PLAYER: Rgb = [1.0, 1.0, 0.0];
const RAY: Rgb = [0.0, 1.0, 0.0];
// different tints so N/S and E/W wall faces read apart
const WALL_NS: Rgb = [0.9, 0.0, 0.0];
const WALL_EW: Rgb = [0.7, 0.0, 0.0];

/// Side length of the square player marker, in pixels.
const PLAYER_DOT: f32 = 20.0;
/// Heading indicator length as a multiple of the unit direction.
const HEADING_LEN: f32 = 10.0;

/// Compose one frame's draw list.
pub fn compose(
    grid: &GridMap,
    player: &Player,
    hits: &[RayHit],
    screen: &Screen,
    view: &ViewConfig,
) -> Vec<Segment> {
    let mut out = Vec::new();
    map_cells(grid, screen, &mut out);
    ray_lines(player, hits, screen, &mut out);
    player_marker(player, screen, &mut out);
    wall_columns(grid, hits, screen, view, &mut out);
    out
}

/// Pixel pair to NDC, flipping y so screen-up is +1.
fn ndc(screen: &Screen, x: f32, y: f32) -> [f32; 2] {
    [
        pixel_to_ndc(x, screen.w),
        pixel_to_ndc(screen.h as f32 - y, screen.h),
    ]
}

fn push(out: &mut Vec<Segment>, screen: &Screen, a: Vec2, b: Vec2, color: Rgb, width: f32) {
    out.push(Segment {
        p1: ndc(screen, a.x, a.y),
        p2: ndc(screen, b.x, b.y),
        color,
        width,
    });
}

/// Fill every map cell with horizontal scan segments, inset one pixel so the
/// grid lines stay visible between neighbours.
fn map_cells(grid: &GridMap, screen: &Screen, out: &mut Vec<Segment>) {
    let cell = grid.cell_size();
    for cy in 0..grid.height() as i32 {
        for cx in 0..grid.width() as i32 {
            let color = if grid.is_wall(cx, cy) {
                WALL_CELL
            } else {
                OPEN_CELL
            };
            let x0 = cx as f32 * cell;
            let y0 = cy as f32 * cell;
            let mut y = y0 + 1.0;
            while y < y0 + cell - 1.0 {
                push(
                    out,
                    screen,
                    Vec2::new(x0 + 1.0, y),
                    Vec2::new(x0 + cell - 1.0, y),
                    color,
                    1.0,
                );
                y += 1.0;
            }
        }
    }
}

/// One debug line from the eye to each ray's terminal point.
fn ray_lines(player: &Player, hits: &[RayHit], screen: &Screen, out: &mut Vec<Segment>) {
    for hit in hits {
        push(out, screen, player.pos(), hit.point, RAY, 1.0);
    }
}

/// Square dot at the eye plus a short heading line.
fn player_marker(player: &Player, screen: &Screen, out: &mut Vec<Segment>) {
    let pos = player.pos();
    let half = PLAYER_DOT * 0.5;
    let mut dy = -half;
    while dy < half {
        push(
            out,
            screen,
            Vec2::new(pos.x - half, pos.y + dy),
            Vec2::new(pos.x + half, pos.y + dy),
            PLAYER,
            1.0,
        );
        dy += 1.0;
    }
    push(
        out,
        screen,
        pos,
        pos + player.dir() * HEADING_LEN,
        PLAYER,
        1.0,
    );
}

/// One vertical column per ray in the 3-D viewport, tinted by hit side.
fn wall_columns(
    grid: &GridMap,
    hits: &[RayHit],
    screen: &Screen,
    view: &ViewConfig,
    out: &mut Vec<Segment>,
) {
    for (i, hit) in hits.iter().enumerate() {
        let col = project_hit(hit, i, grid.cell_size(), view);
        let color = match col.side {
            HitSide::Vertical => WALL_NS,
            HitSide::Horizontal => WALL_EW,
        };
        push(
            out,
            screen,
            Vec2::new(col.x, col.top),
            Vec2::new(col.x, col.bottom),
            color,
            view.column_width,
        );
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/

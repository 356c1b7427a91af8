use glam::{Vec2, vec2};

use crate::engine::{normalize_deg, to_rad};
use crate::world::GridMap;

/// Player view-point in world space.
///
/// Heading is tracked in degrees (`[0, 360)`, world Y grows downward); the
/// unit direction vector is re-derived on every heading change so the two can
/// never drift apart.
#[derive(Clone, Copy, Debug)]
pub struct Player {
    pos: Vec2,
    angle_deg: f32,
    dir: Vec2,
}

impl Player {
    /// Create a player at `pos`, facing `angle_deg`.
    pub fn new(pos: Vec2, angle_deg: f32) -> Self {
        let angle_deg = normalize_deg(angle_deg);
        Self {
            pos,
            angle_deg,
            dir: heading(angle_deg),
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn angle_deg(&self) -> f32 {
        self.angle_deg
    }

    /// Unit vector pointing where the player looks.
    #[inline]
    pub fn dir(&self) -> Vec2 {
        self.dir
    }

    /// Turn by `delta_deg` (any magnitude; the heading re-wraps into [0,360)).
    pub fn rotate(&mut self, delta_deg: f32) {
        self.angle_deg = normalize_deg(self.angle_deg + delta_deg);
        self.dir = heading(self.angle_deg);
    }

    /// Move `step` units along the heading (negative = backward), blocked per
    /// axis by the grid.
    ///
    /// Each axis is tested on its own: a probe point `probe` units ahead of
    /// the displacement on that axis alone is mapped to a cell, and the axis
    /// moves only if that cell is open. Walking diagonally into a wall thus
    /// slides along the open axis instead of stopping dead. Both probes use
    /// the pose from before either axis moved.
    pub fn try_move(&mut self, grid: &GridMap, step: f32, probe: f32) {
        let delta = self.dir * step;
        let start = self.pos;

        let xo = if delta.x < 0.0 { -probe } else { probe };
        let (cx, cy) = grid.world_to_cell(vec2(start.x + xo, start.y));
        if !grid.is_wall(cx, cy) {
            self.pos.x += delta.x;
        }

        let yo = if delta.y < 0.0 { -probe } else { probe };
        let (cx, cy) = grid.world_to_cell(vec2(start.x, start.y + yo));
        if !grid.is_wall(cx, cy) {
            self.pos.y += delta.y;
        }
    }
}

#[inline]
fn heading(angle_deg: f32) -> Vec2 {
    let (s, c) = to_rad(angle_deg).sin_cos();
    vec2(c, s)
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn open_3x3() -> GridMap {
        // walls everywhere except the centre cell
        GridMap::new(3, 3, 64.0, vec![1, 1, 1, 1, 0, 1, 1, 1, 1]).unwrap()
    }

    #[test]
    fn direction_follows_heading() {
        let mut p = Player::new(vec2(0.0, 0.0), 0.0);
        assert!((p.dir() - vec2(1.0, 0.0)).length() < 1e-6);

        p.rotate(90.0);
        assert!((p.dir() - vec2(0.0, 1.0)).length() < 1e-6);

        // Multi-wrap deltas keep angle and direction consistent.
        p.rotate(-720.0 - 90.0);
        assert_eq!(p.angle_deg(), 0.0);
        assert!((p.dir() - vec2(1.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn rotate_normalizes_into_range() {
        let mut p = Player::new(vec2(0.0, 0.0), 350.0);
        p.rotate(20.0);
        assert!((p.angle_deg() - 10.0).abs() < 1e-3);
        p.rotate(-30.0);
        assert!((p.angle_deg() - 340.0).abs() < 1e-3);
    }

    #[test]
    fn probe_cell_decides_whether_an_axis_moves() {
        let grid = open_3x3();
        // centre of the only open cell, facing the +x wall
        let mut p = Player::new(vec2(96.0, 96.0), 0.0);
        p.try_move(&grid, 5.0, 20.0);
        // x probe lands at 116 -> still cell 1, so the move goes through
        assert!((p.pos() - vec2(101.0, 96.0)).length() < 1e-6);

        // close to the east wall the probe crosses into the wall cell
        let mut p = Player::new(vec2(110.0, 96.0), 0.0);
        p.try_move(&grid, 5.0, 20.0);
        assert!((p.pos() - vec2(110.0, 96.0)).length() < 1e-6);
    }

    #[test]
    fn diagonal_against_wall_slides_on_open_axis() {
        // open 2x1 corridor with walls all around
        #[rustfmt::skip]
        let cells = vec![
            1, 1, 1, 1,
            1, 0, 0, 1,
            1, 1, 1, 1,
        ];
        let grid = GridMap::new(4, 3, 64.0, cells).unwrap();

        // facing down-right (45 deg) near the south wall: the +y probe
        // crosses into the wall row, the +x corridor stays open
        let mut p = Player::new(vec2(96.0, 115.0), 45.0);
        let before = p.pos();
        p.try_move(&grid, 10.0, 20.0);

        assert!(p.pos().x > before.x, "open axis should advance");
        assert_eq!(p.pos().y, before.y, "walled axis should hold");
    }

    #[test]
    fn backward_probe_looks_behind() {
        let grid = open_3x3();
        // facing east, backing toward the west wall
        let mut p = Player::new(vec2(82.0, 96.0), 0.0);
        p.try_move(&grid, -5.0, 20.0);
        // probe at 82-20=62 is inside the west wall: x must not move
        assert_eq!(p.pos().x, 82.0);
    }
}

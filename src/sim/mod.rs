//! Per-frame input application: turns held-key state into player rotation and
//! collision-checked movement.

use crate::world::{GridMap, Player};

/// One frame's worth of player intent, -1..=+1 per axis.
///
/// The windowing layer folds its four held keys (turn left/right, move
/// forward/backward) into the two signed axes.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputCmd {
    pub forward: f32,
    pub turn: f32,
}

/// Movement tuning, lifted out of the frame loop.
#[derive(Clone, Copy, Debug)]
pub struct MoveConfig {
    /// Degrees turned per frame at full deflection.
    pub turn_step_deg: f32,
    /// World units moved per frame at full deflection.
    pub move_step: f32,
    /// How far ahead of the eye each axis probes for a wall cell.
    pub wall_probe: f32,
}

impl Default for MoveConfig {
    fn default() -> Self {
        Self {
            turn_step_deg: 1.0,
            move_step: 1.0,
            wall_probe: 20.0,
        }
    }
}

/// Apply one frame of input: rotate first, then attempt the move.
pub fn player_input(player: &mut Player, grid: &GridMap, cmd: InputCmd, cfg: &MoveConfig) {
    if cmd.turn != 0.0 {
        player.rotate(cmd.turn * cfg.turn_step_deg);
    }
    if cmd.forward != 0.0 {
        player.try_move(grid, cmd.forward * cfg.move_step, cfg.wall_probe);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;

    #[test]
    fn idle_command_changes_nothing() {
        let grid = GridMap::demo();
        let mut player = Player::new(vec2(150.0, 400.0), 90.0);
        let before = (player.pos(), player.angle_deg());
        player_input(&mut player, &grid, InputCmd::default(), &MoveConfig::default());
        assert_eq!((player.pos(), player.angle_deg()), before);
    }

    #[test]
    fn turn_and_move_apply_config_steps() {
        let grid = GridMap::demo();
        let mut player = Player::new(vec2(256.0, 256.0), 0.0);
        let cfg = MoveConfig {
            turn_step_deg: 5.0,
            move_step: 2.0,
            wall_probe: 20.0,
        };

        player_input(
            &mut player,
            &grid,
            InputCmd {
                forward: 0.0,
                turn: 1.0,
            },
            &cfg,
        );
        assert!((player.angle_deg() - 5.0).abs() < 1e-3);

        let before = player.pos();
        player_input(
            &mut player,
            &grid,
            InputCmd {
                forward: 1.0,
                turn: 0.0,
            },
            &cfg,
        );
        assert!((player.pos().distance(before) - 2.0).abs() < 1e-3);
    }
}

use clap::Parser;
use glam::vec2;
use minifb::{Key, Window, WindowOptions};
use std::time::{Duration, Instant};

use gridcast_rs::{
    engine::{CastConfig, Screen, ViewConfig, cast},
    renderer::{RendererExt, Software, scene},
    sim::{InputCmd, MoveConfig, player_input},
    world::{GridMap, Player},
};

/// CLI options handled via `clap` derive.
#[derive(Parser, Debug)]
#[command(version, about = "Grid raycaster: top-down map + pseudo-3D view")]
struct Opts {
    /// Rays cast per frame (one wall column each)
    #[arg(long, default_value_t = 60)]
    rays: usize,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f32,

    /// Window width in pixels
    #[arg(long, default_value_t = 1024)]
    width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 512)]
    height: usize,
}

fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();

    let grid = GridMap::demo();
    let mut player = Player::new(vec2(150.0, 400.0), 90.0);

    let cast_cfg = CastConfig {
        ray_count: opts.rays,
        fov_deg: opts.fov,
        ..CastConfig::for_grid(&grid)
    };
    let move_cfg = MoveConfig::default();
    let screen = Screen::new(opts.width, opts.height);
    let view = ViewConfig::default();

    let mut renderer = Software::default();
    let mut win = Window::new(
        "Grid Raycaster",
        opts.width,
        opts.height,
        WindowOptions::default(),
    )?;
    win.set_target_fps(60);

    // ────────────────── benchmarking state ──────────────────────────────
    let mut acc_time = Duration::ZERO; // cumulated render time
    let mut acc_frames = 0usize; // frames in the current window
    let mut last_print = Instant::now(); // when we printed last

    while win.is_open() && !win.is_key_down(Key::Escape) {
        let t0 = Instant::now();

        /* fold the four held keys into the two signed axes ------------- */
        let mut cmd = InputCmd::default();
        if win.is_key_down(Key::W) || win.is_key_down(Key::Up) {
            cmd.forward += 1.0;
        }
        if win.is_key_down(Key::S) || win.is_key_down(Key::Down) {
            cmd.forward -= 1.0;
        }
        if win.is_key_down(Key::A) || win.is_key_down(Key::Left) {
            cmd.turn += 1.0;
        }
        if win.is_key_down(Key::D) || win.is_key_down(Key::Right) {
            cmd.turn -= 1.0;
        }

        player_input(&mut player, &grid, cmd, &move_cfg);

        /* cast, compose, rasterise, present ---------------------------- */
        let hits = cast(&grid, &player, &cast_cfg);
        let segments = scene::compose(&grid, &player, &hits, &screen, &view);

        renderer.draw_frame(screen.w, screen.h, &segments, |fb, w, h| {
            acc_time += t0.elapsed();
            acc_frames += 1;
            win.update_with_buffer(fb, w, h).unwrap()
        });

        if last_print.elapsed() >= Duration::from_secs(3) {
            let avg_ms = acc_time.as_secs_f64() * 1000.0 / acc_frames as f64;
            println!("avg render: {:.2} ms  ({:.1} FPS)", avg_ms, 1000.0 / avg_ms);
            acc_time = Duration::ZERO;
            acc_frames = 0;
            last_print = Instant::now();
        }
    }
    Ok(())
}

//! Tilt Cube entry point
//!
//! The simulation core is headless; a renderer backend is expected to drive
//! it. Running the binary directly performs a scripted smoke session: tick
//! the simulation at the gated cadence with a held steering key until the
//! cube falls off the plane, then exercise the reset path.

use std::time::Instant;

use tiltcube::Tuning;
use tiltcube::sim::{GameState, InputState, Scene, TickGate, tick};

fn main() {
    env_logger::init();

    let tuning_path = std::env::var("TILTCUBE_TUNING").ok();
    let tuning = Tuning::load_or_default(tuning_path.as_deref());

    let seed = std::env::var("TILTCUBE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    log::info!("Tilt Cube starting (seed {seed})");
    log::info!("Core is headless - hook a renderer to drive a real session");

    let mut state = GameState::with_tuning(seed, tuning);
    let start = Instant::now();
    let mut gate = TickGate::new(0.0);
    let mut last_status = state.status_text();
    log::info!("{last_status}");

    // Hold steer-forward until the cube accelerates off the plane
    let held = InputState {
        steer_forward: true,
        ..Default::default()
    };

    while state.phase.is_active() {
        let now = start.elapsed().as_secs_f64();
        if gate.ready(now) {
            tick(&mut state, &held);
            let status = state.status_text();
            if status != last_status {
                log::info!("{status}");
                last_status = status;
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(1));
    }

    println!("{}", state.status_text());

    // A reset from a terminal phase starts a fresh run
    let reset = InputState {
        reset: true,
        ..Default::default()
    };
    tick(&mut state, &reset);
    log::info!("After reset: {}", state.status_text());

    let scene = Scene::capture(&state);
    match serde_json::to_string_pretty(&scene) {
        Ok(json) => log::debug!("Final scene snapshot:\n{json}"),
        Err(e) => log::warn!("Could not serialize scene: {e}"),
    }
}

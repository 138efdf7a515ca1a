//! Fixed timestep simulation tick
//!
//! One tick advances the session by a single fixed step. The driver is
//! responsible for calling [`tick`] at the right cadence, using [`TickGate`]
//! against wall time; all constants in the update are per-tick quantities,
//! so there is no dt parameter.

use crate::consts::*;
use crate::fmod_tau;

use super::collision::{collision, respawn_point};
use super::state::{GameState, Phase};

/// Held-key state for a single tick (deterministic)
///
/// Steering keys tilt the plane; the cube rolls downhill. Camera keys swing
/// the orbit view. `reset` is a one-shot the driver clears after a tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub steer_left: bool,
    pub steer_right: bool,
    pub steer_forward: bool,
    pub steer_back: bool,
    pub cam_left: bool,
    pub cam_right: bool,
    /// Tracked by the input layer but with no simulation effect
    pub reserved: [bool; 4],
    /// Restart request; honored only in a terminal phase
    pub reset: bool,
}

/// Gates ticks to a minimum wall-clock interval.
///
/// Timestamps are caller-supplied seconds, so the gate itself stays pure and
/// testable. The gate resets to "now" on each granted tick rather than
/// accumulating a remainder; the simulation rate therefore never exceeds
/// 1/`TICK_INTERVAL` but can fall below it on slow frames.
#[derive(Debug, Clone, Copy)]
pub struct TickGate {
    last: f64,
}

impl TickGate {
    pub fn new(now: f64) -> Self {
        Self { last: now }
    }

    /// Returns true and rearms if at least `TICK_INTERVAL` has elapsed
    pub fn ready(&mut self, now: f64) -> bool {
        if now - self.last > TICK_INTERVAL {
            self.last = now;
            true
        } else {
            false
        }
    }
}

/// Advance the session by one fixed step.
///
/// Gameplay (collection, level progression, bounds, steering) only runs while
/// the session is active at tick entry; once active, all of those substeps
/// run even if the phase changes partway through the tick. Cosmetic spin,
/// position integration, and the camera run in every phase.
pub fn tick(state: &mut GameState, input: &InputState) {
    if input.reset {
        if state.phase.is_terminal() {
            state.reset();
        } else {
            log::debug!("Reset request ignored while active");
        }
    }

    if state.phase.is_active() {
        // Collect the point, respawn it, maybe level up
        if collision(state.player_pos, state.point_pos) {
            state.point_pos = respawn_point(&mut state.rng, state.player_pos);
            state.points_got += 1;
            log::trace!("Point collected ({}/{})", state.points_got, state.tuning.needed_to_win);
            if state.points_got >= state.tuning.needed_to_win {
                state.points_got = 0;
                state.advance_level();
            }
        }

        // Falling off the plane ends the run, even on the tick the final
        // level was just cleared
        if state.player_pos.x.abs() > ARENA_BOUND || state.player_pos.z.abs() > ARENA_BOUND {
            let level = state.phase.level_magnitude(state.tuning.levels_to_win);
            state.phase = Phase::Lost { level };
            log::info!("Out of bounds on level {level} with {} points", state.points_got);
        }

        // Steering: held keys feed the accumulators, which compound every
        // tick - this is what makes motion accelerate within a level
        if input.steer_left {
            state.tilt_vel_x += state.rot_speed;
        }
        if input.steer_right {
            state.tilt_vel_x -= state.rot_speed;
        }
        if input.steer_forward {
            state.tilt_vel_z += state.rot_speed;
        }
        if input.steer_back {
            state.tilt_vel_z -= state.rot_speed;
        }

        state.tilt_vel_x *= state.rot_mult;
        state.tilt_vel_z *= state.rot_mult;

        state.plane_rot.x += state.tilt_vel_x;
        state.plane_rot.z += state.tilt_vel_z;

        state.player_rot.x = state.plane_rot.x;
        state.player_rot.z = state.plane_rot.z;
    }

    // Cosmetic spin scales with the signed level, so it reverses while lost
    let spin = POINT_SPIN_RATE * state.signed_level() as f32;
    state.point_rot.x += spin;
    state.point_rot.y += spin;

    // The plane's tilt drives the cube; rotation wraps to one turn before
    // division so extreme tilts don't launch the cube off instantly
    state.player_pos.x -= fmod_tau(state.plane_rot.z) / state.speed_div;
    state.player_pos.z += fmod_tau(state.plane_rot.x) / state.speed_div;

    // Spring-like orbit camera: input pushes, decay pulls back to center
    if input.cam_left {
        state.cam_angle += state.tuning.cam_rot_speed;
    }
    if input.cam_right {
        state.cam_angle -= state.tuning.cam_rot_speed;
    }
    state.cam_angle *= CAM_DECAY;
}

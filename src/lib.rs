//! Tilt Cube - a tilt-the-floor cube arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (state machine, tick, collisions, scene output)
//! - `tuning`: Data-driven game balance
//!
//! Rendering and windowing are external collaborators: a frontend feeds held-key
//! state into [`sim::tick`] at a fixed cadence and reads back a [`sim::Scene`]
//! snapshot plus HUD text. Nothing in this crate touches a graphics API.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Minimum wall-clock interval between simulation ticks (seconds, ~100 Hz)
    pub const TICK_INTERVAL: f64 = 0.01;

    /// Level index that counts as winning the session
    pub const LEVELS_TO_WIN: u32 = 11;
    /// Points needed to complete a level
    pub const NEEDED_TO_WIN: u32 = 5;

    /// Base steering accumulator increment per held key per tick
    pub const ROT_SPEED: f32 = 0.0003;
    /// Base multiplicative growth applied to the steering accumulators each tick
    pub const ROT_MULT: f32 = 1.00001;
    /// Starting divisor converting plane rotation into player velocity
    pub const START_SPEED_DIV: f32 = 3.0;

    /// Camera angle change per tick while a camera key is held
    pub const CAM_ROT_SPEED: f32 = 0.01;
    /// Per-tick exponential decay of the camera angle toward zero
    pub const CAM_DECAY: f32 = 0.99;
    /// Camera angle after a session reset (radians)
    pub const CAM_RESET_ANGLE: f32 = std::f32::consts::FRAC_PI_4;

    /// Half-width of the axis-aligned overlap test between player and point
    pub const COLLISION_BOUND: f32 = 1.4;
    /// Player position magnitude on x or z beyond which the level is lost
    pub const ARENA_BOUND: f32 = 10.5;
    /// Integer grid range for point placement: [GRID_MIN, GRID_MAX] inclusive
    pub const GRID_MIN: i32 = -10;
    pub const GRID_MAX: i32 = 9;
    /// Resample attempts before falling back to a nearest-free-cell scan
    pub const RESPAWN_ATTEMPTS: u32 = 1024;

    /// Cosmetic point spin per tick per level
    pub const POINT_SPIN_RATE: f32 = 0.005;

    /// Fixed player height above the plane
    pub const PLAYER_Y: f32 = 0.001;
    /// Plane height in world space
    pub const PLANE_Y: f32 = -1.0;
    /// Point marker render scale
    pub const POINT_SCALE: f32 = 0.5;

    /// Camera orbit radius and height; eye = (cos(a+π/4)·R, H, sin(a+π/4)·R)
    pub const CAM_ORBIT_RADIUS: f32 = 40.0;
    pub const CAM_HEIGHT: f32 = 20.0;
    pub const CAM_ORBIT_OFFSET: f32 = std::f32::consts::FRAC_PI_4;
}

/// Reduce a rotation to its remainder modulo 2π, keeping the sign of the input
/// (C `fmod` semantics, which Rust's float `%` shares).
#[inline]
pub fn fmod_tau(angle: f32) -> f32 {
    angle % std::f32::consts::TAU
}

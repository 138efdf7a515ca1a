//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (the driver gates ticks to real time)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod scene;
pub mod state;
pub mod tick;

pub use collision::{collision, respawn_point};
pub use scene::{EntityTransform, Scene, camera_eye};
pub use state::{GameState, Phase};
pub use tick::{InputState, TickGate, tick};

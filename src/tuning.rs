//! Data-driven game balance
//!
//! Base values for level progression and steering. The simulation scales its
//! working copies of these as levels advance; the bases here stay fixed for
//! the lifetime of a session.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Balance parameters for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Level index that counts as winning
    pub levels_to_win: u32,
    /// Points required to complete a level
    pub needed_to_win: u32,
    /// Base steering increment per held key per tick
    pub rot_speed: f32,
    /// Base multiplicative growth of the steering accumulators
    pub rot_mult: f32,
    /// Camera angle change per tick while a camera key is held
    pub cam_rot_speed: f32,
    /// Starting divisor converting plane rotation into player velocity
    pub start_speed_div: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            levels_to_win: LEVELS_TO_WIN,
            needed_to_win: NEEDED_TO_WIN,
            rot_speed: ROT_SPEED,
            rot_mult: ROT_MULT,
            cam_rot_speed: CAM_ROT_SPEED,
            start_speed_div: START_SPEED_DIV,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any failure.
    ///
    /// A missing or malformed file is not an error: the game always starts.
    pub fn load_or_default(path: Option<&str>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {path}");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring malformed tuning file {path}: {e}");
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {path}: {e}");
                Self::default()
            }
        }
    }
}

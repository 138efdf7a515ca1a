//! Game state and the level-progression state machine

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::respawn_point;
use crate::consts::*;
use crate::tuning::Tuning;

/// Where the session stands in the level progression.
///
/// The phase also has a packed signed-integer view (positive = active level,
/// `LEVELS_TO_WIN` = won, negative = lost on `|level|`, never zero) produced
/// by [`Phase::signed_level`]; the cosmetic point spin and the lose text
/// consume that form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Normal play on the given level (1-based, below the winning level)
    Active { level: u32 },
    /// Terminal: every level cleared
    Won,
    /// Terminal: fell off the plane on the given level
    Lost { level: u32 },
}

impl Phase {
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Active { .. })
    }

    /// Terminal phases accept a reset request; Active ignores it.
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// The level this phase is on, ignoring won/lost sign
    pub fn level_magnitude(&self, levels_to_win: u32) -> u32 {
        match *self {
            Phase::Active { level } | Phase::Lost { level } => level,
            Phase::Won => levels_to_win,
        }
    }

    /// Packed sign/magnitude integer view of the phase; never zero
    pub fn signed_level(&self, levels_to_win: u32) -> i32 {
        match *self {
            Phase::Active { level } => level as i32,
            Phase::Won => levels_to_win as i32,
            Phase::Lost { level } => -(level as i32),
        }
    }
}

/// Complete session state, mutated only by [`super::tick`] and [`GameState::reset`]
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed this session's RNG started from
    pub seed: u64,
    /// Level progression state machine
    pub phase: Phase,
    /// Points collected on the current level
    pub points_got: u32,
    /// Player cube position; y is pinned at `PLAYER_Y`
    pub player_pos: Vec3,
    /// Player render rotation; x/z mirror `plane_rot` while active
    pub player_rot: Vec3,
    /// True rotation integrator for the tilting plane
    pub plane_rot: Vec3,
    /// Current collectible location (never overlaps the player at spawn)
    pub point_pos: Vec3,
    /// Cosmetic collectible spin
    pub point_rot: Vec3,
    /// Steering accumulator feeding `plane_rot.x`
    pub tilt_vel_x: f32,
    /// Steering accumulator feeding `plane_rot.z`
    pub tilt_vel_z: f32,
    /// Orbit camera angle; view-only, decays toward zero every tick
    pub cam_angle: f32,
    /// Working steering increment, grows on even level-ups
    pub rot_speed: f32,
    /// Working accumulator growth factor, compounds on odd level-ups
    pub rot_mult: f32,
    /// Working speed divisor, shrinks on odd level-ups (player gets faster)
    pub speed_div: f32,
    /// Base balance values the working copies scale from
    pub tuning: Tuning,
    /// Deterministic RNG, used only for point placement
    pub rng: Pcg32,
}

impl GameState {
    /// Create a fresh session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a fresh session with explicit tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let player_pos = Vec3::new(0.0, PLAYER_Y, 0.0);
        let mut rng = Pcg32::seed_from_u64(seed);
        let point_pos = respawn_point(&mut rng, player_pos);

        Self {
            seed,
            phase: Phase::Active { level: 1 },
            points_got: 0,
            player_pos,
            player_rot: Vec3::ZERO,
            plane_rot: Vec3::ZERO,
            point_pos,
            point_rot: Vec3::new(std::f32::consts::FRAC_PI_4, 0.0, 0.0),
            tilt_vel_x: 0.0,
            tilt_vel_z: 0.0,
            cam_angle: 0.0,
            rot_speed: tuning.rot_speed,
            rot_mult: tuning.rot_mult,
            speed_div: tuning.start_speed_div,
            tuning,
            rng,
        }
    }

    /// Restore the session to its initial values, keeping the RNG stream.
    ///
    /// The camera lands at `CAM_RESET_ANGLE` rather than the 0.0 a fresh
    /// session starts from.
    pub fn reset(&mut self) {
        self.phase = Phase::Active { level: 1 };
        self.points_got = 0;
        self.player_pos = Vec3::new(0.0, PLAYER_Y, 0.0);
        self.player_rot = Vec3::ZERO;
        self.plane_rot = Vec3::ZERO;
        self.point_pos = respawn_point(&mut self.rng, self.player_pos);
        self.point_rot = Vec3::new(std::f32::consts::FRAC_PI_4, 0.0, 0.0);
        self.tilt_vel_x = 0.0;
        self.tilt_vel_z = 0.0;
        self.cam_angle = CAM_RESET_ANGLE;
        self.rot_speed = self.tuning.rot_speed;
        self.rot_mult = self.tuning.rot_mult;
        self.speed_div = self.tuning.start_speed_div;

        log::info!("Session reset (seed {})", self.seed);
    }

    /// Packed sign/magnitude view of the current phase; never zero
    pub fn signed_level(&self) -> i32 {
        self.phase.signed_level(self.tuning.levels_to_win)
    }

    /// Advance to the next level and scale difficulty.
    ///
    /// Even levels only steepen the steering increment. Odd levels speed the
    /// player up AND compound the accumulator growth. The asymmetry is
    /// intentional; do not collapse the two branches.
    pub(crate) fn advance_level(&mut self) {
        let level = self.phase.level_magnitude(self.tuning.levels_to_win);
        let next = level + 1;

        if next % 2 == 0 {
            self.rot_speed += self.tuning.rot_speed / 2.0;
        } else {
            self.speed_div /= 1.5;
            self.rot_mult *= self.tuning.rot_mult;
        }

        self.phase = if next >= self.tuning.levels_to_win {
            log::info!("All {} levels cleared", self.tuning.levels_to_win);
            Phase::Won
        } else {
            log::debug!("Level up: {next}");
            Phase::Active { level: next }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::collision;

    #[test]
    fn initial_state() {
        let state = GameState::new(7);
        assert_eq!(state.phase, Phase::Active { level: 1 });
        assert_eq!(state.points_got, 0);
        assert_eq!(state.signed_level(), 1);
        assert_eq!(state.cam_angle, 0.0);
        assert!(!collision(state.player_pos, state.point_pos));
    }

    #[test]
    fn signed_level_encoding() {
        let t = Tuning::default();
        assert_eq!(Phase::Active { level: 3 }.signed_level(t.levels_to_win), 3);
        assert_eq!(Phase::Won.signed_level(t.levels_to_win), 11);
        assert_eq!(Phase::Lost { level: 4 }.signed_level(t.levels_to_win), -4);
    }

    #[test]
    fn reset_restores_initial_values_with_reset_camera() {
        let mut state = GameState::new(42);
        state.phase = Phase::Lost { level: 6 };
        state.points_got = 3;
        state.player_pos.x = 11.0;
        state.plane_rot.z = 2.5;
        state.tilt_vel_z = 0.4;
        state.rot_speed = 0.9;
        state.rot_mult = 1.1;
        state.speed_div = 0.5;

        state.reset();

        assert_eq!(state.phase, Phase::Active { level: 1 });
        assert_eq!(state.points_got, 0);
        assert_eq!(state.player_pos, Vec3::new(0.0, crate::consts::PLAYER_Y, 0.0));
        assert_eq!(state.plane_rot, Vec3::ZERO);
        assert_eq!(state.tilt_vel_z, 0.0);
        assert_eq!(state.rot_speed, state.tuning.rot_speed);
        assert_eq!(state.rot_mult, state.tuning.rot_mult);
        assert_eq!(state.speed_div, state.tuning.start_speed_div);
        assert_eq!(state.cam_angle, crate::consts::CAM_RESET_ANGLE);
        assert!(!collision(state.player_pos, state.point_pos));
    }

    #[test]
    fn even_level_up_only_steepens_rot_speed() {
        let mut state = GameState::new(1);
        state.phase = Phase::Active { level: 5 };
        let (mult, div) = (state.rot_mult, state.speed_div);

        state.advance_level();

        assert_eq!(state.phase, Phase::Active { level: 6 });
        assert_eq!(
            state.rot_speed,
            state.tuning.rot_speed + state.tuning.rot_speed / 2.0
        );
        assert_eq!(state.rot_mult, mult);
        assert_eq!(state.speed_div, div);
    }

    #[test]
    fn odd_level_up_applies_both_effects() {
        let mut state = GameState::new(1);
        state.phase = Phase::Active { level: 4 };
        let speed = state.rot_speed;

        state.advance_level();

        assert_eq!(state.phase, Phase::Active { level: 5 });
        assert_eq!(state.rot_speed, speed);
        assert_eq!(state.rot_mult, state.tuning.rot_mult * state.tuning.rot_mult);
        assert_eq!(state.speed_div, state.tuning.start_speed_div / 1.5);
    }

    #[test]
    fn reaching_final_level_is_won() {
        let mut state = GameState::new(1);
        state.phase = Phase::Active { level: 10 };
        state.advance_level();
        assert_eq!(state.phase, Phase::Won);
        assert_eq!(state.signed_level(), 11);
    }
}

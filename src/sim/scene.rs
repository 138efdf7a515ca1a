//! Renderable scene description
//!
//! A [`Scene`] is a fully-formed snapshot taken after a tick completes; a
//! renderer only ever reads these, never the live state. Transform vectors
//! follow the backend's model-matrix convention: `pre_rot` is applied before
//! the translation, `post_rot` after it, then `scale`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::state::{GameState, Phase};

/// Placement of one renderable entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityTransform {
    pub position: Vec3,
    /// Rotation applied before the translation
    pub pre_rot: Vec3,
    /// Rotation applied after the translation
    pub post_rot: Vec3,
    pub scale: Vec3,
}

/// Snapshot of everything a frontend needs to draw a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub player: EntityTransform,
    pub plane: EntityTransform,
    pub point: EntityTransform,
    /// Orbit camera angle; see [`camera_eye`]
    pub cam_angle: f32,
}

impl Scene {
    /// Capture the current frame from the session state.
    ///
    /// The plane's tilt is shared by the plane itself and the point marker
    /// (the point sits on the plane), while the player cube carries its own
    /// mirrored copy so it tumbles in place.
    pub fn capture(state: &GameState) -> Self {
        Self {
            player: EntityTransform {
                position: state.player_pos,
                pre_rot: state.player_rot,
                post_rot: Vec3::ZERO,
                scale: Vec3::ONE,
            },
            plane: EntityTransform {
                position: Vec3::new(0.0, PLANE_Y, 0.0),
                pre_rot: state.plane_rot,
                post_rot: Vec3::ZERO,
                scale: Vec3::ONE,
            },
            point: EntityTransform {
                position: state.point_pos,
                pre_rot: state.plane_rot,
                post_rot: state.point_rot,
                scale: Vec3::splat(POINT_SCALE),
            },
            cam_angle: state.cam_angle,
        }
    }
}

/// Eye position for the orbit camera, looking at the origin with up +Y
pub fn camera_eye(cam_angle: f32) -> Vec3 {
    let a = cam_angle + CAM_ORBIT_OFFSET;
    Vec3::new(a.cos() * CAM_ORBIT_RADIUS, CAM_HEIGHT, a.sin() * CAM_ORBIT_RADIUS)
}

impl GameState {
    /// HUD line for the current phase
    pub fn status_text(&self) -> String {
        match self.phase {
            Phase::Active { level } => {
                format!("Points: {} / Level: {}", self.points_got, level)
            }
            Phase::Won => "You win!".to_string(),
            Phase::Lost { level } => {
                format!("You lose with {} points on level {}.", self.points_got, level)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_places_entities() {
        let mut state = GameState::new(21);
        state.player_pos = Vec3::new(1.0, PLAYER_Y, -2.0);
        state.plane_rot = Vec3::new(0.2, 0.0, -0.1);
        state.player_rot = Vec3::new(0.2, 0.0, -0.1);

        let scene = Scene::capture(&state);

        assert_eq!(scene.player.position, state.player_pos);
        assert_eq!(scene.player.pre_rot, state.player_rot);
        assert_eq!(scene.player.post_rot, Vec3::ZERO);
        assert_eq!(scene.player.scale, Vec3::ONE);

        assert_eq!(scene.plane.position, Vec3::new(0.0, PLANE_Y, 0.0));
        assert_eq!(scene.plane.pre_rot, state.plane_rot);

        // The point rides the plane's tilt and spins on its own
        assert_eq!(scene.point.position, state.point_pos);
        assert_eq!(scene.point.pre_rot, state.plane_rot);
        assert_eq!(scene.point.post_rot, state.point_rot);
        assert_eq!(scene.point.scale, Vec3::splat(POINT_SCALE));
    }

    #[test]
    fn camera_orbit_formula() {
        let eye = camera_eye(0.0);
        let a = CAM_ORBIT_OFFSET;
        assert_eq!(eye, Vec3::new(a.cos() * 40.0, 20.0, a.sin() * 40.0));

        // The orbit stays on a circle of radius 40 at height 20
        let eye = camera_eye(1.3);
        assert!((eye.x.hypot(eye.z) - CAM_ORBIT_RADIUS).abs() < 1e-3);
        assert_eq!(eye.y, CAM_HEIGHT);
    }

    #[test]
    fn status_text_matches_phase() {
        let mut state = GameState::new(4);
        state.phase = Phase::Active { level: 2 };
        state.points_got = 3;
        assert_eq!(state.status_text(), "Points: 3 / Level: 2");

        state.phase = Phase::Won;
        assert_eq!(state.status_text(), "You win!");

        state.phase = Phase::Lost { level: 7 };
        state.points_got = 4;
        assert_eq!(state.status_text(), "You lose with 4 points on level 7.");
    }

    #[test]
    fn scene_round_trips_through_json() {
        let state = GameState::new(99);
        let scene = Scene::capture(&state);
        let json = serde_json::to_string(&scene).unwrap();
        let back: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, back);
    }
}

//! Player/point overlap testing and collectible placement

use glam::Vec3;
use rand::Rng;
use rand_pcg::Pcg32;

use crate::consts::*;

/// Axis-aligned overlap test between two entities on the plane.
///
/// Only x and z matter; the test is a box approximation, not a distance
/// check, so the diagonal reach is wider than the cardinal reach.
#[inline]
pub fn collision(a: Vec3, b: Vec3) -> bool {
    (a.x - b.x).abs() < COLLISION_BOUND && (a.z - b.z).abs() < COLLISION_BOUND
}

/// Pick a fresh spot for the point marker, clear of the player.
///
/// Uniform integer grid cells in [GRID_MIN, GRID_MAX] on both axes, resampled
/// while the candidate overlaps the player. With a 20x20 grid and one obstacle
/// the loop clears almost immediately; the attempt cap and nearest-free-cell
/// fallback keep it total even if the tuning ever shrinks the arena.
pub fn respawn_point(rng: &mut Pcg32, player: Vec3) -> Vec3 {
    for _ in 0..RESPAWN_ATTEMPTS {
        let x = rng.random_range(GRID_MIN..=GRID_MAX) as f32;
        let z = rng.random_range(GRID_MIN..=GRID_MAX) as f32;
        let candidate = Vec3::new(x, 0.0, z);
        if !collision(player, candidate) {
            return candidate;
        }
    }

    log::warn!("Point respawn exhausted {RESPAWN_ATTEMPTS} samples; scanning grid");
    nearest_free_cell(player)
}

/// Deterministic fallback: the grid cell closest to the player that does not
/// overlap it. Only reachable when rejection sampling is pathologically
/// unlucky or the grid is nearly saturated by the collision bound.
fn nearest_free_cell(player: Vec3) -> Vec3 {
    let mut best: Option<(f32, Vec3)> = None;
    for x in GRID_MIN..=GRID_MAX {
        for z in GRID_MIN..=GRID_MAX {
            let cell = Vec3::new(x as f32, 0.0, z as f32);
            if collision(player, cell) {
                continue;
            }
            let d = (cell.x - player.x).powi(2) + (cell.z - player.z).powi(2);
            if best.map(|(bd, _)| d < bd).unwrap_or(true) {
                best = Some((d, cell));
            }
        }
    }
    // The collision box covers at most 3x3 cells of a 20x20 grid, so a free
    // cell always exists.
    best.map(|(_, cell)| cell).unwrap_or(Vec3::ZERO)
}

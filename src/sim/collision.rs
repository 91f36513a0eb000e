//! Axis-aligned bounding box collision between the player and obstacles

use glam::Vec2;

use super::obstacle::Obstacle;
use super::player::Player;

/// Axis-aligned rectangle defined by its top-left corner and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// True when the rectangles share a non-empty area.
    /// Touching edges (zero-width overlap) do not count.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.pos.x < b_max.x && other.pos.x < a_max.x && self.pos.y < b_max.y && other.pos.y < a_max.y
    }
}

impl From<&Player> for Aabb {
    fn from(player: &Player) -> Self {
        Self {
            pos: player.pos,
            size: player.size,
        }
    }
}

impl From<&Obstacle> for Aabb {
    fn from(obstacle: &Obstacle) -> Self {
        Self {
            pos: obstacle.pos,
            size: obstacle.size,
        }
    }
}

/// Index of the first obstacle (in spawn order) overlapping the player
pub fn first_collision(player: &Player, obstacles: &[Obstacle]) -> Option<usize> {
    let player_box = Aabb::from(player);
    obstacles
        .iter()
        .position(|o| player_box.intersects(&Aabb::from(o)))
}

/// Whether the player overlaps any active obstacle
pub fn check_collision(player: &Player, obstacles: &[Obstacle]) -> bool {
    first_collision(player, obstacles).is_some()
}

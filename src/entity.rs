//! Player, enemy and potion records drawn on top of the map.

use crate::config::TILE_SIZE;
use macroquad::prelude::*;

/// Image plus position shared by everything drawn on top of the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite<I> {
    /// Image the 16x16 frame is cut from.
    pub image: I,
    /// Top-left corner in logical pixels.
    pub pos: Vec2,
}

impl<I> Sprite<I> {
    /// A sprite with its top-left corner at `(x, y)`.
    pub fn new(image: I, x: f32, y: f32) -> Self {
        Self {
            image,
            pos: vec2(x, y),
        }
    }

    /// Screen-space box covered by the sprite's frame.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, TILE_SIZE as f32, TILE_SIZE as f32)
    }
}

/// The keyboard-controlled character.
#[derive(Debug, Clone, PartialEq)]
pub struct Player<I> {
    /// Image and position.
    pub sprite: Sprite<I>,
    /// Unbounded below; saturates at `i32::MAX` when healed.
    pub health: i32,
}

/// Whether an enemy means to chase the player.
///
/// Only honoured under `ChaseRule::PursuersOnly`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Chases the player.
    Pursuing,
    /// Stands still.
    Passive,
}

/// A skeleton that walks toward the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy<I> {
    /// Image and position.
    pub sprite: Sprite<I>,
    /// Chase intent, see `ChaseRule`.
    pub behavior: Behavior,
}

impl<I> Enemy<I> {
    /// Move `step` toward `target` on each axis independently, never overshooting equality.
    pub fn step_toward(&mut self, target: Vec2, step: f32) {
        let pos = &mut self.sprite.pos;
        if pos.x > target.x {
            pos.x -= step;
        } else if pos.x < target.x {
            pos.x += step;
        }
        if pos.y > target.y {
            pos.y -= step;
        } else if pos.y < target.y {
            pos.y += step;
        }
    }
}

/// Lifecycle of a potion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotionState {
    /// Drawn and can be picked up.
    Active,
    /// Picked up under `PickupRule::Overlap`; no longer drawn.
    Collected,
}

/// A pickup that heals the player.
#[derive(Debug, Clone, PartialEq)]
pub struct Potion<I> {
    /// Image and position.
    pub sprite: Sprite<I>,
    /// Health added per pickup.
    pub heal: i32,
    /// Whether the potion has been collected.
    pub state: PotionState,
}

impl<I> Potion<I> {
    /// A fresh, active potion.
    pub fn new(sprite: Sprite<I>, heal: i32) -> Self {
        Self {
            sprite,
            heal,
            state: PotionState::Active,
        }
    }

    /// Not yet collected.
    pub fn is_active(&self) -> bool {
        self.state == PotionState::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enemy_at(x: f32, y: f32) -> Enemy<()> {
        Enemy {
            sprite: Sprite::new((), x, y),
            behavior: Behavior::Pursuing,
        }
    }

    #[test]
    fn step_toward_moves_each_axis_separately() {
        let mut e = enemy_at(10.0, 3.0);
        e.step_toward(vec2(0.0, 3.0), 1.0);
        assert_eq!(e.sprite.pos, vec2(9.0, 3.0));

        e.step_toward(vec2(20.0, 0.0), 1.0);
        assert_eq!(e.sprite.pos, vec2(10.0, 2.0));
    }

    #[test]
    fn bounds_cover_one_tile() {
        let s = Sprite::new((), 4.0, 8.0);
        assert_eq!(s.bounds(), Rect::new(4.0, 8.0, 16.0, 16.0));
    }
}

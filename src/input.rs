//! Directional input, polled once per tick.

use macroquad::prelude::*;

/// One of the four arrow directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in the order they are applied.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// Unit step on screen axes (y grows downwards).
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => vec2(0.0, -1.0),
            Direction::Down => vec2(0.0, 1.0),
            Direction::Left => vec2(-1.0, 0.0),
            Direction::Right => vec2(1.0, 0.0),
        }
    }
}

/// Source of directional key state for a tick.
pub trait InputPoller {
    /// True while `dir` is held down.
    fn is_pressed(&self, dir: Direction) -> bool;
}

/// Held directions given up front; handy for scripted ticks.
impl InputPoller for [Direction] {
    fn is_pressed(&self, dir: Direction) -> bool {
        self.contains(&dir)
    }
}

/// Arrow keys on the macroquad window.
#[derive(Debug, Default, Clone, Copy)]
pub struct Keyboard;

impl InputPoller for Keyboard {
    fn is_pressed(&self, dir: Direction) -> bool {
        let key = match dir {
            Direction::Up => KeyCode::Up,
            Direction::Down => KeyCode::Down,
            Direction::Left => KeyCode::Left,
            Direction::Right => KeyCode::Right,
        };
        is_key_down(key)
    }
}

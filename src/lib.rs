#![warn(missing_docs)]

//! Small top-down Macroquad demo: a Tiled JSON map, a player, chasing
//! enemies and healing potions.

pub mod assets;
pub mod config;
mod entity;
mod error;
mod game;
pub mod input;
pub mod render;
mod tilemap;

pub use assets::Assets;
pub use config::{AssetPaths, ChaseRule, GameConfig, GameRules, PickupRule};
pub use entity::{Behavior, Enemy, Player, Potion, PotionState, Sprite};
pub use error::{AssetError, MapError};
pub use game::{Game, Pickup, SpriteImages, TickReport};
pub use input::{Direction, InputPoller, Keyboard};
pub use render::{ScreenSurface, Surface, Viewport};
pub use tilemap::{Layer, TileId, TilemapDocument, TilesetRef};

//! Fixed constants and runtime settings for the demo.

use macroquad::prelude::*;
use std::path::PathBuf;

/// Edge length of a map tile and of every sprite frame, in pixels.
pub const TILE_SIZE: u32 = 16;
/// Number of tile columns in the tileset atlas.
pub const TILESET_COLUMNS: u32 = 28;

/// Width of the surface the game draws on, before scaling.
pub const LOGICAL_WIDTH: f32 = 320.0;
/// Height of the surface the game draws on, before scaling.
pub const LOGICAL_HEIGHT: f32 = 240.0;

/// Initial window width in pixels.
pub const WINDOW_WIDTH: i32 = 640;
/// Initial window height in pixels.
pub const WINDOW_HEIGHT: i32 = 480;
/// Window title bar text.
pub const WINDOW_TITLE: &str = "Hello, World!";

/// Distance the player moves per tick for each held direction.
pub const PLAYER_STEP: f32 = 2.0;
/// Distance an enemy moves per tick on each axis.
pub const ENEMY_STEP: f32 = 1.0;

/// Clear color behind the map.
pub const BACKGROUND: Color = Color::new(0x80 as f32 / 255.0, 0xa0 as f32 / 255.0, 0xc0 as f32 / 255.0, 1.0);

/// Relative locations of everything loaded at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    /// Player sprite image.
    pub player: PathBuf,
    /// Image shared by every enemy.
    pub enemy: PathBuf,
    /// Image shared by every potion.
    pub potion: PathBuf,
    /// Tileset atlas, `TILESET_COLUMNS` tiles wide.
    pub tileset: PathBuf,
    /// Tiled JSON map.
    pub tilemap: PathBuf,
}

impl AssetPaths {
    /// Resolve the default layout under `root`.
    pub fn under(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            player: root.join("images/ninja.png"),
            enemy: root.join("images/skeleton.png"),
            potion: root.join("images/potion.png"),
            tileset: root.join("maps/tileset.png"),
            tilemap: root.join("maps/map.json"),
        }
    }
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self::under("assets")
    }
}

/// Which enemies take a chase step each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChaseRule {
    /// Every enemy chases, whatever its behavior says.
    #[default]
    Everyone,
    /// Only enemies with `Behavior::Pursuing` chase.
    PursuersOnly,
}

/// How a potion decides it has been picked up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickupRule {
    /// Triggers whenever the potion sits to the right of the player.
    /// The potion is never consumed and heals again on every such tick.
    #[default]
    AheadOnX,
    /// Triggers once when the potion's box overlaps the player's, then the
    /// potion is collected.
    Overlap,
}

/// Gameplay toggles applied by `Game::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameRules {
    /// Which enemies move each tick.
    pub chase: ChaseRule,
    /// How potions are picked up.
    pub pickup: PickupRule,
}

/// Runtime configuration for the demo.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Where startup assets are read from.
    pub assets: AssetPaths,
    /// Rules the game loop runs with.
    pub rules: GameRules,
}

/// Macroquad window settings: fixed title and size.
pub fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.into(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        ..Default::default()
    }
}

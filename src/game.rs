use crate::config::{
    ChaseRule, GameRules, PickupRule, BACKGROUND, ENEMY_STEP, PLAYER_STEP, TILESET_COLUMNS,
    TILE_SIZE,
};
use crate::entity::{Behavior, Enemy, Player, Potion, PotionState, Sprite};
use crate::input::{Direction, InputPoller};
use crate::render::grid::{cell_to_pixel, sprite_frame, tile_source};
use crate::render::Surface;
use crate::tilemap::TilemapDocument;
use log::info;

/// The images the demo scene is built from.
#[derive(Debug, Clone)]
pub struct SpriteImages<I> {
    /// Player sprite.
    pub player: I,
    /// Shared by every enemy.
    pub enemy: I,
    /// Shared by every potion.
    pub potion: I,
    /// Tile atlas for the map.
    pub tileset: I,
}

/// A potion pickup that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pickup {
    /// Index into [`Game::potions`].
    pub potion: usize,
    /// Health the potion added.
    pub heal: i32,
    /// Player health after the heal was applied.
    pub health: i32,
}

/// What changed during one call to [`Game::update`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Pickups in potion order.
    pub pickups: Vec<Pickup>,
}

/// Owns the scene and advances it one tick at a time.
///
/// The enemy and potion lists are fixed when the game is built; ticks move
/// and update entities but never add or remove them.
#[derive(Debug)]
pub struct Game<I> {
    player: Player<I>,
    enemies: Vec<Enemy<I>>,
    potions: Vec<Potion<I>>,
    tilemap: TilemapDocument,
    tileset: I,
    rules: GameRules,
}

impl<I> Game<I> {
    /// Build a game from an explicit scene.
    pub fn new(
        player: Player<I>,
        enemies: Vec<Enemy<I>>,
        potions: Vec<Potion<I>>,
        tilemap: TilemapDocument,
        tileset: I,
        rules: GameRules,
    ) -> Self {
        Self {
            player,
            enemies,
            potions,
            tilemap,
            tileset,
            rules,
        }
    }

    /// The player as of the last tick.
    pub fn player(&self) -> &Player<I> {
        &self.player
    }

    /// Enemies in draw order.
    pub fn enemies(&self) -> &[Enemy<I>] {
        &self.enemies
    }

    /// Potions in draw order, collected ones included.
    pub fn potions(&self) -> &[Potion<I>] {
        &self.potions
    }

    /// The map being drawn.
    pub fn tilemap(&self) -> &TilemapDocument {
        &self.tilemap
    }

    /// Rules this game was built with.
    pub fn rules(&self) -> GameRules {
        self.rules
    }

    /// Advance one tick: move the player, step enemies, resolve pickups.
    pub fn update<P: InputPoller + ?Sized>(&mut self, input: &P) -> TickReport {
        for dir in Direction::ALL {
            if input.is_pressed(dir) {
                self.player.sprite.pos += dir.delta() * PLAYER_STEP;
            }
        }

        let target = self.player.sprite.pos;
        for enemy in &mut self.enemies {
            let chases = match self.rules.chase {
                ChaseRule::Everyone => true,
                ChaseRule::PursuersOnly => enemy.behavior == Behavior::Pursuing,
            };
            if chases {
                enemy.step_toward(target, ENEMY_STEP);
            }
        }

        let mut report = TickReport::default();
        let player_box = self.player.sprite.bounds();
        for (idx, potion) in self.potions.iter_mut().enumerate() {
            let picked = match self.rules.pickup {
                PickupRule::AheadOnX => potion.sprite.pos.x > self.player.sprite.pos.x,
                PickupRule::Overlap => {
                    potion.is_active() && potion.sprite.bounds().overlaps(&player_box)
                }
            };
            if !picked {
                continue;
            }
            if self.rules.pickup == PickupRule::Overlap {
                potion.state = PotionState::Collected;
            }

            self.player.health = self.player.health.saturating_add(potion.heal);
            info!(
                "Picked up potion. Player healed by {}, new health: {}",
                potion.heal, self.player.health
            );
            report.pickups.push(Pickup {
                potion: idx,
                heal: potion.heal,
                health: self.player.health,
            });
        }

        report
    }

    /// Paint the map, then the player, enemies and remaining potions on top.
    pub fn draw<S: Surface<Image = I>>(&self, surface: &mut S) {
        surface.fill(BACKGROUND);

        for layer in self.tilemap.layers.iter().filter(|l| l.visible) {
            for (idx, tile) in layer.tiles() {
                let Some(id) = tile else { continue };
                surface.blit(
                    &self.tileset,
                    tile_source(id, TILESET_COLUMNS, TILE_SIZE),
                    cell_to_pixel(idx, layer.width, TILE_SIZE),
                );
            }
        }

        let frame = sprite_frame(TILE_SIZE);
        let sprites = std::iter::once(&self.player.sprite)
            .chain(self.enemies.iter().map(|e| &e.sprite))
            .chain(self.potions.iter().filter(|p| p.is_active()).map(|p| &p.sprite));
        for sprite in sprites {
            surface.blit(&sprite.image, frame, sprite.pos);
        }
    }
}

impl<I: Clone> Game<I> {
    /// The fixed demo scene: one player, three skeletons, two potions.
    pub fn demo(images: SpriteImages<I>, tilemap: TilemapDocument, rules: GameRules) -> Self {
        let SpriteImages {
            player,
            enemy,
            potion,
            tileset,
        } = images;

        let player = Player {
            sprite: Sprite::new(player, 100.0, 100.0),
            health: 100,
        };
        let enemies = vec![
            Enemy {
                sprite: Sprite::new(enemy.clone(), 200.0, 200.0),
                behavior: Behavior::Pursuing,
            },
            Enemy {
                sprite: Sprite::new(enemy.clone(), 150.0, 100.0),
                behavior: Behavior::Passive,
            },
            Enemy {
                sprite: Sprite::new(enemy, 50.0, 200.0),
                behavior: Behavior::Pursuing,
            },
        ];
        let potions = vec![
            Potion::new(Sprite::new(potion.clone(), 100.0, 75.0), 10),
            Potion::new(Sprite::new(potion, 50.0, 100.0), 20),
        ];

        Self::new(player, enemies, potions, tilemap, tileset, rules)
    }
}

use anyhow::Context;
use log::{error, info};
use macroquad::prelude::*;
use tile_chase::config::window_conf;
use tile_chase::{Assets, Game, GameConfig, Keyboard, Viewport};

fn load(config: &GameConfig) -> anyhow::Result<Assets> {
    Assets::load(&config.assets).context("Loading startup assets")
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GameConfig::default();
    let assets = match load(&config) {
        Ok(assets) => assets,
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    };

    let (images, tilemap) = assets.into_textures();
    let mut game = Game::demo(images, tilemap, config.rules);
    let viewport = Viewport::new();
    info!("starting game loop");

    loop {
        game.update(&Keyboard);
        viewport.frame(|surface| game.draw(surface));

        next_frame().await
    }
}

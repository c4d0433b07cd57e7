// tests/startup_tests.rs

use macroquad::prelude::{Image, WHITE};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tile_chase::{AssetError, AssetPaths, Assets, MapError};

fn temp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("tile_chase_{tag}_{nanos}"));
    fs::create_dir_all(dir.join("images")).expect("failed to create images dir");
    fs::create_dir_all(dir.join("maps")).expect("failed to create maps dir");
    dir
}

fn write_png(path: &Path) {
    let image = Image::gen_image_color(16, 16, WHITE);
    image.export_png(path.to_str().expect("path utf8"));
}

fn write_images(paths: &AssetPaths) {
    for p in [&paths.player, &paths.enemy, &paths.potion, &paths.tileset] {
        write_png(p);
    }
}

fn fixture_map() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/map.json");
    fs::read_to_string(path).expect("fixture map")
}

#[test]
fn loads_complete_asset_set() {
    let paths = AssetPaths::under(temp_dir("ok"));
    write_images(&paths);
    fs::write(&paths.tilemap, fixture_map()).expect("write map");

    let assets = Assets::load(&paths).expect("assets should load");
    assert_eq!(assets.images.tileset.width(), 16);
    assert_eq!(assets.tilemap.layers.len(), 2);
}

#[test]
fn missing_image_aborts_startup() {
    let paths = AssetPaths::under(temp_dir("missing"));
    fs::write(&paths.tilemap, fixture_map()).expect("write map");

    let err = Assets::load(&paths).err().expect("expected load error");
    assert!(matches!(err, AssetError::Io { ref path, .. } if path == &paths.player));
}

#[test]
fn undecodable_image_aborts_startup() {
    let paths = AssetPaths::under(temp_dir("garbage"));
    write_images(&paths);
    fs::write(&paths.potion, b"definitely not a png").expect("write garbage");
    fs::write(&paths.tilemap, fixture_map()).expect("write map");

    let err = Assets::load(&paths).err().expect("expected load error");
    assert!(matches!(err, AssetError::Image { ref path, .. } if path == &paths.potion));
}

#[test]
fn malformed_tilemap_aborts_startup() {
    let paths = AssetPaths::under(temp_dir("badmap"));
    write_images(&paths);
    fs::write(&paths.tilemap, r#"{ "width": 1, "layers": "#).expect("write map");

    let err = Assets::load(&paths).err().expect("expected load error");
    assert!(matches!(err, AssetError::Map(MapError::Parse(_))));
}

#[test]
fn missing_tilemap_aborts_startup() {
    let paths = AssetPaths::under(temp_dir("nomap"));
    write_images(&paths);

    let err = Assets::load(&paths).err().expect("expected load error");
    assert!(matches!(err, AssetError::Map(MapError::Io { .. })));
}

#[test]
fn default_paths_point_at_assets_dir() {
    let paths = AssetPaths::default();
    assert_eq!(paths.player, Path::new("assets/images/ninja.png"));
    assert_eq!(paths.tilemap, Path::new("assets/maps/map.json"));
}

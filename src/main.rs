mod camera;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod level;
mod movement;
mod replay;
mod run;
mod sprites;
mod ui;

use std::path::PathBuf;

use bevy::asset::AssetPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() -> AppExit {
    let assets_dir = std::env::var("TILEHOP_ASSETS_DIR")
        .ok()
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "assets".to_string());
    let config = content::startup_config(&PathBuf::from(&assets_dir));

    let args: Vec<String> = std::env::args().collect();
    if let Some(index) = args.iter().position(|a| a == "--replay") {
        let Some(path) = args.get(index + 1) else {
            eprintln!("[Tilehop] --replay needs a tape file");
            return AppExit::error();
        };
        return replay::run(config, PathBuf::from(path));
    }

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: config.title.clone(),
                    resolution: WindowResolution::from((config.screen_width, config.screen_height)),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(AssetPlugin {
                file_path: config.assets_dir.to_string_lossy().into_owned(),
                ..default()
            }),
    )
    .insert_resource(Time::<Fixed>::from_hz(f64::from(config.fps.max(1))))
    .insert_resource(config)
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        movement::MovementPlugin,
        run::RunPlugin,
        sprites::SpritesPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run()
}

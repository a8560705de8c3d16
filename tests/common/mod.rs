//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - we then call `bevy_shooter::game::configure_headless` to install gameplay plugins.
//! - time advances by a fixed manual step so frame counts are deterministic.

use std::time::Duration;

use bevy::asset::AssetPlugin;
use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;

pub const FRAME: Duration = Duration::from_micros(16_667);

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
    ));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));

    bevy_shooter::game::configure_headless(&mut app);
    // `App::run` normally drives these; tests call `update()` directly.
    app.finish();
    app.cleanup();
    app
}

/// Every message of type `M` still held in the double buffer.
pub fn read_all<M: Message + Clone>(app: &App) -> Vec<M> {
    let messages = app.world().resource::<Messages<M>>();
    let mut cursor = messages.get_cursor();
    cursor.read(messages).cloned().collect()
}

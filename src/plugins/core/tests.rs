use bevy::prelude::*;

use crate::common::config::{GameConfig, PlayerConfig};
use crate::common::tunables::Tunables;
use crate::plugins::core;
use crate::plugins::projectiles::components::ProjectileTemplate;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<PlayerConfig>().is_some());
    assert!(app.world().get_resource::<ProjectileTemplate>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn insert_config_overrides_loaded_values() {
    let mut app = App::new();
    core::plugin(&mut app);

    let mut config = GameConfig::default();
    config.player.move_speed = 9.0;
    config.projectile.damage = -4;
    core::insert_config(&mut app, config);

    assert_eq!(app.world().resource::<PlayerConfig>().move_speed, 9.0);
    assert_eq!(app.world().resource::<ProjectileTemplate>().damage(), 0);
}

mod common;

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy_shooter::plugins::combat::Health;
use bevy_shooter::plugins::enemies::Enemy;
use bevy_shooter::plugins::player::{Player, PlayerEntity};

#[test]
fn boots_and_ticks() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }
}

#[test]
fn entering_the_round_spawns_one_registered_player() {
    let mut app = common::app_headless();

    for _ in 0..3 {
        app.update();
    }

    let players: Vec<Entity> = app
        .world_mut()
        .query_filtered::<Entity, With<Player>>()
        .iter(app.world())
        .collect();
    assert_eq!(players.len(), 1);
    assert_eq!(app.world().resource::<PlayerEntity>().0, Some(players[0]));

    let hp = app.world().get::<Health>(players[0]).unwrap();
    assert_eq!(hp.current(), hp.max());

    assert!(app.world().get::<TranslationInterpolation>(players[0]).is_some());
}

#[test]
fn a_second_player_is_rejected() {
    let mut app = common::app_headless();
    app.update();

    let first = app.world().resource::<PlayerEntity>().0.unwrap();
    let intruder = app.world_mut().spawn((Player, Transform::default())).id();
    app.update();
    app.update();

    assert!(app.world().get_entity(intruder).is_err());
    assert_eq!(app.world().resource::<PlayerEntity>().0, Some(first));
}

#[test]
fn round_has_targets() {
    let mut app = common::app_headless();
    app.update();

    let enemies = app
        .world_mut()
        .query_filtered::<(), With<Enemy>>()
        .iter(app.world())
        .count();
    assert_eq!(enemies, 3);
}

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::test_utils::run_system_once;
use crate::plugins::combat::{Died, Health};

#[test]
fn spawns_damageable_dynamic_targets() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_targets);

    let mut q = world.query_filtered::<(&Health, &RigidBody, &CollisionLayers), With<super::Enemy>>();
    let targets: Vec<_> = q.iter(&world).collect();

    assert_eq!(targets.len(), 3);
    for (hp, rb, layers) in targets {
        assert_eq!(hp.current(), 3);
        assert!(matches!(rb, RigidBody::Dynamic));
        assert!(layers.memberships.has_all(Layer::Enemy));
        assert!(layers.filters.has_all(Layer::PlayerBullet));
    }
}

#[test]
fn dead_enemies_are_despawned_and_others_left_alone() {
    let mut world = World::new();
    world.init_resource::<Messages<Died>>();

    let enemy = world.spawn(super::Enemy).id();
    let not_enemy = world.spawn(Health::new(1)).id();

    world.write_message(Died { entity: enemy });
    world.write_message(Died { entity: not_enemy });

    run_system_once(&mut world, super::despawn_dead_enemies);

    assert!(world.get_entity(enemy).is_err());
    assert!(world.get_entity(not_enemy).is_ok());
}

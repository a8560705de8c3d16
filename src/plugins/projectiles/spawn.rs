//! Spawn consumer: turn `SpawnProjectile` requests into projectile entities.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};

use super::components::{Projectile, ProjectileState, ProjectileTemplate};
use super::messages::SpawnProjectile;

pub fn spawn_projectiles(
    mut commands: Commands,
    template: Option<Res<ProjectileTemplate>>,
    mut reader: MessageReader<SpawnProjectile>,
) {
    let Some(template) = template else {
        reader.clear();
        return;
    };

    for req in reader.read() {
        let projectile = Projectile::launch(&template, req.direction).fired_by(req.owner);
        // Sensor: touching a target only triggers the fuse, it never pushes.
        let layers = CollisionLayers::new(Layer::PlayerBullet, projectile.targets);

        commands.spawn((
            Name::new("Projectile"),
            projectile,
            ProjectileState::Flying,
            template.sprite(),
            Transform::from_translation(req.origin.extend(2.0)),
            RigidBody::Kinematic,
            Collider::circle(template.collider_radius()),
            Sensor,
            layers,
            // Avian only emits CollisionStart if one collider has this marker.
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

//! Enemies plugin: target dummies for explosions to hurt and shove around.
//!
//! - Dynamic bodies so knockback moves them; linear damping bleeds it off.
//! - Damage arrives through `Hit` → `apply_hits::<Health>` like everything else.
//! - Deaths are read from `Died` in PostUpdate and despawned there, outside the
//!   fixed physics step.

use avian2d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::{layers::Layer, state::GameState};
use crate::plugins::combat::{CombatSystems, Died, Health};

#[derive(Component)]
pub struct Enemy;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_targets)
        .add_systems(PostUpdate, despawn_dead_enemies.after(CombatSystems::ApplyHits));
}

fn spawn_targets(mut commands: Commands) {
    let enemy_layers = CollisionLayers::new(
        Layer::Enemy,
        [Layer::World, Layer::Player, Layer::PlayerBullet, Layer::Enemy],
    );

    for (i, x) in [-4.0, 0.0, 4.0].into_iter().enumerate() {
        commands.spawn((
            Name::new(format!("EnemyTarget{i}")),
            Enemy,
            Health::new(3),
            Sprite {
                color: Color::srgb(0.9, 0.25, 0.25),
                custom_size: Some(Vec2::splat(0.7)),
                ..default()
            },
            Transform::from_xyz(x, 3.0, 1.0),
            RigidBody::Dynamic,
            Collider::circle(0.35),
            Mass(2.0),
            LinearDamping(4.0),
            LockedAxes::ROTATION_LOCKED,
            enemy_layers,
            DespawnOnExit(GameState::InGame),
        ));
    }
}

fn despawn_dead_enemies(
    mut commands: Commands,
    mut died: MessageReader<Died>,
    q_enemies: Query<(), With<Enemy>>,
) {
    for d in died.read() {
        if q_enemies.contains(d.entity) {
            commands.entity(d.entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests;

//! Blast: the one-shot area pass shared by fuse and contact detonation.
//!
//! Invariant: a projectile reaches this system in `Detonating` at most once.
//! It leaves as `Spent` with its despawn queued, so a second schedule running
//! the same system in the same frame skips it.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::intersects;
use crate::plugins::combat::Hit;

use super::components::{Projectile, ProjectileState};

/// Impulse a blast at `center` applies to a body at `body`.
///
/// A body exactly at the center gets no push.
#[inline]
pub fn knockback_impulse(center: Vec2, body: Vec2, strength: f32) -> Vec2 {
    (body - center).normalize_or_zero() * strength
}

/// True when the blast circle touches the collider's shape (edge inclusive).
#[inline]
pub fn reaches(collider: &Collider, at: &GlobalTransform, center: Vec2, radius: f32) -> bool {
    collider.distance_to_point(at, at, center, true) <= radius
}

pub fn detonate_projectiles(
    mut commands: Commands,
    mut q_projectiles: Query<(Entity, &Projectile, &mut ProjectileState, &Transform)>,
    q_colliders: Query<
        (Entity, &Collider, &CollisionLayers, &GlobalTransform, Option<&ColliderOf>),
        Without<Projectile>,
    >,
    mut q_bodies: Query<
        (&GlobalTransform, &RigidBody, &mut LinearVelocity, &ComputedMass),
        Without<Projectile>,
    >,
    mut hits: MessageWriter<Hit>,
    // Bodies already struck by the current blast
    mut struck: Local<HashSet<Entity>>,
) {
    for (e, projectile, mut state, tf) in &mut q_projectiles {
        if *state != ProjectileState::Detonating {
            continue;
        }
        *state = ProjectileState::Spent;

        let center = tf.translation.truncate();
        struck.clear();

        for (collider_e, collider, layers, collider_tf, collider_of) in &q_colliders {
            if !intersects(layers.memberships, projectile.targets) {
                continue;
            }
            if !reaches(collider, collider_tf, center, projectile.explosion_radius) {
                continue;
            }

            let body = collider_of.map_or(collider_e, |c| c.body);
            if Some(body) == projectile.owner() || !struck.insert(body) {
                continue;
            }

            hits.write(Hit { target: body, amount: projectile.damage });

            let Ok((body_tf, rb, mut vel, mass)) = q_bodies.get_mut(body) else {
                continue;
            };
            if rb.is_dynamic() {
                let impulse =
                    knockback_impulse(center, body_tf.translation().truncate(), projectile.knockback);
                // Infinite mass (inverse 0) is not pushed.
                vel.0 += impulse * mass.inverse();
            }
        }

        debug!("Projectile {e} detonated at {center}, struck {}", struck.len());
        commands.entity(e).despawn();
    }
}

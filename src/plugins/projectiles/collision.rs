//! Contact trigger: a flying projectile that touches one of its targets detonates.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use crate::common::layers::intersects;

use super::components::{Projectile, ProjectileState};

#[derive(Clone, Copy, Debug)]
struct ContactSide {
    collider: Entity,
    body: Option<Entity>,
}

impl ContactSide {
    /// The entity gameplay state lives on: the body, or the collider itself
    /// when it is not attached to one.
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn sides(ev: &CollisionStart) -> (ContactSide, ContactSide) {
    (
        ContactSide { collider: ev.collider1, body: ev.body1 },
        ContactSide { collider: ev.collider2, body: ev.body2 },
    )
}

pub fn detonate_on_contact(
    mut started: MessageReader<CollisionStart>,
    q_is_projectile: Query<(), With<Projectile>>,
    mut q_projectiles: Query<(&Projectile, &mut ProjectileState)>,
    // Layers live on collider entities
    q_layers: Query<&CollisionLayers>,
    // Per-frame dedupe
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (s1, s2) = sides(ev);
        let p1 = q_is_projectile.contains(s1.collider);
        let p2 = q_is_projectile.contains(s2.collider);

        // Two projectiles never trigger each other.
        if !(p1 ^ p2) {
            continue;
        }
        let (projectile_e, other) = if p1 {
            (s1.collider, s2)
        } else {
            (s2.collider, s1)
        };

        if seen.contains(&projectile_e) {
            continue;
        }

        let Ok(other_layers) = q_layers.get(other.collider) else {
            continue;
        };
        let Ok((projectile, mut state)) = q_projectiles.get_mut(projectile_e) else {
            continue;
        };

        if projectile.owner() == Some(other.gameplay_owner()) {
            continue;
        }

        if intersects(other_layers.memberships, projectile.targets) && state.trigger() {
            seen.insert(projectile_e);
        }
    }
}

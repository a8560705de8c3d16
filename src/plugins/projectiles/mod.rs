//! Projectiles plugin: message-driven spawning, straight-line flight, one-shot blast.
//!
//! # Data flow
//! ```text
//!   Update schedule (variable dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producer: player::handle_shoot                                        │
//!│      - writes: SpawnProjectile message                                     │
//!│                                                                            │
//!│  (B) advance_projectiles                                                   │
//!│      - moves Flying projectiles, burns fuse, Flying -> Detonating at 0     │
//!│                                                                            │
//!│  (C) detonate_projectiles                                                  │
//!│      - Detonating -> Spent, Hit messages + knockback, despawn              │
//!│                                                                            │
//!│  (D) Consumer: spawn_projectiles                                           │
//!│      - reads: SpawnProjectile, ProjectileTemplate                          │
//!│      - spawns: Projectile + ProjectileState::Flying + sensor collider      │
//!└────────────────────────────────────────────────────────────────────────────┘
//!FixedPostUpdate (fixed dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (E) Avian emits CollisionStart (sensor contacts)                          │
//!│  (F) detonate_on_contact: Flying -> Detonating on a target-layer contact   │
//!│  (G) detonate_projectiles (same system as C)                               │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both triggers only ever perform `Flying -> Detonating`; the blast is the
//! single place that reads `Detonating`, so a projectile explodes exactly once.

pub mod collision;
pub mod components;
pub mod explosion;
pub mod flight;
pub mod messages;
pub mod spawn;

use avian2d::collision::narrow_phase::CollisionEventSystems;
use bevy::prelude::*;

use crate::common::state::GameState;
use crate::plugins::player::PlayerSystems;

pub struct ProjectilesPlugin;

impl Plugin for ProjectilesPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<messages::SpawnProjectile>();

        app.add_systems(
            Update,
            // Spawn last: a projectile starts flying the frame after it is fired.
            (
                flight::advance_projectiles,
                explosion::detonate_projectiles,
                spawn::spawn_projectiles,
            )
                .chain()
                .after(PlayerSystems::Act)
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedPostUpdate,
            (collision::detonate_on_contact, explosion::detonate_projectiles)
                .chain()
                .after(CollisionEventSystems)
                .run_if(in_state(GameState::InGame)),
        );
    }
}

//! Combat plugin: the damage-receiving capability shared by every hittable entity.
//!
//! Producers (explosions, hazards) never touch `Health` directly. They write
//! `Hit` messages, and `apply_hits` is the single writer of hit points:
//!
//! ```text
//! detonate_projectiles ──Hit──▶ apply_hits::<Health> ──Died──▶ report_player_death
//!                                                        └───▶ despawn_dead_enemies
//! ```

use bevy::ecs::component::Mutable;
use bevy::prelude::*;

pub fn plugin(app: &mut App) {
    app.add_message::<Hit>()
        .add_message::<Died>()
        .add_systems(PostUpdate, apply_hits::<Health>.in_set(CombatSystems::ApplyHits));
}

#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombatSystems {
    ApplyHits,
}

/// Request to deal `amount` damage to `target`.
///
/// Targets without a damage-receiving capability ignore the hit.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hit {
    pub target: Entity,
    pub amount: i32,
}

/// Written once when an entity's health first reaches zero.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Died {
    pub entity: Entity,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DamageOutcome {
    Alive,
    Died,
    AlreadyDead,
}

/// Anything that can be hurt.
pub trait Damageable {
    fn take_damage(&mut self, amount: i32) -> DamageOutcome;
}

/// Hit points clamped to `[0, max]`.
///
/// `max` is fixed at construction.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    current: i32,
    max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        let max = max.max(1);
        Self { current: max, max }
    }

    #[inline]
    pub fn current(&self) -> i32 {
        self.current
    }

    #[inline]
    pub fn max(&self) -> i32 {
        self.max
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.current == 0
    }
}

impl Damageable for Health {
    /// The sign of `amount` is ignored; damage never heals.
    fn take_damage(&mut self, amount: i32) -> DamageOutcome {
        if self.is_dead() {
            return DamageOutcome::AlreadyDead;
        }

        self.current = self
            .current
            .saturating_sub(amount.saturating_abs())
            .clamp(0, self.max);

        if self.is_dead() {
            DamageOutcome::Died
        } else {
            DamageOutcome::Alive
        }
    }
}

pub fn apply_hits<T>(
    mut hits: MessageReader<Hit>,
    mut q: Query<&mut T>,
    mut died: MessageWriter<Died>,
) where
    T: Component<Mutability = Mutable> + Damageable,
{
    for hit in hits.read() {
        let Ok(mut target) = q.get_mut(hit.target) else {
            continue;
        };

        if target.take_damage(hit.amount) == DamageOutcome::Died {
            died.write(Died { entity: hit.target });
        }
    }
}

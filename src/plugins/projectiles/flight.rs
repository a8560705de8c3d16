//! Straight-line flight and fuse countdown.

use bevy::prelude::*;

use super::components::{Projectile, ProjectileState};

pub fn advance_projectiles(
    time: Res<Time>,
    mut q: Query<(&mut Projectile, &mut ProjectileState, &mut Transform)>,
) {
    let dt = time.delta_secs();

    for (mut projectile, mut state, mut tf) in &mut q {
        if *state != ProjectileState::Flying {
            continue;
        }

        tf.translation += projectile.advance(dt).extend(0.0);

        if projectile.fuse_expired() {
            state.trigger();
        }
    }
}

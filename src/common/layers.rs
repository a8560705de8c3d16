//! Collision layers.

use avian2d::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Layer {
    #[default]
    Default,
    World,
    Player,
    Enemy,
    PlayerBullet,
    EnemyBullet,
}

/// Fold a list of layers into a single mask.
pub fn mask_of(layers: &[Layer]) -> LayerMask {
    LayerMask(layers.iter().fold(0, |bits, layer| bits | layer.to_bits()))
}

/// True when the two masks share at least one layer.
#[inline]
pub fn intersects(a: LayerMask, b: LayerMask) -> bool {
    a.0 & b.0 != 0
}

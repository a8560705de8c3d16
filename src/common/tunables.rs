//! Tunable engine-facing constants.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// World units are gameplay units (1.0 = one meter); `pixels_per_meter` only
/// drives the camera zoom.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    pub pixels_per_meter: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self { pixels_per_meter: 48.0 }
    }
}

impl Tunables {
    pub fn sanitized(self) -> Self {
        let ppm = if self.pixels_per_meter.is_finite() && self.pixels_per_meter > 0.0 {
            self.pixels_per_meter
        } else {
            Self::default().pixels_per_meter
        };
        Self { pixels_per_meter: ppm }
    }
}

//! Dash maneuver as an explicit fixed-step state machine.
//!
//! ```text
//!   Ready ──begin()──▶ Active { elapsed < duration }   (hold velocity, elapsed += dt)
//!     ▲                        │
//!     └──── Finished ◀─────────┘ elapsed >= duration   (caller zeroes velocity, arms cooldown)
//! ```
//!
//! `begin()` while `Active` replaces the in-flight dash and restarts it from zero.

use bevy::prelude::*;

use crate::common::config::MIN_DASH_DURATION;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashMotion {
    pub velocity: Vec2,
    pub duration: f32,
    pub elapsed: f32,
}

#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub enum Dash {
    #[default]
    Ready,
    Active(DashMotion),
}

/// Result of advancing the dash by one fixed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashStep {
    /// Not dashing: normal movement applies.
    Idle,
    /// Still dashing: hold this velocity.
    Moving(Vec2),
    /// The dash just ended on this step.
    Finished,
}

impl Dash {
    #[inline]
    pub fn is_dashing(&self) -> bool {
        matches!(self, Self::Active(_))
    }

    pub fn begin(&mut self, direction: Vec2, distance: f32, duration: f32) {
        let duration = duration.max(MIN_DASH_DURATION);
        let speed = distance.max(0.0) / duration;

        *self = Self::Active(DashMotion {
            velocity: direction.normalize_or_zero() * speed,
            duration,
            elapsed: 0.0,
        });
    }

    pub fn step(&mut self, dt: f32) -> DashStep {
        let Self::Active(motion) = self else {
            return DashStep::Idle;
        };

        if motion.elapsed < motion.duration {
            motion.elapsed += dt;
            DashStep::Moving(motion.velocity)
        } else {
            *self = Self::Ready;
            DashStep::Finished
        }
    }
}

//! Projectile lifecycle, independent of any ECS callback dispatch.
//!
//! ```text
//!   Inactive ──acquire──▶ Reserved ──activate──▶ Active
//!      ▲                     │                    │
//!      └──────release────────┘                    │
//!      └──────────── expiry / collision ──────────┘
//! ```
//!
//! `Reserved` belongs to the pool: a checked-out slot that the caller is still configuring.
//! The projectile itself only distinguishes live (`Active`) from not live.

use std::error::Error;
use std::fmt;

use bevy::prelude::*;

/// Slack on the expiry check, seconds. Frame deltas like 1/60 are not exact in binary, so
/// deltas that add up to the life time on paper can fall a few ulps short of it.
const EXPIRY_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectileState {
    #[default]
    Inactive,
    Reserved,
    Active,
}

/// Why a projectile left the `Active` state on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reclaim {
    Expired,
    Impact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileError {
    /// Direction (or impulse) had zero length or was not finite.
    InvalidDirection,
    /// Impulse activation with a non-positive or non-finite mass.
    InvalidMass,
    /// Life time must be finite and positive so a live projectile always has time left.
    InvalidLifetime,
    /// Handle no longer refers to a checked-out slot.
    StaleHandle,
}

impl fmt::Display for ProjectileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirection => f.write_str("projectile direction must be finite and non-zero"),
            Self::InvalidMass => f.write_str("projectile mass must be finite and positive"),
            Self::InvalidLifetime => f.write_str("projectile life time must be finite and positive"),
            Self::StaleHandle => f.write_str("projectile handle does not refer to a checked-out slot"),
        }
    }
}

impl Error for ProjectileError {}

#[derive(Debug, Clone)]
pub struct Projectile {
    position: Vec2,
    direction: Vec2,
    speed: f32,
    velocity: Vec2,
    /// Orientation around Z, radians. Faces `direction` while active.
    rotation: f32,
    life_time: f32,
    /// Seconds live in the current activation. Accumulated in f64 so long runs of uneven
    /// frame deltas still land on `life_time`.
    elapsed: f64,
    state: ProjectileState,
    /// Set once the current activation has expired or hit something.
    resolved: bool,
}

impl Projectile {
    pub fn new(life_time: f32) -> Result<Self, ProjectileError> {
        if !(life_time.is_finite() && life_time > 0.0) {
            return Err(ProjectileError::InvalidLifetime);
        }
        Ok(Self {
            position: Vec2::ZERO,
            direction: Vec2::X,
            speed: 0.0,
            velocity: Vec2::ZERO,
            rotation: 0.0,
            life_time,
            elapsed: 0.0,
            state: ProjectileState::Inactive,
            resolved: false,
        })
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn direction(&self) -> Vec2 {
        self.direction
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    #[inline]
    pub fn life_time(&self) -> f32 {
        self.life_time
    }

    #[inline]
    pub fn remaining_lifetime(&self) -> f32 {
        (f64::from(self.life_time) - self.elapsed).max(0.0) as f32
    }

    #[inline]
    pub fn state(&self) -> ProjectileState {
        self.state
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.state == ProjectileState::Active
    }

    /// Neutral pose used when the pool hands the slot out.
    pub(super) fn reset(&mut self) {
        self.position = Vec2::ZERO;
        self.direction = Vec2::X;
        self.speed = 0.0;
        self.velocity = Vec2::ZERO;
        self.rotation = 0.0;
        self.elapsed = 0.0;
        self.resolved = false;
    }

    pub(super) fn set_state(&mut self, state: ProjectileState) {
        if state != ProjectileState::Active {
            self.velocity = Vec2::ZERO;
        }
        self.state = state;
    }

    /// Canonical activation: unit direction times a scalar speed.
    pub fn activate(
        &mut self,
        position: Vec2,
        direction: Vec2,
        speed: f32,
    ) -> Result<(), ProjectileError> {
        let dir = direction
            .try_normalize()
            .ok_or(ProjectileError::InvalidDirection)?;

        self.position = position;
        self.direction = dir;
        self.speed = speed;
        self.velocity = dir * speed;
        self.rotation = dir.y.atan2(dir.x);
        self.elapsed = 0.0;
        self.resolved = false;
        self.state = ProjectileState::Active;
        Ok(())
    }

    /// Impulse-style activation. Ends in the same state as
    /// `activate(position, impulse, impulse.length() / mass)`.
    pub fn activate_with_impulse(
        &mut self,
        position: Vec2,
        impulse: Vec2,
        mass: f32,
    ) -> Result<(), ProjectileError> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(ProjectileError::InvalidMass);
        }
        self.activate(position, impulse, impulse.length() / mass)
    }

    /// Advance one frame. Returns `Some(Reclaim::Expired)` on the tick the lifetime runs out.
    pub fn tick(&mut self, dt: f32) -> Option<Reclaim> {
        if self.state != ProjectileState::Active {
            return None;
        }

        self.elapsed += f64::from(dt);
        if self.elapsed + EXPIRY_TOLERANCE >= f64::from(self.life_time) {
            self.elapsed = f64::from(self.life_time);
            self.resolve();
            return Some(Reclaim::Expired);
        }

        self.position += self.velocity * dt;
        None
    }

    /// Something was hit. Only the first hit of an activation counts.
    pub fn on_collision(&mut self) -> Option<Reclaim> {
        if self.state != ProjectileState::Active || self.resolved {
            return None;
        }
        self.resolve();
        Some(Reclaim::Impact)
    }

    fn resolve(&mut self) {
        self.resolved = true;
        self.set_state(ProjectileState::Inactive);
    }
}

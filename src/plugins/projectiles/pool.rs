//! Fixed-capacity bullet pool.
//!
//! The pool owns every `Projectile`. Callers only ever hold a `ProjectileHandle`
//! (slot index + generation). The generation is bumped on each `acquire`, so a handle
//! kept past its checkout cannot release or hit a slot that has since been handed out again.

use bevy::prelude::*;

use super::messages::BulletReclaimed;
use super::projectile::{Projectile, ProjectileError, ProjectileState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProjectileHandle {
    index: u32,
    generation: u32,
}

impl ProjectileHandle {
    #[inline]
    pub fn index(self) -> usize {
        self.index as usize
    }

    #[inline]
    pub fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug, Clone)]
struct Slot {
    projectile: Projectile,
    generation: u32,
}

#[derive(Resource, Debug)]
pub struct BulletPool {
    slots: Vec<Slot>,
}

impl BulletPool {
    /// Every slot shares `life_time`. Fails with `InvalidLifetime` unless it is finite and
    /// positive, even for an empty pool.
    pub fn new(capacity: usize, life_time: f32) -> Result<Self, ProjectileError> {
        let template = Projectile::new(life_time)?;
        let slots = (0..capacity)
            .map(|_| Slot {
                projectile: template.clone(),
                generation: 0,
            })
            .collect();
        Ok(Self { slots })
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots neither checked out nor active.
    pub fn available(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| s.projectile.state() == ProjectileState::Inactive)
            .count()
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.projectile.is_active()).count()
    }

    /// Check out the first inactive slot in index order.
    ///
    /// The slot comes back reset to a neutral pose and *not* active; the caller activates it.
    /// `None` means every slot is in use, which is a capacity decision, not a failure.
    pub fn acquire(&mut self) -> Option<ProjectileHandle> {
        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, s)| s.projectile.state() == ProjectileState::Inactive)?;

        slot.generation = slot.generation.wrapping_add(1);
        slot.projectile.reset();
        slot.projectile.set_state(ProjectileState::Reserved);

        Some(ProjectileHandle {
            index: index as u32,
            generation: slot.generation,
        })
    }

    /// Return a slot to the available set. Stale handles and inactive slots are ignored.
    pub fn release(&mut self, handle: ProjectileHandle) {
        if let Some(slot) = self.slot_mut(handle) {
            slot.projectile.set_state(ProjectileState::Inactive);
        }
    }

    /// Activate a checked-out slot. On error the reservation is dropped, so the slot is
    /// available again.
    pub fn activate(
        &mut self,
        handle: ProjectileHandle,
        position: Vec2,
        direction: Vec2,
        speed: f32,
    ) -> Result<(), ProjectileError> {
        self.activate_with(handle, |p| p.activate(position, direction, speed))
    }

    pub fn activate_with_impulse(
        &mut self,
        handle: ProjectileHandle,
        position: Vec2,
        impulse: Vec2,
        mass: f32,
    ) -> Result<(), ProjectileError> {
        self.activate_with(handle, |p| p.activate_with_impulse(position, impulse, mass))
    }

    fn activate_with(
        &mut self,
        handle: ProjectileHandle,
        activate: impl FnOnce(&mut Projectile) -> Result<(), ProjectileError>,
    ) -> Result<(), ProjectileError> {
        let slot = self
            .slot_mut(handle)
            .filter(|s| s.projectile.state() == ProjectileState::Reserved)
            .ok_or(ProjectileError::StaleHandle)?;

        activate(&mut slot.projectile).inspect_err(|_| {
            slot.projectile.set_state(ProjectileState::Inactive);
        })
    }

    /// Driver step: tick every slot in index order and report expiries.
    pub fn tick(&mut self, dt: f32) -> Vec<BulletReclaimed> {
        let mut reclaimed = Vec::new();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(cause) = slot.projectile.tick(dt) {
                reclaimed.push(BulletReclaimed {
                    handle: ProjectileHandle {
                        index: index as u32,
                        generation: slot.generation,
                    },
                    cause,
                    hit: None,
                });
            }
        }
        reclaimed
    }

    /// Impact path. `other` is passed through untouched.
    pub fn on_collision(
        &mut self,
        handle: ProjectileHandle,
        other: Option<Entity>,
    ) -> Option<BulletReclaimed> {
        let cause = self.slot_mut(handle)?.projectile.on_collision()?;
        Some(BulletReclaimed {
            handle,
            cause,
            hit: other,
        })
    }

    pub fn get(&self, handle: ProjectileHandle) -> Option<&Projectile> {
        self.slots
            .get(handle.index())
            .filter(|s| s.generation == handle.generation)
            .map(|s| &s.projectile)
    }

    /// Current handle for a slot index, whatever its state.
    pub fn handle_at(&self, index: usize) -> Option<ProjectileHandle> {
        self.slots.get(index).map(|s| ProjectileHandle {
            index: index as u32,
            generation: s.generation,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Projectile)> {
        self.slots.iter().map(|s| &s.projectile).enumerate()
    }

    fn slot_mut(&mut self, handle: ProjectileHandle) -> Option<&mut Slot> {
        self.slots
            .get_mut(handle.index())
            .filter(|s| s.generation == handle.generation)
    }
}

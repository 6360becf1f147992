//! Shared types: collision layers, level state, tunables.

pub mod layers;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;

//! Common, shared types.

pub mod config;
pub mod roster;
pub mod sets;
pub mod state;
pub mod tunables;

#[cfg(test)]
pub mod test_utils;

//! Buffered fire intents.
//!
//! Producers (mouse click, touch) only create *intent*; the fire consumer is
//! the single writer that spawns bullets and appends them to the roster.

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug)]
pub struct FireRequest;

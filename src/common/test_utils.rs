//! Test helpers.
//!
//! Systems that use `Commands` enqueue structural changes; we call `world.flush()`
//! after running so queued commands are applied before assertions.

use bevy::ecs::message::Messages;
use bevy::ecs::system::{IntoSystem, RunSystemOnce};
use bevy::prelude::*;

use crate::common::state::GameState;

/// Run a system once on the given world, then flush deferred commands.
/// Returns the system output.
pub fn run_system_once<T, Out, Marker>(world: &mut World, system: T) -> Out
where
    T: IntoSystem<(), Out, Marker>,
{
    let out = world.run_system_once(system).expect("system run failed");
    world.flush();
    out
}

/// Insert `State<GameState>` + an empty `NextState<GameState>`.
pub fn insert_state(world: &mut World, state: GameState) {
    world.insert_resource(State::new(state));
    world.insert_resource(NextState::<GameState>::default());
}

/// Drain every message of type `M` written so far.
pub fn drain_messages<M: Message>(world: &mut World) -> Vec<M> {
    world.resource_mut::<Messages<M>>().drain().collect()
}

/// True when a transition to `to` has been requested.
pub fn pending_state(world: &World, to: GameState) -> bool {
    matches!(world.resource::<NextState<GameState>>(), NextState::Pending(s) if *s == to)
}

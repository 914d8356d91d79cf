//! App layer - state, the action router and the actor driving it
//!
//! The router receives actions and network responses, updates the state and
//! calls out to its collaborators.

pub mod actor;
pub mod commands;
pub mod router;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use actor::RouterActor;
pub use router::Router;
pub use state::AppState;

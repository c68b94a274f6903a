//! Reactive in-memory owners of the entity collections.
//!
//! Each store holds the authoritative client-side copy of one
//! collection behind shared interior state. Handles are cheap to clone;
//! all mutation happens inside the store's own operations and readers
//! only ever get snapshots.

mod games;
mod players;
mod plays;
mod teams;

pub use games::GamesStore;
pub use players::PlayersStore;
pub use plays::PlaysStore;
pub use teams::TeamsStore;

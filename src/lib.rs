//! mealfinder
//!
//! Recipe search, session state, and favorites engine over TheMealDB API.
//!
//! The library is split the same way the behavior is: `model` holds the
//! pure value types and error taxonomy, `search` aggregates remote lookups
//! into deduplicated result sets, `state` owns the session machine and the
//! favorites set, and `client`/`store` are the two collaborator seams
//! (remote lookup service, persistence substrate).

pub mod client;
pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod state;
pub mod store;

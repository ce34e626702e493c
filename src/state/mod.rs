//! Client-side state (pure transitions, single owner per state cell).
//!
//! The session machine owns the search lifecycle and the detail subject;
//! the favorites manager owns the favorites set. They are independent and
//! never reach into each other.

pub mod favorites;
pub mod session;

pub use favorites::FavoritesManager;
pub use session::{Session, SessionState, SubmitToken};

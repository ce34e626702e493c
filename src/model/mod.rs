//! Domain model types (pure).
//!
//! Value types, the filter criterion, the deduplicated result set, and the
//! error taxonomy. Nothing in this module performs I/O.

pub mod criterion;
pub mod error;
pub mod identifiers;
pub mod meal;
pub mod result_set;

pub use criterion::FilterCriterion;
pub use error::{AppError, DetailError, LookupError, PersistenceError, SearchError};
pub use identifiers::{InvalidMealId, MealId};
pub use meal::{MealDetail, MealSummary};
pub use result_set::ResultSet;

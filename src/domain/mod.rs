//! Domain layer - framework-agnostic types
//!
//! Error taxonomy and the persistence contract. Implementations live in the
//! infrastructure layer.

pub mod errors;
pub mod repositories;

pub use errors::{DomainError, MapError};
pub use repositories::LocationRepository;

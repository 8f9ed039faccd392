pub mod location;

pub use location::{Category, CoolnessRating, Location};

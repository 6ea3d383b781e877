//! Domain Layer
//!
//! Pure domain types for call requests, without transport or page concerns.

pub mod entities;
pub mod errors;
pub mod value_objects;

// Re-exports for convenience
pub use entities::*;
pub use errors::*;
pub use value_objects::*;

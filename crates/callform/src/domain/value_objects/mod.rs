//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod element_id;
mod status_message;
mod voice;

pub use element_id::*;
pub use status_message::*;
pub use voice::*;

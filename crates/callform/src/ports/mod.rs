//! Ports (Interfaces)
//!
//! Abstract interfaces for the two things a submission touches:
//! the page it reads from and writes to, and the transport that
//! carries the request to the server.
//!
//! Implementations live in `adapters/` (or in the embedding program).

mod page;
mod transport;

pub use page::*;
pub use transport::*;

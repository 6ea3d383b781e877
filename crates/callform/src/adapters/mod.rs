//! Adapters
//!
//! Concrete implementations of the ports:
//! - `HttpCallTransport`: reqwest client for the call server
//! - `MemoryPage`: in-process page for embedding and tests

mod http;
mod memory_page;

pub use http::*;
pub use memory_page::*;

//! Shared ambient pieces for the Digest service: health handlers,
//! request-id middleware, serde helpers, and tracing bootstrap.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;

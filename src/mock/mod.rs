//! Mock Server Implementation
//!
//! Implements a configurable in-process stand-in for the remote endpoint,
//! for testing the client without sockets. Supports credential validation,
//! token issue/revoke, scripted per-method results, and failure injection
//! for testing error paths.

mod failure;
mod server;

pub use failure::{FailureConfig, FailureInjector};
pub use server::MockServer;

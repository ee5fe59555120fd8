//! Dattebayo Infrastructure Layer
//!
//! In-memory registry, event-log adapters and the UDP DNS listener.
pub mod dns;
pub mod logging;
pub mod registry;

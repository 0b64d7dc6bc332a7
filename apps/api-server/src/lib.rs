//! HTTP binding for the feed backend, exposed as a library so integration
//! tests can assemble the app without the binary.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;

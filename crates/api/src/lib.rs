//! Marquee HTTP layer.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! server assembly) so integration tests and both binaries (`fyyur`,
//! `trivia`) share the same router construction.

pub mod config;
pub mod error;
pub mod extract;
pub mod forms;
pub mod handlers;
pub mod page;
pub mod query;
pub mod routes;
pub mod server;
pub mod state;

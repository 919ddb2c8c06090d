//! Domain logic for the Fyyur listings site and the trivia API.
//!
//! Everything in this crate is pure: no database handles, no HTTP types.
//! The `db` and `api` crates feed rows in and serialize results out.

pub mod areas;
pub mod error;
pub mod forms;
pub mod pagination;
pub mod quiz;
pub mod search;
pub mod shows;
pub mod types;

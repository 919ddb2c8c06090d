//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A plain input DTO for inserts (and full overwrites)
//! - Read-side projections joined with related rows where a page needs them

pub mod artist;
pub mod category;
pub mod question;
pub mod show;
pub mod venue;

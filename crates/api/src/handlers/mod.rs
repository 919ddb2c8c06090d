//! Request handlers for both services.
//!
//! Fyyur handlers (`pages`, `venues`, `artists`, `shows`) return page
//! documents and map failures through [`PageError`](crate::error::PageError).
//! Trivia handlers (`categories`, `questions`, `quizzes`) return JSON and
//! map failures through [`ApiError`](crate::error::ApiError).

pub mod artists;
pub mod categories;
pub mod pages;
pub mod questions;
pub mod quizzes;
pub mod shows;
pub mod venues;

//! Trivia question model and DTO.

use marquee_core::quiz::Identified;
use marquee_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A question row from the `questions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    /// Foreign key into `categories`.
    pub category: DbId,
    pub difficulty: i32,
}

/// DTO for creating a new question.
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    pub question: String,
    pub answer: String,
    pub category: DbId,
    pub difficulty: i32,
}

impl Identified for Question {
    fn id(&self) -> DbId {
        self.id
    }
}

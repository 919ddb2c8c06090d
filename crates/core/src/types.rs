/// Primary keys are PostgreSQL SERIAL/BIGSERIAL, surfaced as `i64`.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

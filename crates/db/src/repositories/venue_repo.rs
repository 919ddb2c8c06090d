//! Repository for the `venues` table.

use marquee_core::types::{DbId, Timestamp};
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;

use crate::models::venue::{Venue, VenueFields, VenueSummary};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, city, state, address, phone, image_link, facebook_link, \
    website, genres, seeking_talent, seeking_description";

/// Summary columns; `$1` is the reference instant for "upcoming".
const SUMMARY_COLUMNS: &str = "v.id, v.name, v.city, v.state, \
    (SELECT COUNT(*) FROM shows s WHERE s.venue_id = v.id AND s.start_time >= $1) \
        AS num_upcoming_shows";

/// Provides CRUD operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, returning the created row.
    pub async fn create<'e, E>(executor: E, input: &VenueFields) -> Result<Venue, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO venues (name, city, state, address, phone, image_link, facebook_link,
                                 website, genres, seeking_talent, seeking_description)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(&input.genres)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_one(executor)
            .await
    }

    /// Find a venue by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every venue with its upcoming show count, ordered for grouping
    /// (state, city, then name).
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM venues v ORDER BY v.state, v.city, v.name, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive name search. `pattern` is a ready-made `ILIKE`
    /// pattern (see `marquee_core::search::contains_pattern`).
    pub async fn search(
        pool: &PgPool,
        pattern: &str,
        now: Timestamp,
    ) -> Result<Vec<VenueSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {SUMMARY_COLUMNS} FROM venues v WHERE v.name ILIKE $2 ORDER BY v.name, v.id"
        );
        sqlx::query_as::<_, VenueSummary>(&query)
            .bind(now)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Overwrite every editable column of a venue.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        input: &VenueFields,
    ) -> Result<Option<Venue>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE venues SET
                name = $2,
                city = $3,
                state = $4,
                address = $5,
                phone = $6,
                image_link = $7,
                facebook_link = $8,
                website = $9,
                genres = $10,
                seeking_talent = $11,
                seeking_description = $12
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.city)
            .bind(&input.state)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.website)
            .bind(&input.genres)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .fetch_optional(executor)
            .await
    }

    /// Delete a venue (its shows cascade). Returns the removed row, if any.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<Option<Venue>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("DELETE FROM venues WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}

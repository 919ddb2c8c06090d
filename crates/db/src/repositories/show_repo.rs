//! Repository for the `shows` join table.

use marquee_core::types::DbId;
use sqlx::postgres::PgExecutor;
use sqlx::PgPool;

use crate::models::show::{ArtistShow, CreateShow, Show, ShowListing, VenueShow};

/// Provides insert and read operations for shows. Shows are never
/// updated; they disappear only when their venue or artist is deleted.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show. Fails with a foreign-key violation if the venue
    /// or artist does not exist, and with a primary-key violation if the
    /// exact (venue, artist, start_time) triple is already listed.
    pub async fn create<'e, E>(executor: E, input: &CreateShow) -> Result<Show, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query_as::<_, Show>(
            "INSERT INTO shows (venue_id, artist_id, start_time)
             VALUES ($1, $2, $3)
             RETURNING venue_id, artist_id, start_time",
        )
        .bind(input.venue_id)
        .bind(input.artist_id)
        .bind(input.start_time)
        .fetch_one(executor)
        .await
    }

    /// Every show with venue and artist names, soonest first.
    pub async fn list_listings(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        sqlx::query_as::<_, ShowListing>(
            "SELECT s.venue_id, v.name AS venue_name,
                    s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             JOIN artists a ON a.id = s.artist_id
             ORDER BY s.start_time, s.venue_id, s.artist_id",
        )
        .fetch_all(pool)
        .await
    }

    /// Shows at one venue, joined with the performing artist.
    pub async fn list_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<VenueShow>, sqlx::Error> {
        sqlx::query_as::<_, VenueShow>(
            "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                    s.start_time
             FROM shows s
             JOIN artists a ON a.id = s.artist_id
             WHERE s.venue_id = $1
             ORDER BY s.start_time",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await
    }

    /// Shows by one artist, joined with the hosting venue.
    pub async fn list_for_artist(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<ArtistShow>, sqlx::Error> {
        sqlx::query_as::<_, ArtistShow>(
            "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link,
                    s.start_time
             FROM shows s
             JOIN venues v ON v.id = s.venue_id
             WHERE s.artist_id = $1
             ORDER BY s.start_time",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await
    }
}

//! Handlers for the `/shows` pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_db::models::show::{CreateShow, Show, ShowListing};
use marquee_db::repositories::ShowRepo;
use marquee_db::DbPool;
use serde::Serialize;

use crate::error::{constraint_violation, ConstraintViolation, PageResult};
use crate::extract::FormFields;
use crate::forms::ShowForm;
use crate::page::{FormPage, Page};
use crate::state::AppState;

const NEW_FORM: &str = "forms/new_show.html";

#[derive(Debug, Serialize)]
pub struct ShowsData {
    pub shows: Vec<ShowListing>,
}

/// GET /shows
pub async fn list(State(state): State<AppState>) -> PageResult<Page<ShowsData>> {
    let shows = ShowRepo::list_listings(&state.pool).await?;
    Ok(Page::new("pages/shows.html", ShowsData { shows }))
}

/// GET /shows/create
pub async fn create_form() -> Page<FormPage<ShowForm>> {
    Page::new(NEW_FORM, FormPage::plain(None))
}

/// POST /shows/create
///
/// Unknown venue/artist ids and duplicate listings are reported as form
/// errors; any other failure is a 500 with the form redisplayed.
pub async fn create_submission(
    State(state): State<AppState>,
    fields: FormFields,
) -> PageResult<Response> {
    let form = match ShowForm::from_pairs(fields.into_pairs()) {
        Ok(form) => form,
        Err(err) => return Ok(rejected(None, err.to_string())),
    };
    let show = match form.to_show() {
        Ok(show) => show,
        Err(err) => return Ok(rejected(Some(form), err.to_string())),
    };

    match insert(&state.pool, &show).await {
        Ok(show) => {
            tracing::info!(
                venue_id = show.venue_id,
                artist_id = show.artist_id,
                start_time = %show.start_time,
                "Show created"
            );
            let page = Page::home().flash("Show was successfully listed!");
            Ok((StatusCode::CREATED, page).into_response())
        }
        Err(err) => {
            let (status, message) = match constraint_violation(&err) {
                Some(ConstraintViolation::ForeignKey) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "Artist or Venue id does not exist. Please check all the fields.",
                ),
                Some(ConstraintViolation::Unique) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "This show is already listed.",
                ),
                None => {
                    tracing::error!(error = %err, "Failed to create show");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An error occurred. Show could not be listed.",
                    )
                }
            };
            let page = Page::new(NEW_FORM, FormPage::plain(Some(form))).flash(message);
            Ok((status, page).into_response())
        }
    }
}

fn rejected(form: Option<ShowForm>, reason: String) -> Response {
    tracing::debug!(reason = %reason, "Show form rejected");
    let page = Page::new(NEW_FORM, FormPage::plain(form))
        .flash("Show could not be listed. Please double check the fields.")
        .flash(reason);
    (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
}

async fn insert(pool: &DbPool, show: &CreateShow) -> Result<Show, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let show = ShowRepo::create(&mut *tx, show).await?;
    tx.commit().await?;
    Ok(show)
}

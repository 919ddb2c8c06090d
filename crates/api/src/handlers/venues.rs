//! Handlers for the `/venues` pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;
use marquee_core::areas::{group_by_area, Area};
use marquee_core::error::CoreError;
use marquee_core::search::contains_pattern;
use marquee_core::shows::partition_shows;
use marquee_core::types::DbId;
use marquee_db::models::show::VenueShow;
use marquee_db::models::venue::{Venue, VenueFields, VenueSummary};
use marquee_db::repositories::{ShowRepo, VenueRepo};
use marquee_db::DbPool;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, PageResult};
use crate::extract::{FormFields, PagePath};
use crate::forms::{invalid_fields, VenueForm};
use crate::page::{FormPage, Page};
use crate::state::AppState;

const NEW_FORM: &str = "forms/new_venue.html";
const EDIT_FORM: &str = "forms/edit_venue.html";

#[derive(Debug, Serialize)]
pub struct VenuesData {
    pub areas: Vec<Area<VenueSummary>>,
}

#[derive(Debug, Serialize)]
pub struct VenueSearchData {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<VenueSummary>,
}

/// A venue with its shows split around the current time.
#[derive(Debug, Serialize)]
pub struct VenueDetail {
    #[serde(flatten)]
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Venue", id })
}

/// GET /venues
pub async fn list(State(state): State<AppState>) -> PageResult<Page<VenuesData>> {
    let summaries = VenueRepo::list_summaries(&state.pool, Utc::now()).await?;
    let areas = group_by_area(summaries);
    Ok(Page::new("pages/venues.html", VenuesData { areas }))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    fields: FormFields,
) -> PageResult<Page<VenueSearchData>> {
    let search_term = fields.first("search_term").unwrap_or_default().to_string();
    let data =
        VenueRepo::search(&state.pool, &contains_pattern(&search_term), Utc::now()).await?;
    Ok(Page::new(
        "pages/search_venues.html",
        VenueSearchData {
            search_term,
            count: data.len(),
            data,
        },
    ))
}

/// GET /venues/{id}
pub async fn show(
    State(state): State<AppState>,
    PagePath(id): PagePath<DbId>,
) -> PageResult<Page<VenueDetail>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let shows = ShowRepo::list_for_venue(&state.pool, id).await?;
    let split = partition_shows(shows, Utc::now());

    Ok(Page::new(
        "pages/show_venue.html",
        VenueDetail {
            venue,
            past_shows_count: split.past_count(),
            upcoming_shows_count: split.upcoming_count(),
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        },
    ))
}

/// GET /venues/create
pub async fn create_form() -> Page<FormPage<VenueForm>> {
    Page::new(NEW_FORM, FormPage::listing(None))
}

/// POST /venues/create
pub async fn create_submission(
    State(state): State<AppState>,
    fields: FormFields,
) -> PageResult<Response> {
    let form = match checked_form(fields) {
        Ok(form) => form,
        Err(rejected) => return Ok(rejected.render(NEW_FORM, "listed")),
    };

    match insert(&state.pool, &VenueFields::from(form.clone())).await {
        Ok(venue) => {
            tracing::info!(venue_id = venue.id, name = %venue.name, "Venue created");
            let page = Page::home().flash(format!("Venue {} was successfully listed!", venue.name));
            Ok((StatusCode::CREATED, page).into_response())
        }
        Err(err) => {
            tracing::error!(error = %err, name = %form.name, "Failed to create venue");
            let message = format!("An error occurred. Venue {} could not be listed.", form.name);
            let page = Page::new(NEW_FORM, FormPage::listing(Some(form))).flash(message);
            Ok((StatusCode::INTERNAL_SERVER_ERROR, page).into_response())
        }
    }
}

/// GET /venues/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    PagePath(id): PagePath<DbId>,
) -> PageResult<Page<FormPage<VenueForm>>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Page::new(
        EDIT_FORM,
        FormPage::listing(Some(VenueForm::from(venue))),
    ))
}

/// POST /venues/{id}/edit
///
/// Overwrites every editable field, then redirects to the venue page.
pub async fn edit_submission(
    State(state): State<AppState>,
    PagePath(id): PagePath<DbId>,
    fields: FormFields,
) -> PageResult<Response> {
    if VenueRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id).into());
    }

    let form = match checked_form(fields) {
        Ok(form) => form,
        Err(rejected) => return Ok(rejected.render(EDIT_FORM, "updated")),
    };

    match update(&state.pool, id, &VenueFields::from(form.clone())).await {
        Ok(Some(_)) => {
            tracing::info!(venue_id = id, "Venue updated");
            Ok(Redirect::to(&format!("/venues/{id}")).into_response())
        }
        Ok(None) => Err(not_found(id).into()),
        Err(err) => {
            tracing::error!(error = %err, venue_id = id, "Failed to update venue");
            let message = format!("An error occurred. Venue {} could not be updated.", form.name);
            let page = Page::new(EDIT_FORM, FormPage::listing(Some(form))).flash(message);
            Ok((StatusCode::INTERNAL_SERVER_ERROR, page).into_response())
        }
    }
}

/// DELETE /venues/{id}
///
/// Failures roll back and are reported only as a flashed message.
pub async fn delete(
    State(state): State<AppState>,
    PagePath(id): PagePath<DbId>,
) -> Page<()> {
    match remove(&state.pool, id).await {
        Ok(Some(venue)) => {
            tracing::info!(venue_id = id, "Venue deleted");
            Page::home().flash(format!("Venue {} was deleted.", venue.name))
        }
        Ok(None) => {
            tracing::warn!(venue_id = id, "Delete requested for missing venue");
            Page::home().flash("Venue could not be deleted.")
        }
        Err(err) => {
            tracing::error!(error = %err, venue_id = id, "Failed to delete venue");
            Page::home().flash("Venue could not be deleted.")
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A submission that failed parsing or validation, with whatever values
/// could be recovered for redisplay.
struct RejectedForm {
    form: Option<VenueForm>,
    reason: String,
}

impl RejectedForm {
    fn render(self, template: &'static str, action: &str) -> Response {
        let name = self
            .form
            .as_ref()
            .map(|f| f.name.as_str())
            .unwrap_or_default();
        let message =
            format!("Venue {name} could not be {action}. Please double check the fields.");
        tracing::debug!(reason = %self.reason, "Venue form rejected");
        let page = Page::new(template, FormPage::listing(self.form))
            .flash(message)
            .flash(self.reason);
        (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
    }
}

fn checked_form(fields: FormFields) -> Result<VenueForm, RejectedForm> {
    let form = VenueForm::from_pairs(fields.into_pairs()).map_err(|err| RejectedForm {
        form: None,
        reason: err.to_string(),
    })?;
    match form.validate() {
        Ok(()) => Ok(form),
        Err(errors) => Err(RejectedForm {
            reason: format!("Invalid fields: {}", invalid_fields(&errors)),
            form: Some(form),
        }),
    }
}

async fn insert(pool: &DbPool, fields: &VenueFields) -> Result<Venue, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let venue = VenueRepo::create(&mut *tx, fields).await?;
    tx.commit().await?;
    Ok(venue)
}

async fn update(
    pool: &DbPool,
    id: DbId,
    fields: &VenueFields,
) -> Result<Option<Venue>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let venue = VenueRepo::update(&mut *tx, id, fields).await?;
    if venue.is_some() {
        tx.commit().await?;
    }
    Ok(venue)
}

async fn remove(pool: &DbPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let venue = VenueRepo::delete(&mut *tx, id).await?;
    if venue.is_some() {
        tx.commit().await?;
    }
    Ok(venue)
}

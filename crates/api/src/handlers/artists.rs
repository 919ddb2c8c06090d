//! Handlers for the `/artists` pages.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;
use marquee_core::error::CoreError;
use marquee_core::search::contains_pattern;
use marquee_core::shows::partition_shows;
use marquee_core::types::DbId;
use marquee_db::models::artist::{Artist, ArtistFields, ArtistListItem, ArtistSummary};
use marquee_db::models::show::ArtistShow;
use marquee_db::repositories::{ArtistRepo, ShowRepo};
use marquee_db::DbPool;
use serde::Serialize;
use validator::Validate;

use crate::error::{AppError, PageResult};
use crate::extract::{FormFields, PagePath};
use crate::forms::{invalid_fields, ArtistForm};
use crate::page::{FormPage, Page};
use crate::state::AppState;

const NEW_FORM: &str = "forms/new_artist.html";
const EDIT_FORM: &str = "forms/edit_artist.html";

#[derive(Debug, Serialize)]
pub struct ArtistsData {
    pub artists: Vec<ArtistListItem>,
}

#[derive(Debug, Serialize)]
pub struct ArtistSearchData {
    pub search_term: String,
    pub count: usize,
    pub data: Vec<ArtistSummary>,
}

#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Artist",
        id,
    })
}

/// GET /artists
pub async fn list(State(state): State<AppState>) -> PageResult<Page<ArtistsData>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Page::new("pages/artists.html", ArtistsData { artists }))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    fields: FormFields,
) -> PageResult<Page<ArtistSearchData>> {
    let search_term = fields.first("search_term").unwrap_or_default().to_string();
    let data =
        ArtistRepo::search(&state.pool, &contains_pattern(&search_term), Utc::now()).await?;
    Ok(Page::new(
        "pages/search_artists.html",
        ArtistSearchData {
            search_term,
            count: data.len(),
            data,
        },
    ))
}

/// GET /artists/{id}
pub async fn show(
    State(state): State<AppState>,
    PagePath(id): PagePath<DbId>,
) -> PageResult<Page<ArtistDetail>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    let split = partition_shows(ShowRepo::list_for_artist(&state.pool, id).await?, Utc::now());

    Ok(Page::new(
        "pages/show_artist.html",
        ArtistDetail {
            artist,
            past_shows_count: split.past_count(),
            upcoming_shows_count: split.upcoming_count(),
            past_shows: split.past,
            upcoming_shows: split.upcoming,
        },
    ))
}

/// GET /artists/create
pub async fn create_form() -> Page<FormPage<ArtistForm>> {
    Page::new(NEW_FORM, FormPage::listing(None))
}

/// POST /artists/create
pub async fn create_submission(
    State(state): State<AppState>,
    fields: FormFields,
) -> PageResult<Response> {
    let form = match checked_form(fields) {
        Ok(form) => form,
        Err(rejected) => return Ok(rejected.render(NEW_FORM, "listed")),
    };

    match insert(&state.pool, &ArtistFields::from(form.clone())).await {
        Ok(artist) => {
            tracing::info!(artist_id = artist.id, name = %artist.name, "Artist created");
            let page =
                Page::home().flash(format!("Artist {} was successfully listed!", artist.name));
            Ok((StatusCode::CREATED, page).into_response())
        }
        Err(err) => {
            tracing::error!(error = %err, name = %form.name, "Failed to create artist");
            let message = format!("An error occurred. Artist {} could not be listed.", form.name);
            let page = Page::new(NEW_FORM, FormPage::listing(Some(form))).flash(message);
            Ok((StatusCode::INTERNAL_SERVER_ERROR, page).into_response())
        }
    }
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    PagePath(id): PagePath<DbId>,
) -> PageResult<Page<FormPage<ArtistForm>>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Page::new(
        EDIT_FORM,
        FormPage::listing(Some(ArtistForm::from(artist))),
    ))
}

/// POST /artists/{id}/edit
pub async fn edit_submission(
    State(state): State<AppState>,
    PagePath(id): PagePath<DbId>,
    fields: FormFields,
) -> PageResult<Response> {
    if ArtistRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(not_found(id).into());
    }

    let form = match checked_form(fields) {
        Ok(form) => form,
        Err(rejected) => return Ok(rejected.render(EDIT_FORM, "updated")),
    };

    match update(&state.pool, id, &ArtistFields::from(form.clone())).await {
        Ok(Some(_)) => {
            tracing::info!(artist_id = id, "Artist updated");
            Ok(Redirect::to(&format!("/artists/{id}")).into_response())
        }
        Ok(None) => Err(not_found(id).into()),
        Err(err) => {
            tracing::error!(error = %err, artist_id = id, "Failed to update artist");
            let message = format!("An error occurred. Artist {} could not be updated.", form.name);
            let page = Page::new(EDIT_FORM, FormPage::listing(Some(form))).flash(message);
            Ok((StatusCode::INTERNAL_SERVER_ERROR, page).into_response())
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct RejectedForm {
    form: Option<ArtistForm>,
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
            format!("Artist {name} could not be {action}. Please double check the fields.");
        tracing::debug!(reason = %self.reason, "Artist form rejected");
        let page = Page::new(template, FormPage::listing(self.form))
            .flash(message)
            .flash(self.reason);
        (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
    }
}

fn checked_form(fields: FormFields) -> Result<ArtistForm, RejectedForm> {
    let form = ArtistForm::from_pairs(fields.into_pairs()).map_err(|err| RejectedForm {
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

async fn insert(pool: &DbPool, fields: &ArtistFields) -> Result<Artist, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let artist = ArtistRepo::create(&mut *tx, fields).await?;
    tx.commit().await?;
    Ok(artist)
}

async fn update(
    pool: &DbPool,
    id: DbId,
    fields: &ArtistFields,
) -> Result<Option<Artist>, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let artist = ArtistRepo::update(&mut *tx, id, fields).await?;
    if artist.is_some() {
        tx.commit().await?;
    }
    Ok(artist)
}

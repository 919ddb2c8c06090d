//! Custom Axum extractors whose rejections use the service's own error
//! rendering instead of axum's plain-text defaults.

use std::fmt::Display;
use std::str::FromStr;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::{Form, Json};
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};

use crate::error::{ApiError, AppError, PageError};

/// JSON body for the trivia API. Malformed or mistyped bodies reject
/// with a 422 `unprocessable` error body.
#[derive(Debug)]
pub struct TriviaJson<T>(pub T);

impl<T, S> FromRequest<S> for TriviaJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Raw `application/x-www-form-urlencoded` fields in submission order.
///
/// Repeated keys (e.g. several `genres`) are preserved, which a plain
/// `Form<T>` into a struct cannot express.
#[derive(Debug, Default)]
pub struct FormFields(pub Vec<(String, String)>);

impl FormFields {
    /// First value submitted for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn into_pairs(self) -> Vec<(String, String)> {
        self.0
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state).await?;
        Ok(Self(pairs))
    }
}

/// A path segment that does not parse (e.g. `/venues/abc`) names no
/// resource, so it is a not-found. Anything else is a routing bug.
fn path_error(rejection: PathRejection) -> AppError {
    match rejection {
        PathRejection::FailedToDeserializePathParams(err) => AppError::NotFound(err.body_text()),
        other => AppError::InternalError(other.body_text()),
    }
}

/// Path parameters for Fyyur pages. Unparseable ids render the 404 page.
#[derive(Debug)]
pub struct PagePath<T>(pub T);

impl<T, S> FromRequestParts<S> for PagePath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = PageError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| PageError(path_error(rejection)))?;
        Ok(Self(value))
    }
}

/// Path parameters for the trivia API. Unparseable ids reject with a 404
/// `resource not found` body.
#[derive(Debug)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::App(path_error(rejection)))?;
        Ok(Self(value))
    }
}

/// Query string for the trivia API. A query that does not fit `T`
/// rejects with a 422 `unprocessable` body.
#[derive(Debug)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| ApiError::unprocessable(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Accept an integer written either as a JSON number or as a numeric
/// string.
///
/// Browser clients commonly post values taken from `<select>` elements,
/// which arrive as strings.
pub fn flexible_int<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntRepr<N> {
        Number(N),
        Text(String),
    }

    match IntRepr::<T>::deserialize(deserializer)? {
        IntRepr::Number(n) => Ok(n),
        IntRepr::Text(raw) => raw
            .trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid integer '{raw}': {e}"))),
    }
}

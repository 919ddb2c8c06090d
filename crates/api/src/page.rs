//! Page documents returned by the Fyyur site.
//!
//! Templating happens outside this service: each response names the
//! template to render, carries the flashed messages for this response and
//! the view model, as `{ "template": ..., "flash": [...], "data": ... }`.

use axum::response::{IntoResponse, Response};
use axum::Json;
use marquee_core::forms::{GENRE_CHOICES, STATE_CHOICES};
use serde::Serialize;

pub const HOME: &str = "pages/home.html";

/// A rendered-page envelope.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub template: &'static str,
    pub flash: Vec<String>,
    pub data: T,
}

impl<T: Serialize> Page<T> {
    pub fn new(template: &'static str, data: T) -> Self {
        Self {
            template,
            flash: Vec::new(),
            data,
        }
    }

    /// Append a flashed message.
    pub fn flash(mut self, message: impl Into<String>) -> Self {
        self.flash.push(message.into());
        self
    }
}

impl Page<()> {
    /// The landing page, which carries no view model.
    pub fn home() -> Self {
        Page::new(HOME, ())
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Choices offered by the venue and artist forms.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FormChoices {
    pub genres: &'static [&'static str],
    pub states: &'static [&'static str],
}

impl FormChoices {
    pub const LISTING: FormChoices = FormChoices {
        genres: GENRE_CHOICES,
        states: STATE_CHOICES,
    };
}

/// View model of a form page: the current values (if any) and the
/// allowed choices.
#[derive(Debug, Serialize)]
pub struct FormPage<T: Serialize> {
    pub form: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<FormChoices>,
}

impl<T: Serialize> FormPage<T> {
    pub fn listing(form: Option<T>) -> Self {
        Self {
            form,
            choices: Some(FormChoices::LISTING),
        }
    }

    pub fn plain(form: Option<T>) -> Self {
        Self {
            form,
            choices: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_serializes_envelope() {
        let page = Page::new("pages/artists.html", vec![1, 2]).flash("hello");
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["template"], "pages/artists.html");
        assert_eq!(json["flash"][0], "hello");
        assert_eq!(json["data"][1], 2);
    }

    #[test]
    fn home_page_has_null_data() {
        let json = serde_json::to_value(Page::home()).unwrap();
        assert_eq!(json["template"], HOME);
        assert!(json["data"].is_null());
        assert_eq!(json["flash"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn plain_form_page_omits_choices() {
        let json = serde_json::to_value(FormPage::<()>::plain(None)).unwrap();
        assert!(json.get("choices").is_none());
        let json = serde_json::to_value(FormPage::<()>::listing(None)).unwrap();
        assert_eq!(json["choices"]["states"].as_array().unwrap().len(), 51);
    }
}

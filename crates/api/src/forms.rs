//! Typed submission forms for the Fyyur site.
//!
//! Each form is built once from the raw form-encoded pairs, rejecting
//! unknown fields, and then checked with `validator` before anything
//! reaches a repository.

use marquee_core::error::CoreError;
use marquee_core::forms::{
    non_blank, parse_flag, parse_start_time, validate_genres, validate_not_blank, validate_phone,
    validate_state,
};
use marquee_core::types::DbId;
use marquee_db::models::artist::{Artist, ArtistFields};
use marquee_db::models::show::CreateShow;
use marquee_db::models::venue::{Venue, VenueFields};
use serde::Serialize;
use validator::{Validate, ValidationErrors};

fn unknown_field(field: &str) -> CoreError {
    CoreError::Validation(format!("Unknown field '{field}'"))
}

/// Comma-separated names of the fields that failed validation.
pub fn invalid_fields(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors.field_errors().keys().map(|k| k.to_string()).collect();
    fields.sort_unstable();
    fields.join(", ")
}

// ---------------------------------------------------------------------------
// Venue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct VenueForm {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(length(max = 120), custom(function = "validate_not_blank"))]
    pub city: String,
    #[validate(custom(function = "validate_state"))]
    pub state: String,
    #[validate(length(max = 120), custom(function = "validate_not_blank"))]
    pub address: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,
    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,
    #[validate(url, length(max = 500))]
    pub website: Option<String>,
    #[validate(custom(function = "validate_genres"))]
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, CoreError> {
        let mut form = Self::default();
        let mut seeking = None;
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value.trim().to_string(),
                "city" => form.city = value.trim().to_string(),
                "state" => form.state = value.trim().to_string(),
                "address" => form.address = value.trim().to_string(),
                "phone" => form.phone = non_blank(Some(value)),
                "image_link" => form.image_link = non_blank(Some(value)),
                "facebook_link" => form.facebook_link = non_blank(Some(value)),
                "website" => form.website = non_blank(Some(value)),
                "genres" => form.genres.push(value),
                "seeking_talent" => seeking = Some(value),
                "seeking_description" => form.seeking_description = non_blank(Some(value)),
                other => return Err(unknown_field(other)),
            }
        }
        form.seeking_talent = parse_flag("seeking_talent", seeking.as_deref())?;
        Ok(form)
    }
}

impl From<VenueForm> for VenueFields {
    fn from(form: VenueForm) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            address: form.address,
            phone: form.phone,
            image_link: form.image_link,
            facebook_link: form.facebook_link,
            website: form.website,
            genres: form.genres,
            seeking_talent: form.seeking_talent,
            seeking_description: form.seeking_description,
        }
    }
}

impl From<Venue> for VenueForm {
    fn from(venue: Venue) -> Self {
        Self {
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            image_link: venue.image_link,
            facebook_link: venue.facebook_link,
            website: venue.website,
            genres: venue.genres,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
        }
    }
}

// ---------------------------------------------------------------------------
// Artist
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Validate)]
pub struct ArtistForm {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(length(max = 120), custom(function = "validate_not_blank"))]
    pub city: String,
    #[validate(custom(function = "validate_state"))]
    pub state: String,
    #[validate(custom(function = "validate_phone"))]
    pub phone: Option<String>,
    #[validate(custom(function = "validate_genres"))]
    pub genres: Vec<String>,
    #[validate(url, length(max = 500))]
    pub image_link: Option<String>,
    #[validate(url, length(max = 120))]
    pub facebook_link: Option<String>,
    #[validate(url, length(max = 500))]
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, CoreError> {
        let mut form = Self::default();
        let mut seeking = None;
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value.trim().to_string(),
                "city" => form.city = value.trim().to_string(),
                "state" => form.state = value.trim().to_string(),
                "phone" => form.phone = non_blank(Some(value)),
                "genres" => form.genres.push(value),
                "image_link" => form.image_link = non_blank(Some(value)),
                "facebook_link" => form.facebook_link = non_blank(Some(value)),
                "website" => form.website = non_blank(Some(value)),
                "seeking_venue" => seeking = Some(value),
                "seeking_description" => form.seeking_description = non_blank(Some(value)),
                other => return Err(unknown_field(other)),
            }
        }
        form.seeking_venue = parse_flag("seeking_venue", seeking.as_deref())?;
        Ok(form)
    }
}

impl From<ArtistForm> for ArtistFields {
    fn from(form: ArtistForm) -> Self {
        Self {
            name: form.name,
            city: form.city,
            state: form.state,
            phone: form.phone,
            genres: form.genres,
            image_link: form.image_link,
            facebook_link: form.facebook_link,
            website: form.website,
            seeking_venue: form.seeking_venue,
            seeking_description: form.seeking_description,
        }
    }
}

impl From<Artist> for ArtistForm {
    fn from(artist: Artist) -> Self {
        Self {
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres,
            image_link: artist.image_link,
            facebook_link: artist.facebook_link,
            website: artist.website,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
        }
    }
}

// ---------------------------------------------------------------------------
// Show
// ---------------------------------------------------------------------------

/// Submitted values of the show form, kept as text so a rejected form can
/// be redisplayed exactly as typed.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShowForm {
    pub artist_id: String,
    pub venue_id: String,
    pub start_time: String,
}

impl ShowForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, CoreError> {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "artist_id" => form.artist_id = value.trim().to_string(),
                "venue_id" => form.venue_id = value.trim().to_string(),
                "start_time" => form.start_time = value.trim().to_string(),
                other => return Err(unknown_field(other)),
            }
        }
        Ok(form)
    }

    /// Parse the text fields into a show to insert.
    pub fn to_show(&self) -> Result<CreateShow, CoreError> {
        Ok(CreateShow {
            artist_id: parse_id("artist_id", &self.artist_id)?,
            venue_id: parse_id("venue_id", &self.venue_id)?,
            start_time: parse_start_time(&self.start_time)?,
        })
    }
}

fn parse_id(field: &str, raw: &str) -> Result<DbId, CoreError> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::Validation(format!(
            "{field} must be a positive integer, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn musical_hop() -> Vec<(String, String)> {
        pairs(&[
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
            ("website", ""),
            ("seeking_talent", "Yes"),
            ("seeking_description", "We are on the lookout for a local artist"),
        ])
    }

    #[test]
    fn venue_form_collects_repeated_genres_as_scalars() {
        let form = VenueForm::from_pairs(musical_hop()).unwrap();
        assert!(form.validate().is_ok());
        assert_eq!(form.name, "The Musical Hop");
        assert_eq!(form.genres, vec!["Jazz", "Reggae"]);
        assert_eq!(form.website, None);
        assert!(form.seeking_talent);

        let fields = VenueFields::from(form);
        assert_eq!(fields.city, "San Francisco");
    }

    #[test]
    fn venue_form_rejects_unknown_fields() {
        let mut raw = musical_hop();
        raw.push(("admin".into(), "true".into()));
        assert_matches!(VenueForm::from_pairs(raw), Err(CoreError::Validation(_)));
    }

    #[test]
    fn venue_form_reports_missing_required_fields() {
        let form = VenueForm::from_pairs(pairs(&[("name", "Lonely")])).unwrap();
        let errors = form.validate().unwrap_err();
        assert_eq!(invalid_fields(&errors), "address, city, genres, state");
    }

    #[test]
    fn venue_form_rejects_bad_urls_and_phones() {
        let mut raw = musical_hop();
        raw.push(("image_link".into(), "not a url".into()));
        raw.retain(|(k, _)| k != "phone");
        raw.push(("phone".into(), "12".into()));
        let form = VenueForm::from_pairs(raw).unwrap();
        let errors = form.validate().unwrap_err();
        assert_eq!(invalid_fields(&errors), "image_link, phone");
    }

    #[test]
    fn artist_form_parses_seeking_flag() {
        let form = ArtistForm::from_pairs(pairs(&[
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "Rock n Roll"),
            ("seeking_venue", "No"),
        ]))
        .unwrap();
        assert!(form.validate().is_ok());
        assert!(!form.seeking_venue);
    }

    #[test]
    fn artist_form_rejects_bad_flag() {
        let result = ArtistForm::from_pairs(pairs(&[("seeking_venue", "perhaps")]));
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn show_form_parses_ids_and_start_time() {
        let form = ShowForm::from_pairs(pairs(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01 20:00:00"),
        ]))
        .unwrap();
        let show = form.to_show().unwrap();
        assert_eq!(show.artist_id, 4);
        assert_eq!(show.venue_id, 1);
        assert_eq!(show.start_time.to_rfc3339(), "2035-04-01T20:00:00+00:00");
    }

    #[test]
    fn show_form_rejects_non_numeric_ids() {
        let form = ShowForm::from_pairs(pairs(&[
            ("artist_id", "four"),
            ("venue_id", "1"),
            ("start_time", "2035-04-01 20:00:00"),
        ]))
        .unwrap();
        assert_matches!(form.to_show(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn show_form_rejects_bad_start_time() {
        let form = ShowForm::from_pairs(pairs(&[
            ("artist_id", "4"),
            ("venue_id", "1"),
            ("start_time", "April 1st"),
        ]))
        .unwrap();
        assert_matches!(form.to_show(), Err(CoreError::Validation(_)));
    }
}

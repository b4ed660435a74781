//! HTML rendering
//!
//! Maps a [`ViewState`] to the card grid page. Pure view code: nothing here
//! fetches or mutates state.

use crate::api::CharacterRecord;
use crate::error::{Error, Result};
use crate::gallery::ViewId;
use crate::pagination::ViewState;
use askama::Template;

/// Display data for one character card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: u64,
    pub name: String,
    pub image: String,
    pub alt: String,
    pub gender: String,
    pub location: String,
    pub origin: String,
    pub species: String,
}

impl From<&CharacterRecord> for CardView {
    fn from(record: &CharacterRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.clone(),
            image: record.image.clone(),
            alt: format!("{} Thumbnail", record.name),
            gender: record.gender.clone(),
            location: record.location_name().unwrap_or_default().to_string(),
            origin: record.origin_name().unwrap_or_default().to_string(),
            species: record.species.clone(),
        }
    }
}

/// Static page headings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub title: String,
    pub subtitle: String,
}

impl Default for PageText {
    fn default() -> Self {
        Self {
            title: "Rick & Morty Challenge".to_string(),
            subtitle: "Every character, one page at a time".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "gallery.html")]
struct GalleryPage<'a> {
    text: &'a PageText,
    view_id: ViewId,
    cards: Vec<CardView>,
    has_more: bool,
    total: u64,
}

#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage<'a> {
    text: &'a PageText,
    status: u16,
    message: &'a str,
}

/// Map every record of the view to a card, in list order
pub fn cards(view: &ViewState) -> Vec<CardView> {
    view.results.iter().map(CardView::from).collect()
}

/// Render the gallery page for a view
pub fn render_gallery(view_id: ViewId, view: &ViewState, text: &PageText) -> Result<String> {
    GalleryPage {
        text,
        view_id,
        cards: cards(view),
        has_more: view.has_more(),
        total: view.page.count,
    }
    .render()
    .map_err(|e| Error::render(e.to_string()))
}

/// Render the stand-in error page
pub fn render_error(status: u16, message: &str, text: &PageText) -> Result<String> {
    ErrorPage {
        text,
        status,
        message,
    }
    .render()
    .map_err(|e| Error::render(e.to_string()))
}

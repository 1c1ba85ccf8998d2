use crate::errors::SearchError;
use serde::Deserialize;

pub mod serpapi;

/// Either half may be absent in a provider answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct GpsCoordinates {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// A place as returned by the maps search. Every field is optional because the
/// provider omits whatever it does not know.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub place_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, rename = "type")]
    pub category: Option<String>,
    #[serde(default)]
    pub gps_coordinates: Option<GpsCoordinates>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub snippet: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

/// One page of reviews. `next_page_token` is `Some` only when the provider has
/// more pages for the same place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewPage {
    pub reviews: Vec<Review>,
    pub next_page_token: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchArea {
    pub lat: f64,
    pub lon: f64,
    pub radius: u32,
    pub zoom: u8,
}

pub trait PlaceFinder {
    fn find_places(&self, area: &SearchArea) -> Result<Vec<Place>, SearchError>;
}

pub trait ReviewFetcher {
    fn fetch_reviews(
        &self,
        place_id: &str,
        next_page_token: Option<&str>,
    ) -> Result<ReviewPage, SearchError>;
}

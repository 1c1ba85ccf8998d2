use crate::errors::SearchError;
use crate::search::{Place, PlaceFinder, Review, ReviewFetcher, ReviewPage, SearchArea};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

const MAPS_ENGINE: &str = "google_maps";
const CATEGORY_QUERY: &str = "grocery store";
const REVIEWS_ENGINE: &str = "google_maps_reviews";
const NO_RESULTS_PREFIX: &str = "Google hasn't returned any results";

#[derive(Debug, Deserialize)]
struct MapsSearchResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    local_results: Option<Vec<Place>>,
    // Sent instead of `local_results` when the query resolves to a single place.
    #[serde(default)]
    place_results: Option<Place>,
}

#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    reviews: Vec<Review>,
    #[serde(default)]
    next_page_token: Option<String>,
    #[serde(default)]
    serpapi_pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    #[serde(default)]
    next_page_token: Option<String>,
}

pub struct SerpApiClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl SerpApiClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self {
            base_url,
            api_key,
            client: Client::new(),
        }
    }

    fn get<T: DeserializeOwned>(&self, params: &[(&str, String)]) -> Result<T, SearchError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(SearchError::MissingCredential("SERPAPI_KEY"))?;

        let endpoint = format!("{}/search.json", self.base_url.trim_end_matches('/'));
        let mut query: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("api_key", api_key));
        let url = url::Url::parse_with_params(&endpoint, &query)
            .map_err(|e| SearchError::Http(format!("build url {endpoint}: {e}")))?;

        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| SearchError::Http(format!("connect {}: {}", self.base_url, e)))?;
        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| SearchError::Http(format!("read body: {e}")))?;
        if !status.is_success() {
            // SerpApi explains most failures in an `error` field.
            let detail = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or(body);
            return Err(SearchError::Status {
                status: status.as_u16(),
                body: detail,
            });
        }
        serde_json::from_str(&body).map_err(|e| SearchError::Decode(e.to_string()))
    }
}

fn check_provider_error(error: Option<String>) -> Result<(), SearchError> {
    match error {
        Some(msg) if !msg.starts_with(NO_RESULTS_PREFIX) => Err(SearchError::Provider(msg)),
        _ => Ok(()),
    }
}

impl PlaceFinder for SerpApiClient {
    fn find_places(&self, area: &SearchArea) -> Result<Vec<Place>, SearchError> {
        let params = [
            ("engine", MAPS_ENGINE.to_string()),
            ("q", CATEGORY_QUERY.to_string()),
            ("type", "search".to_string()),
            ("ll", format!("@{},{},{}z", area.lat, area.lon, area.zoom)),
            ("radius", area.radius.to_string()),
        ];
        tracing::debug!(
            query = CATEGORY_QUERY,
            lat = area.lat,
            lon = area.lon,
            radius = area.radius,
            "searching places"
        );
        let resp: MapsSearchResponse = self.get(&params)?;
        check_provider_error(resp.error)?;
        let places = match (resp.local_results, resp.place_results) {
            (Some(list), _) => list,
            (None, Some(single)) => vec![single],
            (None, None) => Vec::new(),
        };
        Ok(places)
    }
}

impl ReviewFetcher for SerpApiClient {
    fn fetch_reviews(
        &self,
        place_id: &str,
        next_page_token: Option<&str>,
    ) -> Result<ReviewPage, SearchError> {
        let mut params = vec![
            ("engine", REVIEWS_ENGINE.to_string()),
            ("type", "search".to_string()),
            ("place_id", place_id.to_string()),
        ];
        if let Some(token) = next_page_token {
            params.push(("next_page_token", token.to_string()));
        }
        tracing::debug!(%place_id, has_token = next_page_token.is_some(), "fetching reviews page");
        let resp: ReviewsResponse = self.get(&params)?;
        check_provider_error(resp.error)?;
        let next_page_token = resp
            .next_page_token
            .or_else(|| resp.serpapi_pagination.and_then(|p| p.next_page_token))
            .filter(|t| !t.is_empty());
        Ok(ReviewPage {
            reviews: resp.reviews,
            next_page_token,
        })
    }
}

//! Storefront client: turns a store page URL into a [`FetchedRecord`].
//!
//! - Extracts the numeric app id from the `/app/<digits>` path segment.
//! - Requests product details and review statistics concurrently; both must
//!   succeed.
//! - Falls back to a fixed price when none is published and the product is not
//!   free, and to no review count when the statistics are unusable.

use std::sync::OnceLock;

use regex::Regex;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config::AppConfig;
use crate::domain::{AppId, FetchedRecord};
use crate::error::{CalcError, FETCH_FAILED_MESSAGE};
use crate::infra::relay::{AllOriginsRelay, Relay, RelayError};

/// Used when the product has neither a price nor a free flag.
pub const DEFAULT_PRICE: f64 = 19.99;
const UNKNOWN_GAME: &str = "Unknown Game";

pub const EMPTY_URL_MESSAGE: &str = "Please enter a Steam store URL.";
pub const INVALID_URL_MESSAGE: &str =
    "Invalid Steam store URL. Please use a valid Steam store page URL.";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("relay error: {0}")]
    Relay(#[from] RelayError),
    #[error("game {0} not found or not available")]
    NotFound(AppId),
    #[error("malformed product payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub fn extract_app_id(url: &str) -> Option<AppId> {
    static APP_PATH: OnceLock<Regex> = OnceLock::new();
    let pattern = APP_PATH.get_or_init(|| Regex::new(r"/app/(\d+)").expect("app path pattern"));
    pattern
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
}

#[derive(Clone)]
pub struct StoreClient<R = AllOriginsRelay> {
    relay: R,
    base_url: Url,
}

impl StoreClient<AllOriginsRelay> {
    pub fn from_config(config: &AppConfig) -> Result<Self, StoreError> {
        let relay = AllOriginsRelay::new(&config.relay_url)?;
        Self::with_relay(relay, &config.store_url)
    }
}

impl<R: Relay> StoreClient<R> {
    pub fn with_relay(relay: R, base: &str) -> Result<Self, StoreError> {
        Ok(Self {
            relay,
            base_url: Url::parse(base)?,
        })
    }

    /// Validates the page URL, then fetches. Nothing goes over the network
    /// unless an app id was found.
    pub async fn acquire(&self, page_url: &str) -> Result<FetchedRecord, CalcError> {
        let page_url = page_url.trim();
        if page_url.is_empty() {
            return Err(CalcError::validation(EMPTY_URL_MESSAGE));
        }
        let app_id =
            extract_app_id(page_url).ok_or_else(|| CalcError::validation(INVALID_URL_MESSAGE))?;
        self.fetch_game(&app_id).await.map_err(|err| {
            tracing::error!("Acquisition of app {app_id} failed: {err}");
            CalcError::fetch(FETCH_FAILED_MESSAGE)
        })
    }

    pub async fn fetch_game(&self, app_id: &str) -> Result<FetchedRecord, StoreError> {
        let details_url = self.details_url(app_id)?;
        let reviews_url = self.reviews_url(app_id)?;

        let (details, reviews) = tokio::try_join!(
            self.relay.get_json(&details_url),
            self.relay.get_json(&reviews_url),
        )?;

        let product = parse_product(app_id, details)?;
        let review_count = parse_review_count(reviews);
        let price = product_price(&product);

        if review_count.is_none() {
            tracing::warn!("No usable review total for app {app_id}");
        }

        let record = FetchedRecord {
            app_id: app_id.to_string(),
            name: product.name.unwrap_or_else(|| UNKNOWN_GAME.to_string()),
            price,
            review_count,
        };
        tracing::info!(
            app_id,
            name = %record.name,
            price = record.price,
            review_count = ?record.review_count,
            "Fetched game data"
        );
        Ok(record)
    }

    fn details_url(&self, app_id: &str) -> Result<Url, url::ParseError> {
        let mut url = self.base_url.join("api/appdetails")?;
        url.query_pairs_mut()
            .append_pair("appids", app_id)
            .append_pair("filters", "basic,price_overview");
        Ok(url)
    }

    fn reviews_url(&self, app_id: &str) -> Result<Url, url::ParseError> {
        let mut url = self.base_url.join(&format!("appreviews/{app_id}"))?;
        url.query_pairs_mut()
            .append_pair("json", "1")
            .append_pair("filter", "all")
            .append_pair("language", "all")
            .append_pair("purchase_type", "all");
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct AppDetailsDto {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<ProductDto>,
}

#[derive(Debug, Default, Deserialize)]
struct ProductDto {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    is_free: Option<bool>,
    #[serde(default)]
    price_overview: Option<PriceOverviewDto>,
}

#[derive(Debug, Deserialize)]
struct PriceOverviewDto {
    /// Minor currency units.
    #[serde(default)]
    initial: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct ReviewsDto {
    #[serde(default)]
    success: Option<i64>,
    #[serde(default)]
    query_summary: Option<QuerySummaryDto>,
}

#[derive(Debug, Deserialize)]
struct QuerySummaryDto {
    #[serde(default)]
    total_reviews: Option<u64>,
}

fn parse_product(app_id: &str, mut details: Value) -> Result<ProductDto, StoreError> {
    let entry = details
        .get_mut(app_id)
        .map(Value::take)
        .ok_or_else(|| StoreError::NotFound(app_id.to_string()))?;
    let dto: AppDetailsDto = serde_json::from_value(entry)?;
    match dto {
        AppDetailsDto {
            success: true,
            data: Some(product),
        } => Ok(product),
        _ => Err(StoreError::NotFound(app_id.to_string())),
    }
}

fn product_price(product: &ProductDto) -> f64 {
    if let Some(initial) = product
        .price_overview
        .as_ref()
        .and_then(|overview| overview.initial)
    {
        return initial as f64 / 100.0;
    }
    if product.is_free.unwrap_or(false) {
        return 0.0;
    }
    tracing::warn!("No price published; using default {DEFAULT_PRICE}");
    DEFAULT_PRICE
}

fn parse_review_count(reviews: Value) -> Option<u64> {
    let dto = serde_json::from_value::<ReviewsDto>(reviews).ok()?;
    if dto.success != Some(1) {
        return None;
    }
    dto.query_summary.and_then(|summary| summary.total_reviews)
}

//! Asynchronous client for the listing store's REST endpoint.
//!
//! - Fetches active manual listings ordered by investment score.
//! - Decodes records one by one and drops the ones that do not fit the
//!   `Listing` shape.

use std::time::Duration;

use reqwest::{header, Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::domain::Listing;

pub const LISTINGS_PATH: &str = "rest/v1/listings";
pub const LISTING_LIMIT: usize = 50;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);
const USER_AGENT: &str = concat!("porsche-tracker/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ListingsClientError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("listing store answered with status {0}")]
    Status(StatusCode),
    #[error("unexpected response shape: {0}")]
    Decode(String),
}

#[derive(Clone)]
pub struct ListingsClient {
    http: Client,
    config: ClientConfig,
}

impl ListingsClient {
    pub fn new(config: ClientConfig) -> Result<Self, ListingsClientError> {
        // A hung store must still end in an error so the load can fall back.
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_http(config, http))
    }

    pub fn with_http(config: ClientConfig, http: Client) -> Self {
        Self { http, config }
    }

    /// Endpoint URL including the fixed filter, order and limit parameters.
    pub fn listings_url(&self) -> Result<Url, ListingsClientError> {
        let mut base = self.config.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let mut url = Url::parse(&base)?.join(LISTINGS_PATH)?;
        url.query_pairs_mut()
            .append_pair("status", "eq.active")
            .append_pair("transmission", "eq.manual")
            .append_pair("order", "investment_score.desc")
            .append_pair("limit", &LISTING_LIMIT.to_string());
        Ok(url)
    }

    pub async fn fetch_listings(&self) -> Result<Vec<Listing>, ListingsClientError> {
        let url = self.listings_url()?;
        debug!(%url, "requesting listings");

        let key = self.config.api_key.as_str();
        let response = self
            .http
            .get(url)
            .header("apikey", key)
            .header(header::AUTHORIZATION, format!("Bearer {key}"))
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ListingsClientError::Status(status));
        }

        let raw: serde_json::Value = response.json().await?;
        let listings = decode_listings(raw)?;
        debug!(count = listings.len(), "decoded listings");
        Ok(listings)
    }
}

/// Decodes a response body that must be a JSON array of listing objects.
///
/// Elements that are missing a required field, or carry one of the wrong
/// type, are dropped with a warning. The rest keep their original order.
pub fn decode_listings(value: serde_json::Value) -> Result<Vec<Listing>, ListingsClientError> {
    let serde_json::Value::Array(entries) = value else {
        return Err(ListingsClientError::Decode(format!(
            "expected a JSON array, got {}",
            json_kind(&value)
        )));
    };

    let total = entries.len();
    let listings: Vec<Listing> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match decode_listing(entry) {
            Ok(listing) => Some(listing),
            Err(reason) => {
                warn!(index, %reason, "dropping malformed listing record");
                None
            }
        })
        .collect();

    if listings.len() < total {
        warn!(
            kept = listings.len(),
            dropped = total - listings.len(),
            "listing response contained malformed records"
        );
    }
    Ok(listings)
}

fn decode_listing(entry: serde_json::Value) -> Result<Listing, String> {
    let dto: ListingDto = serde_json::from_value(entry).map_err(|err| err.to_string())?;
    Listing::try_from(dto)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[derive(Debug, Deserialize)]
struct ListingDto {
    #[serde(deserialize_with = "string_from_json")]
    id: String,
    source: String,
    model: String,
    year: i32,
    price: f64,
    currency: String,
    #[serde(default)]
    mileage: Option<f64>,
    transmission: String,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    seller_type: Option<String>,
    #[serde(default)]
    investment_score: Option<f64>,
    #[serde(default)]
    market_value: Option<f64>,
    #[serde(default)]
    rarity_score: Option<String>,
    #[serde(default)]
    description: Option<String>,
    images_count: u32,
    first_seen: String,
    status: String,
    url: String,
}

impl TryFrom<ListingDto> for Listing {
    type Error = String;

    fn try_from(dto: ListingDto) -> Result<Self, Self::Error> {
        let first_seen = parse_timestamp(&dto.first_seen)
            .ok_or_else(|| format!("first_seen is not an ISO 8601 timestamp: {}", dto.first_seen))?;

        Ok(Self {
            id: dto.id,
            source: dto.source,
            model: dto.model,
            year: dto.year,
            price: dto.price,
            currency: dto.currency,
            mileage: dto.mileage,
            transmission: dto.transmission,
            color: dto.color,
            country: dto.country,
            city: dto.city,
            seller_type: dto.seller_type,
            investment_score: dto.investment_score,
            market_value: dto.market_value,
            rarity_score: dto.rarity_score,
            description: dto.description,
            images_count: dto.images_count,
            first_seen,
            status: dto.status,
            url: dto.url,
        })
    }
}

/// RFC 3339, or an ISO 8601 date-time without offset taken as UTC.
fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .or_else(|| {
            PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT)
                .ok()
                .map(PrimitiveDateTime::assume_utc)
        })
}

fn string_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct StringOrNumber;

    impl<'de> serde::de::Visitor<'de> for StringOrNumber {
        type Value = String;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a string or integer id")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(StringOrNumber)
}


#[cfg(test)]
mod tests {
    use serde_json::json;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    use super::test_support::{client_for, serve_once};
    use super::*;

    fn record(id: serde_json::Value) -> serde_json::Value {
        json!({
            "id": id,
            "source": "mobile.de",
            "model": "997.2 Carrera",
            "year": 2009,
            "price": 64500,
            "currency": "EUR",
            "transmission": "manual",
            "images_count": 22,
            "first_seen": "2024-03-01T09:30:00+00:00",
            "status": "active",
            "url": "https://mobile.de/listing/42"
        })
    }

    #[test]
    fn listings_url_carries_the_fixed_query() {
        let url = client_for("https://demo.supabase.co").listings_url().unwrap();
        assert_eq!(url.path(), "/rest/v1/listings");
        assert_eq!(
            url.query(),
            Some("status=eq.active&transmission=eq.manual&order=investment_score.desc&limit=50")
        );
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = client_for("").listings_url().unwrap_err();
        assert!(matches!(err, ListingsClientError::InvalidUrl(_)));
    }

    #[test]
    fn decode_keeps_absent_optionals_absent() {
        let listings = decode_listings(json!([record(json!("abc"))])).unwrap();
        assert_eq!(listings.len(), 1);
        let listing = &listings[0];
        assert_eq!(listing.id, "abc");
        assert_eq!(listing.price, 64_500.0);
        assert_eq!(listing.market_value, None);
        assert_eq!(listing.investment_score, None);
        assert_eq!(listing.mileage, None);
        assert_eq!(listing.first_seen.year(), 2024);
    }

    #[test]
    fn decode_accepts_numeric_ids_and_null_optionals() {
        let mut entry = record(json!(42));
        entry["market_value"] = serde_json::Value::Null;
        entry["investment_score"] = json!(8.7);
        let listings = decode_listings(json!([entry])).unwrap();
        assert_eq!(listings[0].id, "42");
        assert_eq!(listings[0].market_value, None);
        assert_eq!(listings[0].investment_score, Some(8.7));
    }

    #[test]
    fn decode_drops_records_missing_required_fields() {
        let mut broken = record(json!("broken"));
        broken
            .as_object_mut()
            .expect("record is an object")
            .remove("price");
        let mut bad_date = record(json!("bad-date"));
        bad_date["first_seen"] = json!("yesterday");

        let listings =
            decode_listings(json!([record(json!("ok")), broken, bad_date])).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, "ok");
    }

    #[test]
    fn decode_rejects_non_array_bodies() {
        let err = decode_listings(json!({ "message": "nope" })).unwrap_err();
        assert!(matches!(err, ListingsClientError::Decode(_)));
    }

    #[test]
    fn timestamps_without_offset_are_read_as_utc() {
        let parsed = parse_timestamp("2024-03-01T09:30:00").unwrap();
        assert_eq!(parsed.offset(), time::UtcOffset::UTC);
        assert_eq!(parsed.hour(), 9);
    }

    #[tokio::test]
    async fn fetch_sends_query_and_auth_headers() {
        let (base, server) = serve_once("HTTP/1.1 200 OK", "[]").await;
        let listings = client_for(&base).fetch_listings().await.unwrap();
        assert!(listings.is_empty());

        let request = server.await.unwrap().to_ascii_lowercase();
        assert!(request.starts_with(
            "get /rest/v1/listings?status=eq.active&transmission=eq.manual&order=investment_score.desc&limit=50 http/1.1"
        ));
        assert!(request.contains("apikey: test-key"));
        assert!(request.contains("authorization: bearer test-key"));
        assert!(request.contains("content-type: application/json"));
    }

    #[tokio::test]
    async fn fetch_reports_non_success_status() {
        let (base, server) = serve_once("HTTP/1.1 503 Service Unavailable", "").await;
        let err = client_for(&base).fetch_listings().await.unwrap_err();
        assert!(matches!(
            err,
            ListingsClientError::Status(StatusCode::SERVICE_UNAVAILABLE)
        ));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn fetch_times_out_when_the_store_never_answers() {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut buf = [0_u8; 1024];
            let _ = socket.read(&mut buf).await;
            tokio::time::sleep(Duration::from_secs(3600)).await;
        });

        let config = ClientConfig {
            base_url: format!("http://{addr}"),
            api_key: "test-key".to_string(),
        };
        let http = Client::builder()
            .no_proxy()
            .timeout(Duration::from_millis(200))
            .build()
            .expect("client builds");
        let result = tokio::time::timeout(
            Duration::from_secs(10),
            ListingsClient::with_http(config, http).fetch_listings(),
        )
        .await
        .expect("fetch gives up on its own");

        match result {
            Err(ListingsClientError::Http(err)) => assert!(err.is_timeout()),
            other => panic!("expected a timeout error, got {other:?}"),
        }
        server.abort();
    }
}

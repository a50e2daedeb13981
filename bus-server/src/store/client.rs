//! Supabase (PostgREST) client for the stops and routes tables.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;

use crate::domain::{Route, Stop};

use super::error::StoreError;
use super::rows::{RouteRow, StopRow};
use super::TransitStore;

/// Columns requested from the stops table.
const STOP_COLUMNS: &str = "id,name,lat,lng,nearby_landmarks";

/// Configuration for the Supabase client.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub base_url: String,
    /// Anonymous (public) API key
    pub anon_key: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SupabaseConfig {
    /// Create a new config for the given project.
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
            timeout_secs: 30,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// REST endpoint for a table.
    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }
}

/// Client for the Supabase REST API.
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    stops_url: String,
    routes_url: String,
}

impl SupabaseClient {
    /// Create a new Supabase client.
    pub fn new(config: SupabaseConfig) -> Result<Self, StoreError> {
        let invalid_key = |_| StoreError::Api {
            status: 0,
            message: "Invalid API key format".to_string(),
        };

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("apikey"),
            HeaderValue::from_str(&config.anon_key).map_err(invalid_key)?,
        );
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", config.anon_key)).map_err(invalid_key)?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            stops_url: config.table_url("stops"),
            routes_url: config.table_url("routes"),
        })
    }

    /// Fetch all rows of a table with the given column selection.
    async fn fetch_table<T: DeserializeOwned>(
        &self,
        url: &str,
        select: &str,
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .http
            .get(url)
            .query(&[("select", select)])
            .send()
            .await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(StoreError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        parse_rows(&body)
    }
}

/// Parse a PostgREST response body. A JSON `null` counts as no rows.
fn parse_rows<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, StoreError> {
    let rows: Option<Vec<T>> = serde_json::from_str(body).map_err(|e| StoreError::Json {
        message: e.to_string(),
    })?;
    Ok(rows.unwrap_or_default())
}

impl TransitStore for SupabaseClient {
    async fn fetch_stops(&self) -> Result<Vec<Stop>, StoreError> {
        let rows: Vec<StopRow> = self.fetch_table(&self.stops_url, STOP_COLUMNS).await?;
        Ok(rows.into_iter().map(Stop::from).collect())
    }

    async fn fetch_routes(&self) -> Result<Vec<Route>, StoreError> {
        let rows: Vec<RouteRow> = self.fetch_table(&self.routes_url, "*").await?;
        Ok(rows.into_iter().map(Route::from).collect())
    }
}

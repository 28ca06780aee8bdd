//! HTTP client for the balldontlie games endpoint.

use chrono::NaiveDate;
use reqwest::{header::HeaderMap, Client};
use tracing::debug;

use crate::core::schedule_header_map;
use crate::nba::types::{GameMatchup, GamesEnvelope};
use crate::{Result, API_BASE_ENV_VAR};


/// Base path for the balldontlie v1 API.
pub const NBA_BASE_URL: &str = "https://api.balldontlie.io/v1";

/// Page size requested per call; a single day never has more games than this.
pub const GAMES_PER_PAGE: u32 = 100;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Fetches one day's matchups from the schedule API.
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl ScheduleClient {
    /// Client against `base_url` with explicit headers.
    pub fn new(base_url: impl Into<String>, headers: HeaderMap) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("nba-streak/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers,
        })
    }

    /// Client configured from the environment (`NBA_STREAK_API_BASE`, `BALLDONTLIE_API_KEY`).
    pub fn from_env() -> Result<Self> {
        let base = std::env::var(API_BASE_ENV_VAR).unwrap_or_else(|_| NBA_BASE_URL.to_string());
        Self::new(base, schedule_header_map())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All games scheduled on `day`.
    pub async fn games_for_date(&self, day: NaiveDate) -> Result<Vec<GameMatchup>> {
        let url = format!("{}/games", self.base_url);
        let day_str = day.format("%Y-%m-%d").to_string();
        let per_page = GAMES_PER_PAGE.to_string();
        let params = [
            ("start_date", day_str.as_str()),
            ("end_date", day_str.as_str()),
            ("per_page", per_page.as_str()),
        ];

        debug!("GET {} for {}", url, day_str);

        let envelope = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json::<GamesEnvelope>()
            .await?;

        let games = envelope.into_matchups();
        debug!("{} games scheduled on {}", games.len(), day_str);
        Ok(games)
    }
}

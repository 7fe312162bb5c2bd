use reqwest::Client;
use serde_json::{Map, Value};

use crate::{
    core::http::{default_headers, USER_AGENT},
    Result, Season, SleeperError,
};


/// Base path for the Sleeper v1 API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

/// Thin client over the two Sleeper endpoints this crate reads.
///
/// Every call is a single GET with no retry. A non-success status is turned
/// into [`SleeperError::Http`] before the body is looked at.
#[derive(Debug, Clone)]
pub struct SleeperClient {
    http: Client,
    base_url: String,
    debug: bool,
}

impl SleeperClient {
    /// Client against the public Sleeper API.
    pub fn new() -> Result<Self> {
        Self::with_base_url(SLEEPER_BASE_URL)
    }

    /// Client against another host, e.g. a mock server in tests.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            debug: false,
        })
    }

    /// Print each request URL and its headers to stderr.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /players/nfl: the full current player pool, keyed by player id.
    ///
    /// Sleeper does not version this endpoint by season.
    pub async fn get_players(&self) -> Result<Map<String, Value>> {
        self.get_object("/players/nfl").await
    }

    /// GET /stats/nfl/regular/{season}: regular-season stats, keyed by team.
    pub async fn get_regular_season_stats(&self, season: Season) -> Result<Map<String, Value>> {
        self.get_object(&format!("/stats/nfl/regular/{}", season))
            .await
    }

    async fn get_object(&self, endpoint: &str) -> Result<Map<String, Value>> {
        let url = format!("{}{}", self.base_url, endpoint);
        let builder = self.http.get(&url).headers(default_headers());

        if self.debug {
            if let Some(req) = builder.try_clone().and_then(|b| b.build().ok()) {
                eprintln!("URL => {}", req.url());
                eprintln!("HEADERS:");
                for (k, v) in req.headers().iter() {
                    eprintln!("  {}: {:?}", k, v);
                }
            }
        }

        let body = builder.send().await?.error_for_status()?.bytes().await?;

        match serde_json::from_slice::<Value>(&body)? {
            Value::Object(map) => Ok(map),
            _ => Err(SleeperError::UnexpectedResponse {
                endpoint: endpoint.to_string(),
                expected: "a JSON object",
            }),
        }
    }
}

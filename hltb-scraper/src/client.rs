use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, REFERER, USER_AGENT};
use tokio::time::Duration;

use crate::error::ScrapeError;
use crate::html;
use crate::request::{SearchModifier, SearchRequest};
use crate::settings::Settings;
use crate::transport::CatalogTransport;

/// HTTP client for the HowLongToBeat website and search API.
pub struct HltbClient {
    http: reqwest::Client,
    settings: Settings,
}

impl HltbClient {
    pub fn new(settings: Settings) -> Result<Self, ScrapeError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(Self { http, settings })
    }

    /// Client built from [`Settings::load`].
    pub fn from_env() -> Result<Self, ScrapeError> {
        Self::new(Settings::load()?)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn search_url(&self, api_key: &str) -> String {
        format!("{}api/search/{}", self.settings.base_url(), api_key)
    }

    fn game_url(&self) -> String {
        format!("{}game", self.settings.base_url())
    }

    fn page_headers(&self) -> Result<HeaderMap, ScrapeError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(self.settings.user_agent())?);
        headers.insert(REFERER, header_value(&self.settings.base_url())?);
        Ok(headers)
    }

    fn search_headers(&self) -> Result<HeaderMap, ScrapeError> {
        let mut headers = self.page_headers()?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
        Ok(headers)
    }

    fn search_request(
        &self,
        api_key: &str,
        payload: &SearchRequest,
    ) -> Result<reqwest::Request, ScrapeError> {
        Ok(self
            .http
            .post(self.search_url(api_key))
            .headers(self.search_headers()?)
            .json(payload)
            .build()?)
    }

    /// Find the search API key, trying the app bundle first and falling back
    /// to every script on the home page.
    pub async fn discover_api_key(&self) -> Result<String, ScrapeError> {
        if let Some(key) = self.find_api_key(false).await? {
            return Ok(key);
        }
        log::debug!("API key not in the app bundle, scanning all scripts");
        self.find_api_key(true).await?.ok_or(ScrapeError::ApiKeyNotFound)
    }

    async fn find_api_key(&self, all_scripts: bool) -> Result<Option<String>, ScrapeError> {
        let base_url = self.settings.base_url();
        let home = self.get_text(&base_url).await?;
        let sources = if all_scripts {
            html::script_sources(&home)
        } else {
            html::app_script_sources(&home)
        };

        for src in sources {
            let script_url = format!("{}{}", base_url, src.trim_start_matches('/'));
            match self.get_text(&script_url).await {
                Ok(script) => {
                    if let Some(key) = html::extract_api_key(&script) {
                        log::debug!("Found search API key in {}", src);
                        return Ok(Some(key));
                    }
                }
                Err(e) => log::warn!("Failed to fetch script {}: {}", script_url, e),
            }
        }
        Ok(None)
    }

    async fn get_text(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = self
            .http
            .get(url)
            .headers(self.page_headers()?)
            .send()
            .await?;
        let status = resp.status();
        let text = resp.text().await?;
        check_status(status, &text)?;
        Ok(text)
    }
}

impl CatalogTransport for HltbClient {
    async fn search_raw(
        &self,
        game_name: &str,
        modifier: SearchModifier,
        page: u32,
    ) -> Result<String, ScrapeError> {
        let api_key = self.discover_api_key().await?;
        let payload = SearchRequest::new(game_name, modifier, page);

        log::debug!("Searching '{}' (page {}, modifier '{}')", game_name, page, modifier);
        let request = self.search_request(&api_key, &payload)?;
        let resp = self.http.execute(request).await?;

        let status = resp.status();
        let text = resp.text().await?;
        check_status(status, &text)?;
        Ok(text)
    }

    async fn game_title(&self, game_id: i64) -> Result<Option<String>, ScrapeError> {
        let resp = self
            .http
            .get(self.game_url())
            .query(&[("id", game_id.to_string())])
            .headers(self.page_headers()?)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        check_status(status, &text)?;
        Ok(html::cut_game_title(&text))
    }
}

fn header_value(value: &str) -> Result<HeaderValue, ScrapeError> {
    HeaderValue::from_str(value.trim())
        .map_err(|e| ScrapeError::Config(format!("Invalid header value '{}': {}", value, e)))
}

fn check_status(status: reqwest::StatusCode, body: &str) -> Result<(), ScrapeError> {
    if status.is_success() {
        return Ok(());
    }
    Err(ScrapeError::ServerError {
        status: status.as_u16(),
        message: body.chars().take(200).collect(),
    })
}

//! HTTP client for the roster API.

use gloo_net::http::{Request, Response};
use roster_core::{
    ApiConfig, Credentials, FetchError, FetchOutcome, MemberSource, SessionToken, SynagogueId,
    SynagogueSummary,
};
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use crate::config::api_config;

/// Browser `fetch` client. Every request carries credentials (cookies).
#[derive(Debug, Clone, PartialEq)]
pub struct HttpClient {
    config: ApiConfig,
}

impl HttpClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    /// Client for the API configured at build time.
    pub fn from_build_config() -> Self {
        Self::new(api_config())
    }

    pub async fn fetch_synagogues(&self) -> Result<Vec<SynagogueSummary>, FetchError> {
        self.get_json(&self.config.synagogues_url()).await
    }

    /// Exchange credentials for a session token.
    pub async fn login(&self, credentials: &Credentials) -> Result<SessionToken, FetchError> {
        let url = self.config.login_url();
        let request = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .json(credentials)
            .map_err(|e| transport_error(&url, e))?;

        let response = request.send().await.map_err(|e| transport_error(&url, e))?;
        read_json(&url, response).await
    }

    /// Revoke a session token on the server.
    pub async fn logout(&self, session: &SessionToken) -> Result<(), FetchError> {
        let url = self.config.logout_url();
        let request = Request::post(&url)
            .credentials(RequestCredentials::Include)
            .json(session)
            .map_err(|e| transport_error(&url, e))?;

        let response = request.send().await.map_err(|e| transport_error(&url, e))?;
        if !response.ok() {
            return Err(FetchError::Status {
                url,
                status: response.status(),
            });
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = Request::get(url)
            .credentials(RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        read_json(url, response).await
    }
}

impl MemberSource for HttpClient {
    async fn fetch_members(&self, synagogue: Option<SynagogueId>) -> FetchOutcome {
        let url = self.config.members_url(synagogue);
        FetchOutcome::from_result(self.get_json(&url).await)
    }
}

async fn read_json<T: DeserializeOwned>(url: &str, response: Response) -> Result<T, FetchError> {
    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

fn transport_error(url: &str, err: gloo_net::Error) -> FetchError {
    FetchError::Transport {
        url: url.to_string(),
        message: err.to_string(),
    }
}

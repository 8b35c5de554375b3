use std::time::Duration;

use async_trait::async_trait;
use midining_shared::{
    Coordinate, chat::ChatReply, dining::DiningInfo, menu::HallMenu, preferences::Preferences,
    user::Credentials,
};
use reqwest::{
    Response,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{ClientError, Result, error::ErrorBody};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Thin client over the dining backend's HTTP/JSON endpoints.
///
/// Every call is a single request: no retries, no caching. Cookies are kept
/// for the lifetime of the client so a login carries over to later calls.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(ClientError::Unreachable)?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    /// `GET /getmenu/`: halls, their status and the recommendation, ranked
    /// for the given position.
    #[tracing::instrument(skip(self))]
    pub async fn dining_info(&self, position: Coordinate) -> Result<DiningInfo> {
        let response = self
            .http
            .get(self.endpoint("getmenu/")?)
            .header("location", header_value("location", &position.to_string())?)
            .send()
            .await?;

        decode(expect_success(response).await?).await
    }

    /// `GET /get_full_menu/`
    #[tracing::instrument(skip(self))]
    pub async fn full_menu(&self) -> Result<Vec<HallMenu>> {
        let response = self
            .http
            .get(self.endpoint("get_full_menu/")?)
            .send()
            .await?;

        decode(expect_success(response).await?).await
    }

    /// `GET /fetch_preferences/`
    #[tracing::instrument(skip(self))]
    pub async fn fetch_preferences(&self) -> Result<Preferences> {
        let response = self
            .http
            .get(self.endpoint("fetch_preferences/")?)
            .send()
            .await?;

        decode(expect_success(response).await?).await
    }

    /// `POST /save_preferences/`
    #[tracing::instrument(skip_all)]
    pub async fn save_preferences(&self, preferences: &Preferences) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint("save_preferences/")?)
            .json(preferences)
            .send()
            .await?;

        expect_success(response).await?;

        Ok(())
    }

    /// `POST /end_session/`, carrying the in-memory profile.
    #[tracing::instrument(skip_all)]
    pub async fn end_session(&self, preferences: &Preferences) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint("end_session/")?)
            .json(preferences)
            .send()
            .await?;

        expect_success(response).await?;

        Ok(())
    }

    /// `POST /send_message/`
    #[tracing::instrument(skip(self))]
    pub async fn send_message(&self, message: &str) -> Result<ChatReply> {
        let response = self
            .http
            .post(self.endpoint("send_message/")?)
            .header("message", header_value("message", message)?)
            .send()
            .await?;

        decode(expect_success(response).await?).await
    }

    /// `POST /signup/`
    #[tracing::instrument(skip_all, fields(uniqname = %credentials.uniqname))]
    pub async fn signup(&self, credentials: &Credentials) -> Result<()> {
        self.post_credentials("signup/", credentials).await
    }

    /// `POST /login/`
    #[tracing::instrument(skip_all, fields(uniqname = %credentials.uniqname))]
    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        self.post_credentials("login/", credentials).await
    }

    async fn post_credentials(&self, path: &str, credentials: &Credentials) -> Result<()> {
        let response = self
            .http
            .post(self.endpoint(path)?)
            .header("uniqname", header_value("uniqname", &credentials.uniqname)?)
            .header("password", header_value("password", &credentials.password)?)
            .send()
            .await?;

        expect_success(response).await?;

        Ok(())
    }
}

/// Seam between the chat overlay and whatever answers it.
#[async_trait]
pub trait ChatService: Send + Sync {
    async fn send_message(&self, message: &str) -> Result<ChatReply>;
}

#[async_trait]
impl ChatService for ApiClient {
    async fn send_message(&self, message: &str) -> Result<ChatReply> {
        ApiClient::send_message(self, message).await
    }
}

/// Header values may carry UTF-8 but no control characters.
fn header_value(name: &'static str, value: &str) -> Result<HeaderValue> {
    HeaderValue::from_bytes(value.as_bytes()).map_err(|_| ClientError::InvalidHeader(name))
}

async fn expect_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let ErrorBody { error, message } = serde_json::from_str(&body).unwrap_or_default();

    tracing::warn!(status = status.as_u16(), error = ?error, message = ?message, "request failed");

    Err(ClientError::Status {
        status: status.as_u16(),
        error,
        message,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let bytes = response.bytes().await?;

    serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
}

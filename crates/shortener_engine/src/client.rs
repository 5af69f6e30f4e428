use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use shortener_logging::{redact_query, shortener_debug};

use crate::{
    FailureKind, RequestMethod, ResponseMode, ShortenError, ShortenResponse, DEFAULT_ENDPOINT,
};

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: String,
    pub method: RequestMethod,
    pub response_mode: ResponseMode,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            method: RequestMethod::Get,
            response_mode: ResponseMode::Echo,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait ShortenClient: Send + Sync {
    /// Issues one request for `url`. No validation, no retries.
    async fn shorten(&self, url: &str) -> Result<ShortenResponse, ShortenError>;
}

#[derive(Serialize)]
struct ShortenRequest<'a> {
    #[serde(rename = "originalUrl")]
    original_url: &'a str,
}

#[derive(Debug, Clone)]
pub struct ReqwestShortenClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestShortenClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ShortenError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ShortenError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn build_request(
        &self,
        endpoint: reqwest::Url,
        url: &str,
    ) -> Result<reqwest::RequestBuilder, ShortenError> {
        let request = match self.settings.method {
            RequestMethod::Get => self.client.get(endpoint),
            RequestMethod::Post => {
                let body = serde_json::to_vec(&ShortenRequest { original_url: url }).map_err(
                    |err| ShortenError::new(FailureKind::MalformedPayload, err.to_string()),
                )?;
                self.client.post(endpoint).body(body)
            }
        };
        Ok(request.header(CONTENT_TYPE, "application/json"))
    }
}

#[async_trait::async_trait]
impl ShortenClient for ReqwestShortenClient {
    async fn shorten(&self, url: &str) -> Result<ShortenResponse, ShortenError> {
        let endpoint = reqwest::Url::parse(&self.settings.endpoint)
            .map_err(|err| ShortenError::new(FailureKind::InvalidEndpoint, err.to_string()))?;

        shortener_debug!(
            "{:?} {} for {}",
            self.settings.method,
            endpoint,
            redact_query(url)
        );
        let response = self
            .build_request(endpoint, url)?
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShortenError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.canonical_reason().unwrap_or_default(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let mut parsed = ShortenResponse::from_json(&body)?;
        if self.settings.response_mode == ResponseMode::Echo {
            parsed.new_url = Some(url.to_string());
        }
        Ok(parsed)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ShortenError {
    if err.is_timeout() {
        return ShortenError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ShortenError::new(FailureKind::MalformedPayload, err.to_string());
    }
    ShortenError::new(FailureKind::Network, err.to_string())
}

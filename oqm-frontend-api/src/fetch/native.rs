use async_trait::async_trait;
use reqwest::{header, Client, Response};

use super::{ApiRequest, Envelope, Fetch, FetchError, Method};

/// Sends requests with [`reqwest`].
#[derive(Debug, Clone, Default)]
pub struct NativeFetch {
    client: Client,
}

impl NativeFetch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(format!("{err}"))
    }
}

#[async_trait(?Send)]
impl Fetch for NativeFetch {
    type Response = Response;

    async fn fetch(&self, request: ApiRequest) -> Result<Response, FetchError> {
        let ApiRequest { method, url, body } = request;
        let http_method = match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
        };
        let mut req = self.client.request(http_method, &url);
        if method.is_write() {
            req = req.header(header::CONTENT_TYPE, "application/json");
        }
        if let Some(body) = body {
            req = req.body(body);
        }
        Ok(req.send().await?)
    }
}

#[async_trait(?Send)]
impl Envelope for Response {
    fn ok(&self) -> bool {
        Response::status(self).is_success()
    }

    fn status(&self) -> u16 {
        Response::status(self).as_u16()
    }

    fn status_text(&self) -> String {
        Response::status(self)
            .canonical_reason()
            .unwrap_or_default()
            .to_owned()
    }

    async fn text(self) -> Result<String, FetchError> {
        Ok(Response::text(self).await?)
    }
}

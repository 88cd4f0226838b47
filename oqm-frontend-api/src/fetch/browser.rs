use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use web_sys::RequestCredentials;

use super::{ApiRequest, Envelope, Fetch, FetchError, Method};

/// Sends requests with the `fetch` API of the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFetch {
    include_credentials: bool,
}

impl BrowserFetch {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_credentials: false,
        }
    }

    /// Send cookies along with cross-origin requests.
    #[must_use]
    pub const fn include_credentials(mut self, include: bool) -> Self {
        self.include_credentials = include;
        self
    }
}

impl From<gloo_net::Error> for FetchError {
    fn from(err: gloo_net::Error) -> Self {
        Self::new(format!("{err}"))
    }
}

#[async_trait(?Send)]
impl Fetch for BrowserFetch {
    type Response = Response;

    async fn fetch(&self, request: ApiRequest) -> Result<Response, FetchError> {
        let ApiRequest { method, url, body } = request;
        let mut req = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Patch => Request::patch(&url),
        };
        if method.is_write() {
            req = req.header("Content-Type", "application/json");
        }
        if self.include_credentials {
            req = req.credentials(RequestCredentials::Include);
        }
        let response = match body {
            Some(body) => req.body(body)?.send().await?,
            None => req.send().await?,
        };
        Ok(response)
    }
}

#[async_trait(?Send)]
impl Envelope for Response {
    fn ok(&self) -> bool {
        Response::ok(self)
    }

    fn status(&self) -> u16 {
        Response::status(self)
    }

    fn status_text(&self) -> String {
        Response::status_text(self)
    }

    async fn text(self) -> Result<String, FetchError> {
        Ok(Response::text(&self).await?)
    }
}

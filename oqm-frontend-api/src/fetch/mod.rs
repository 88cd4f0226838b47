//! The seam between the API and the HTTP implementation in use.

use std::fmt;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(not(target_arch = "wasm32"))]
mod native;

#[cfg(target_arch = "wasm32")]
pub use self::browser::BrowserFetch;
#[cfg(not(target_arch = "wasm32"))]
pub use self::native::NativeFetch;

#[cfg(target_arch = "wasm32")]
pub type DefaultFetch = BrowserFetch;
#[cfg(not(target_arch = "wasm32"))]
pub type DefaultFetch = NativeFetch;

/// The request could not be completed; there is no response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct FetchError(String);

impl FetchError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        }
    }

    /// Write requests are sent with `Content-Type: application/json`.
    #[must_use]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Post | Self::Patch)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON encoded body
    pub body: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub const fn get(url: String) -> Self {
        Self::new(Method::Get, url)
    }

    #[must_use]
    pub const fn post(url: String) -> Self {
        Self::new(Method::Post, url)
    }

    #[must_use]
    pub const fn patch(url: String) -> Self {
        Self::new(Method::Patch, url)
    }

    const fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            body: None,
        }
    }

    pub fn json<B>(mut self, body: &B) -> Result<Self, FetchError>
    where
        B: Serialize,
    {
        let body = serde_json::to_string(body)
            .map_err(|err| FetchError::new(format!("Unable to encode request body: {err}")))?;
        self.body = Some(body);
        Ok(self)
    }
}

/// Sends requests.
#[async_trait(?Send)]
pub trait Fetch {
    type Response: Envelope;

    /// Fails only if no response was received.
    async fn fetch(&self, request: ApiRequest) -> Result<Self::Response, FetchError>;
}

/// A received response.
#[async_trait(?Send)]
pub trait Envelope {
    /// `true` for a 2xx status.
    fn ok(&self) -> bool;

    fn status(&self) -> u16;

    fn status_text(&self) -> String;

    async fn text(self) -> Result<String, FetchError>;
}

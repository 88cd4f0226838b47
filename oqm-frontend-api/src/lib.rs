use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;

pub mod fetch;
mod officer;
mod public;


pub use self::{
    fetch::{ApiRequest, DefaultFetch, Envelope, Fetch, FetchError, Method},
    officer::*,
    public::*,
};

pub type Result<T> = std::result::Result<T, Error>;

/// A normalized API failure.
///
/// Whatever went wrong, [`Error::to_payload`] yields
/// an object of the shape `{ "error": <message> }`
/// (or the unmodified JSON the server rejected the request with).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    /// No response was received.
    #[error("Cannot communicate")]
    Fetch(String),

    /// A response was received but its body could not be decoded.
    #[error("Cannot parse server response")]
    Parse(String),

    /// The server reported an error message.
    #[error("{0}")]
    Api(#[from] oqm_boundary::Error),

    /// The server responded with a failure status and a JSON body
    /// that is not an error payload.
    #[error("{0}")]
    Rejected(Value),
}

impl Error {
    #[must_use]
    pub fn to_payload(&self) -> Value {
        match self {
            Self::Fetch(_) | Self::Parse(_) => json!({ "error": self.to_string() }),
            Self::Api(err) => json!({ "error": err.error }),
            Self::Rejected(value) => value.clone(),
        }
    }

    fn from_rejection(value: Value) -> Self {
        match serde_json::from_value::<oqm_boundary::Error>(value.clone()) {
            Ok(err) => Self::Api(err),
            Err(_) => Self::Rejected(value),
        }
    }
}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Self::Fetch(err.to_string())
    }
}

/// Decode the outcome of a request.
///
/// The server answers every request with a JSON body, even if it is
/// only `{}`, regardless of the status code.
/// Responses that break this rule (empty or non-JSON bodies)
/// end up as [`Error::Parse`].
///
/// - 2xx status: the body decoded as `T`.
/// - other status: the body is the error
///   (see [`Error::Api`] and [`Error::Rejected`]).
/// - no response at all: [`Error::Fetch`].
pub async fn into_json<T, R>(outcome: std::result::Result<R, FetchError>) -> Result<T>
where
    T: DeserializeOwned,
    R: Envelope,
{
    let response = outcome.map_err(|err| {
        log::warn!("Unable to reach the server: {err}");
        Error::from(err)
    })?;
    // ensure we've got 2xx status
    if response.ok() {
        let body = read_body(response).await?;
        serde_json::from_str(&body).map_err(parse_error)
    } else {
        log::warn!(
            "Server responded with {} {}",
            response.status(),
            response.status_text()
        );
        let body = read_body(response).await?;
        let value = serde_json::from_str(&body).map_err(parse_error)?;
        Err(Error::from_rejection(value))
    }
}

async fn read_body<R: Envelope>(response: R) -> Result<String> {
    response.text().await.map_err(|err| {
        log::warn!("Unable to read response body: {err}");
        Error::Parse(err.to_string())
    })
}

fn parse_error(err: serde_json::Error) -> Error {
    log::warn!("Unable to decode response body: {err}");
    Error::Parse(err.to_string())
}

async fn send<F, T>(fetch: &F, request: ApiRequest) -> Result<T>
where
    F: Fetch,
    T: DeserializeOwned,
{
    log::debug!("{} {}", request.method, request.url);
    into_json(fetch.fetch(request).await).await
}

fn base_url(url: impl Into<String>) -> String {
    let url = url.into();
    url.trim_end_matches('/').to_owned()
}

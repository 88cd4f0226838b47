use oqm_boundary::{OfficerId, Ticket};

use crate::{base_url, send, ApiRequest, DefaultFetch, Fetch, Result};

/// Office queue API used by counter officers.
#[derive(Clone)]
pub struct OfficerApi<F = DefaultFetch> {
    url: String,
    fetch: F,
}

impl OfficerApi<DefaultFetch> {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_fetch(url, DefaultFetch::default())
    }
}

impl<F> OfficerApi<F>
where
    F: Fetch,
{
    pub fn with_fetch(url: impl Into<String>, fetch: F) -> Self {
        let url = base_url(url);
        Self { url, fetch }
    }

    /// Call the next customer to the counter of the officer.
    ///
    /// Returns the ticket that is now being served.
    pub async fn next_customer(&self, officer_id: OfficerId) -> Result<Ticket> {
        let url = format!("{}/tickets/next-customer/{officer_id}", self.url);
        send(&self.fetch, ApiRequest::patch(url)).await
    }
}

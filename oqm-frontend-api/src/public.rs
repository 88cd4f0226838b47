use oqm_boundary::{NewTicket, NotificationsResponse, Service, ServiceId, Ticket, TicketId};

use crate::{base_url, send, ApiRequest, DefaultFetch, Fetch, Result};

/// Public office queue API used by customers.
#[derive(Clone)]
pub struct PublicApi<F = DefaultFetch> {
    url: String,
    fetch: F,
}

impl PublicApi<DefaultFetch> {
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_fetch(url, DefaultFetch::default())
    }
}

impl<F> PublicApi<F>
where
    F: Fetch,
{
    pub fn with_fetch(url: impl Into<String>, fetch: F) -> Self {
        let url = base_url(url);
        Self { url, fetch }
    }

    /// Services a customer can request a ticket for.
    pub async fn services(&self) -> Result<Vec<Service>> {
        let url = format!("{}/services/", self.url);
        send(&self.fetch, ApiRequest::get(url)).await
    }

    /// Status and waiting queue of a ticket.
    pub async fn notifications(&self, ticket_id: TicketId) -> Result<NotificationsResponse> {
        let url = format!("{}/tickets/{ticket_id}/notifications/", self.url);
        send(&self.fetch, ApiRequest::get(url)).await
    }

    /// Request a new ticket for a service.
    ///
    /// Returns the ticket exactly as the server issued it.
    pub async fn create_ticket(&self, service_id: ServiceId) -> Result<Ticket> {
        let url = format!("{}/tickets/", self.url);
        let request = ApiRequest::post(url).json(&NewTicket { service_id })?;
        send(&self.fetch, request).await
    }
}

//! Party API Client
//!
//! Typed access to the remote events/rsvps/guests REST service.

mod error;
mod http;

pub use error::ApiError;
pub use http::HttpPartyApi;

use crate::models::{Guest, Party, PartyDraft, Rsvp};

/// One HTTP round trip per operation, no retries or timeouts.
#[allow(async_fn_in_trait)]
pub trait PartyApi {
    /// GET `/events`
    async fn list_parties(&self) -> Result<Vec<Party>, ApiError>;
    /// GET `/events/{id}`
    async fn get_party(&self, id: u32) -> Result<Party, ApiError>;
    /// GET `/rsvps`
    async fn list_rsvps(&self) -> Result<Vec<Rsvp>, ApiError>;
    /// GET `/guests`
    async fn list_guests(&self) -> Result<Vec<Guest>, ApiError>;
    /// POST `/events`; the response body is ignored, its HTTP status is returned
    async fn create_party(&self, draft: &PartyDraft) -> Result<u16, ApiError>;
    /// DELETE `/events/{id}`; the response body is ignored
    async fn delete_party(&self, id: u32) -> Result<(), ApiError>;
}

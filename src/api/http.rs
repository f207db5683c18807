//! HTTP Party API
//!
//! `PartyApi` over reqwest (browser `fetch` on wasm32).

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{ApiError, PartyApi};
use crate::config::ApiConfig;
use crate::models::{Envelope, Guest, Party, PartyDraft, Rsvp};

const JSON_UTF8: &str = "application/json; charset=UTF-8";

#[derive(Debug, Clone)]
pub struct HttpPartyApi {
    client: Client,
    config: ApiConfig,
}

impl HttpPartyApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// GET `url` and unwrap the `data` field of the response envelope
    async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let envelope: Envelope<T> = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(envelope.data)
    }
}

impl PartyApi for HttpPartyApi {
    async fn list_parties(&self) -> Result<Vec<Party>, ApiError> {
        self.get_data(&self.config.events_url()).await
    }

    async fn get_party(&self, id: u32) -> Result<Party, ApiError> {
        self.get_data(&self.config.event_url(id)).await
    }

    async fn list_rsvps(&self) -> Result<Vec<Rsvp>, ApiError> {
        self.get_data(&self.config.rsvps_url()).await
    }

    async fn list_guests(&self) -> Result<Vec<Guest>, ApiError> {
        self.get_data(&self.config.guests_url()).await
    }

    async fn create_party(&self, draft: &PartyDraft) -> Result<u16, ApiError> {
        let body = serde_json::to_string(draft).map_err(|e| ApiError::Encode(e.to_string()))?;
        let response = self
            .client
            .post(self.config.events_url())
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(response.status().as_u16())
    }

    async fn delete_party(&self, id: u32) -> Result<(), ApiError> {
        self.client
            .delete(self.config.event_url(id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(())
    }
}

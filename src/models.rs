//! Frontend Models
//!
//! Data structures matching the party API's JSON records.

use serde::{Deserialize, Deserializer, Serialize};

/// Read a missing or `null` field as the type's default.
/// One null in a shared backend record must not sink the whole list.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Event record (server-assigned id)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Party {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// ISO-8601 timestamp
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
}

/// Join record: a guest attending an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rsvp {
    pub id: u32,
    #[serde(rename = "guestId")]
    pub guest_id: u32,
    #[serde(rename = "eventId")]
    pub event_id: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guest {
    pub id: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Uncommitted new-party form input, sent as the POST body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyDraft {
    pub name: String,
    pub description: String,
    pub date: String,
    pub location: String,
}

/// `{ "data": ... }` wrapper around every response body
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

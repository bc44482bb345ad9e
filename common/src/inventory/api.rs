//! Capabilities the page controller depends on.
//!
//! The controller never talks to the network or the screen directly: it is
//! handed a `PlantApi` for the collection endpoint and a `Notifier` for
//! user-facing alerts and developer diagnostics. The frontend provides browser
//! implementations; tests provide scripted ones.

use thiserror::Error;

use crate::model::plant::{NewPlant, Plant};

/// Failure of a single request against the collection endpoint.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, ...).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    /// The response body was not the expected JSON.
    #[error("Invalid response body: {0}")]
    Decode(String),

    /// The candidate record could not be serialized.
    #[error("Invalid request body: {0}")]
    Encode(String),
}

/// Access to the plant collection endpoint.
///
/// Futures are not required to be `Send`: in the browser they run on the
/// single-threaded event loop.
#[allow(async_fn_in_trait)]
pub trait PlantApi {
    /// `GET` the whole collection. `Ok(None)` means the body was empty or `null`.
    async fn list(&self) -> Result<Option<Vec<Plant>>, ApiError>;

    /// `POST` a candidate and return the stored record with its assigned id.
    async fn create(&self, candidate: &NewPlant) -> Result<Plant, ApiError>;
}

/// Output channel for things the page wants a human to see.
pub trait Notifier {
    /// Blocking, interruptive notice for the user.
    fn alert(&self, message: &str);

    /// Diagnostic trace for developers; never shown in the page itself.
    fn trace_error(&self, context: &str, error: &ApiError);
}

/// Parses the body of a successful `GET` on the collection.
///
/// An empty or `null` body is not an error: it means there is nothing to list.
/// `null` entries inside the array are skipped.
pub fn decode_listing(body: &str) -> Result<Option<Vec<Plant>>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }
    let listing: Option<Vec<Option<Plant>>> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(listing.map(|plants| plants.into_iter().flatten().collect()))
}

/// Parses the body of a successful `POST` on the collection.
pub fn decode_created(body: &str) -> Result<Plant, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Serializes a candidate for a `POST` on the collection.
pub fn encode_candidate(candidate: &NewPlant) -> Result<String, ApiError> {
    serde_json::to_string(candidate).map_err(|e| ApiError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::plant::PlantId;

    #[test]
    fn empty_and_null_listings_are_none() {
        assert_eq!(decode_listing(""), Ok(None));
        assert_eq!(decode_listing("  \n"), Ok(None));
        assert_eq!(decode_listing("null"), Ok(None));
    }

    #[test]
    fn listing_keeps_server_order() {
        let plants = decode_listing(r#"[{"id":2,"name":"Cactus"},{"id":1,"name":"Fern"}]"#)
            .unwrap()
            .unwrap();
        let ids: Vec<_> = plants.iter().map(|p| p.id.clone().unwrap()).collect();
        assert_eq!(ids, vec![PlantId::from(2u64), PlantId::from(1u64)]);
    }

    #[test]
    fn null_entries_are_skipped() {
        let plants = decode_listing(r#"[null, {"id":1,"name":"Fern"}, null]"#)
            .unwrap()
            .unwrap();
        assert_eq!(plants, vec![Plant::new(1u64, "Fern")]);
    }

    #[test]
    fn malformed_listing_is_a_decode_error() {
        assert!(matches!(decode_listing(r#"{"id":1}"#), Err(ApiError::Decode(_))));
        assert!(matches!(decode_listing("<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn created_record_carries_server_id() {
        let plant = decode_created(r#"{"id":"x9","name":"Aloe","price":12}"#).unwrap();
        assert_eq!(plant.id, Some(PlantId::from("x9")));
        assert_eq!(plant.price(), Some(12.0));
    }

    #[test]
    fn status_error_message() {
        assert_eq!(ApiError::Status(500).to_string(), "HTTP error! Status: 500");
    }

    #[test]
    fn candidate_is_encoded_as_json_object() {
        let body = encode_candidate(&NewPlant::named("Fern")).unwrap();
        assert_eq!(body, r#"{"name":"Fern"}"#);
    }
}

//! gloo-net client for the plant collection endpoint.
//!
//! - `GET {url}`: the whole collection as a JSON array (an empty or `null`
//!   body counts as an empty collection).
//! - `POST {url}`: a candidate as JSON; the answer is the stored record with
//!   its server-assigned `id`.
//!
//! Any non-2xx status is reported as `ApiError::Status`, whatever the code.

use common::inventory::api::{decode_created, decode_listing, encode_candidate};
use common::inventory::{ApiError, PlantApi};
use common::model::plant::{NewPlant, Plant};
use gloo_net::http::{Request, Response};

/// Header and value sent with every `POST` body.
pub const CONTENT_TYPE_HEADER: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Clone, Debug, PartialEq)]
pub struct HttpPlantApi {
    url: String,
}

impl HttpPlantApi {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Only 2xx counts as success; every other code is the same failure.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ApiError::Status(status))
    }
}

/// Returns the body of a 2xx response, or the status as an error.
async fn success_body(response: Response) -> Result<String, ApiError> {
    check_status(response.status())?;
    response.text().await.map_err(transport)
}

impl PlantApi for HttpPlantApi {
    async fn list(&self) -> Result<Option<Vec<Plant>>, ApiError> {
        let response = Request::get(&self.url).send().await.map_err(transport)?;
        let body = success_body(response).await?;
        decode_listing(&body)
    }

    async fn create(&self, candidate: &NewPlant) -> Result<Plant, ApiError> {
        let payload = encode_candidate(candidate)?;
        let response = Request::post(&self.url)
            .header(CONTENT_TYPE_HEADER, JSON_CONTENT_TYPE)
            .body(payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let body = success_body(response).await?;
        decode_created(&body)
    }
}

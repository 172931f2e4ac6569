//! Request builder and response parser for the character API.
//!
//! # Design
//! `CharacterClient` holds only a base URL and the API key pair. Each
//! operation is split into a `build_*` method that produces an `HttpRequest`
//! and a `parse_*` method that consumes an `HttpResponse`, so the I/O boundary
//! stays explicit. `FetchClient` glues the two halves to a `Transport` for
//! hosts that just want a call-and-return API.

use tracing::{debug, warn};

use crate::auth::{AuthParams, Credentials};
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{Character, CharacterLookup, CharacterPage, Envelope};

/// Stateless client for the character API.
#[derive(Debug, Clone)]
pub struct CharacterClient {
    base_url: String,
    credentials: Credentials,
}

impl CharacterClient {
    pub fn new(base_url: &str, credentials: Credentials) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a signed `GET {base}/characters` request for one page.
    ///
    /// `name_prefix` is sent as `nameStartsWith` only when non-empty.
    pub fn build_list_characters(
        &self,
        offset: u32,
        limit: u32,
        name_prefix: Option<&str>,
    ) -> HttpRequest {
        self.build_list_characters_with(&self.credentials.sign_now(), offset, limit, name_prefix)
    }

    pub fn build_list_characters_with(
        &self,
        auth: &AuthParams,
        offset: u32,
        limit: u32,
        name_prefix: Option<&str>,
    ) -> HttpRequest {
        let mut query = auth.to_query();
        query.push(("offset".to_string(), offset.to_string()));
        query.push(("limit".to_string(), limit.to_string()));
        if let Some(prefix) = name_prefix.filter(|p| !p.is_empty()) {
            query.push(("nameStartsWith".to_string(), prefix.to_string()));
        }

        debug!(offset, limit, name_prefix, "building character list request");
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/characters", self.base_url),
            query,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Build a signed `GET {base}/characters/{id}` request.
    pub fn build_get_character(&self, id: u64) -> HttpRequest {
        self.build_get_character_with(&self.credentials.sign_now(), id)
    }

    pub fn build_get_character_with(&self, auth: &AuthParams, id: u64) -> HttpRequest {
        debug!(id, "building character lookup request");
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/characters/{id}", self.base_url),
            query: auth.to_query(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_characters(&self, response: HttpResponse) -> Result<CharacterPage, ApiError> {
        let envelope = parse_envelope(response)?;
        Ok(envelope.data.into())
    }

    /// An empty result set is `NotFound`, not an error.
    pub fn parse_get_character(&self, response: HttpResponse) -> Result<CharacterLookup, ApiError> {
        let envelope = parse_envelope(response)?;
        Ok(match envelope.data.results.into_iter().next() {
            Some(character) => CharacterLookup::Found(character),
            None => CharacterLookup::NotFound,
        })
    }
}

fn parse_envelope(response: HttpResponse) -> Result<Envelope<Character>, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Map any non-2xx status to `ApiError::Request`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    warn!(status = response.status, "character API returned an error status");
    Err(ApiError::Request {
        status: response.status,
        body: response.body.clone(),
    })
}

/// `CharacterClient` bound to a `Transport`.
///
/// Performs exactly one round-trip per call: no caching, no retry.
pub struct FetchClient<T> {
    client: CharacterClient,
    transport: T,
}

impl<T: Transport> FetchClient<T> {
    pub fn new(client: CharacterClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &CharacterClient {
        &self.client
    }

    pub fn list_characters(
        &self,
        offset: u32,
        limit: u32,
        name_prefix: Option<&str>,
    ) -> Result<CharacterPage, ApiError> {
        let request = self.client.build_list_characters(offset, limit, name_prefix);
        let response = self.transport.execute(request)?;
        self.client.parse_list_characters(response)
    }

    pub fn get_character_by_id(&self, id: u64) -> Result<CharacterLookup, ApiError> {
        let request = self.client.build_get_character(id);
        let response = self.transport.execute(request)?;
        self.client.parse_get_character(response)
    }
}

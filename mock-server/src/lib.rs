use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::net::TcpListener;

mod seed;

pub const PUBLIC_KEY: &str = "mock-public-key";
pub const PRIVATE_KEY: &str = "mock-private-key";
pub const MAX_LIMIT: u32 = 100;
const DEFAULT_LIMIT: u32 = 20;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub thumbnail: Thumbnail,
    pub comics: ResourceList,
    pub series: ResourceList,
    pub stories: ResourceList,
    pub events: ResourceList,
    pub urls: Vec<Link>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Thumbnail {
    pub path: String,
    pub extension: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct ResourceList {
    pub available: u32,
    pub items: Vec<Item>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none", default)]
    pub kind: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Link {
    #[serde(rename = "type")]
    pub kind: String,
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DataContainer {
    pub offset: u32,
    pub limit: u32,
    pub total: u32,
    pub count: u32,
    pub results: Vec<Character>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope {
    pub code: u16,
    pub status: String,
    pub data: DataContainer,
}

/// The character collection plus the one key pair it accepts.
#[derive(Debug, Clone)]
pub struct Directory {
    pub public_key: String,
    pub private_key: String,
    pub characters: Vec<Character>,
}

impl Directory {
    pub fn seeded() -> Self {
        Self {
            public_key: PUBLIC_KEY.to_string(),
            private_key: PRIVATE_KEY.to_string(),
            characters: seed::characters(),
        }
    }
}

pub type Db = Arc<Directory>;

pub fn app() -> Router {
    app_with(Directory::seeded())
}

pub fn app_with(directory: Directory) -> Router {
    Router::new()
        .route("/v1/public/characters", get(list_characters))
        .route("/v1/public/characters/{id}", get(get_character))
        .with_state(Arc::new(directory))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Startup line for the binary. Names the public key only.
pub fn banner(addr: &str) -> String {
    format!("listening on {addr}, api base http://{addr}/v1/public, public key {PUBLIC_KEY}")
}

#[derive(Debug, Deserialize)]
pub struct AuthQuery {
    pub ts: Option<String>,
    #[serde(rename = "apiKey")]
    pub api_key: Option<String>,
    pub hash: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
    #[serde(rename = "nameStartsWith")]
    pub name_starts_with: Option<String>,
}

type Failure = (StatusCode, Json<Value>);

fn failure(status: StatusCode, code: &str, message: &str) -> Failure {
    (status, Json(json!({ "code": code, "message": message })))
}

/// Check `ts`/`apiKey`/`hash` the way the real gateway does.
fn authorize(db: &Directory, auth: &AuthQuery) -> Result<(), Failure> {
    let Some(api_key) = auth.api_key.as_deref() else {
        return Err(failure(StatusCode::CONFLICT, "MissingParameter", "You must provide a user key."));
    };
    let Some(ts) = auth.ts.as_deref() else {
        return Err(failure(StatusCode::CONFLICT, "MissingParameter", "You must provide a timestamp."));
    };
    let Some(hash) = auth.hash.as_deref() else {
        return Err(failure(StatusCode::CONFLICT, "MissingParameter", "You must provide a hash."));
    };
    if api_key != db.public_key {
        return Err(failure(StatusCode::UNAUTHORIZED, "InvalidCredentials", "The passed API key is invalid."));
    }
    if hash != signature(ts, &db.private_key, &db.public_key) {
        return Err(failure(
            StatusCode::UNAUTHORIZED,
            "InvalidCredentials",
            "That hash, timestamp and key combination is invalid.",
        ));
    }
    Ok(())
}

pub fn signature(ts: &str, private_key: &str, public_key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(format!("{ts}{private_key}{public_key}"));
    hex::encode(hasher.finalize())
}

fn ok(offset: u32, limit: u32, total: u32, results: Vec<Character>) -> Json<Envelope> {
    Json(Envelope {
        code: 200,
        status: "Ok".to_string(),
        data: DataContainer {
            offset,
            limit,
            total,
            count: results.len() as u32,
            results,
        },
    })
}

async fn list_characters(
    State(db): State<Db>,
    Query(auth): Query<AuthQuery>,
    Query(page): Query<ListQuery>,
) -> Result<Json<Envelope>, Failure> {
    authorize(&db, &auth)?;

    let limit = page.limit.unwrap_or(DEFAULT_LIMIT);
    if limit == 0 {
        return Err(failure(StatusCode::CONFLICT, "409", "You must pass an integer limit greater than 0."));
    }
    if limit > MAX_LIMIT {
        return Err(failure(StatusCode::CONFLICT, "409", "You may not request more than 100 items."));
    }
    let offset = page.offset.unwrap_or(0);

    let prefix = page
        .name_starts_with
        .filter(|p| !p.is_empty())
        .map(|p| p.to_lowercase());
    let matching: Vec<&Character> = db
        .characters
        .iter()
        .filter(|c| match &prefix {
            Some(p) => c.name.to_lowercase().starts_with(p.as_str()),
            None => true,
        })
        .collect();

    let total = matching.len() as u32;
    let results = matching
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .cloned()
        .collect();
    tracing::debug!(offset, limit, total, "listed characters");
    Ok(ok(offset, limit, total, results))
}

/// Unknown ids answer 200 with an empty result set.
async fn get_character(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Query(auth): Query<AuthQuery>,
) -> Result<Json<Envelope>, Failure> {
    authorize(&db, &auth)?;
    let results: Vec<Character> = db.characters.iter().filter(|c| c.id == id).cloned().collect();
    let total = results.len() as u32;
    Ok(ok(0, DEFAULT_LIMIT, total, results))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth(ts: &str, hash: &str) -> AuthQuery {
        AuthQuery {
            ts: Some(ts.to_string()),
            api_key: Some(PUBLIC_KEY.to_string()),
            hash: Some(hash.to_string()),
        }
    }

    #[test]
    fn banner_names_public_key_only() {
        let line = banner("127.0.0.1:3000");
        assert!(line.contains(PUBLIC_KEY));
        assert!(!line.contains(PRIVATE_KEY));
    }

    #[test]
    fn signature_is_hex_md5_of_concatenation() {
        assert_eq!(signature("1", "abcd", "1234"), "ffd275c5130566a2916217b101f26150");
    }

    #[test]
    fn authorize_accepts_valid_signature() {
        let db = Directory::seeded();
        let hash = signature("42", PRIVATE_KEY, PUBLIC_KEY);
        assert!(authorize(&db, &auth("42", &hash)).is_ok());
    }

    #[test]
    fn authorize_rejects_wrong_hash() {
        let db = Directory::seeded();
        let (status, body) = authorize(&db, &auth("42", "deadbeef")).unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.0["code"], "InvalidCredentials");
    }

    #[test]
    fn authorize_requires_hash() {
        let db = Directory::seeded();
        let query = AuthQuery {
            ts: Some("1".to_string()),
            api_key: Some(PUBLIC_KEY.to_string()),
            hash: None,
        };
        let (status, body) = authorize(&db, &query).unwrap_err();
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.0["message"], "You must provide a hash.");
    }

    #[test]
    fn seed_has_enough_characters_for_two_pages() {
        let characters = seed::characters();
        assert!(characters.len() >= 40);
        let mut ids: Vec<u64> = characters.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), characters.len(), "seed ids must be unique");
    }

    #[test]
    fn character_serializes_with_api_field_names() {
        let character = seed::characters().remove(0);
        let json = serde_json::to_value(&character).unwrap();
        assert!(json["thumbnail"]["path"].is_string());
        assert!(json["stories"]["items"][0]["type"].is_string());
        assert!(json["comics"]["items"][0].get("type").is_none());
        assert!(json["urls"][0]["type"].is_string());
    }
}

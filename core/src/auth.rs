//! Request signing for the character API.
//!
//! Every request carries `ts`, `apiKey` and `hash`, where `hash` is the
//! lowercase hex MD5 of `ts ++ private_key ++ public_key`. The digest gives no
//! confidentiality: whoever holds the private key can sign, so a client that
//! ships the key ships the ability to sign. Hosts that need the key kept
//! secret must run this module server-side.

use std::time::{SystemTime, UNIX_EPOCH};

use md5::{Digest, Md5};
use secrecy::{ExposeSecret, SecretString};

/// Key pair issued by the character API.
#[derive(Debug, Clone)]
pub struct Credentials {
    public_key: String,
    private_key: SecretString,
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, private_key: SecretString) -> Self {
        Self {
            public_key: public_key.into(),
            private_key,
        }
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Sign for an explicit timestamp (epoch milliseconds).
    pub fn sign(&self, ts: u64) -> AuthParams {
        let ts = ts.to_string();
        let hash = digest(&ts, self.private_key.expose_secret(), &self.public_key);
        AuthParams {
            ts,
            api_key: self.public_key.clone(),
            hash,
        }
    }

    /// Sign for the current wall-clock time.
    pub fn sign_now(&self) -> AuthParams {
        self.sign(now_millis())
    }
}

/// The per-request `ts`/`apiKey`/`hash` triple. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthParams {
    pub ts: String,
    pub api_key: String,
    pub hash: String,
}

impl AuthParams {
    /// Query pairs in wire order.
    pub fn to_query(&self) -> Vec<(String, String)> {
        vec![
            ("ts".to_string(), self.ts.clone()),
            ("apiKey".to_string(), self.api_key.clone()),
            ("hash".to_string(), self.hash.clone()),
        ]
    }
}

/// Hex MD5 of the three parts concatenated in order.
pub fn digest(ts: &str, private_key: &str, public_key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(ts.as_bytes());
    hasher.update(private_key.as_bytes());
    hasher.update(public_key.as_bytes());
    hex::encode(hasher.finalize())
}

pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

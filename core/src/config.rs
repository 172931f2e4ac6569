//! Layered configuration for hosts of the core.
//!
//! # Design
//! Values come from `configuration/base.yaml`, then an optional
//! `configuration/local.yaml`, then `CATALOG__`-prefixed environment
//! variables, later sources winning. The private key is held as a
//! `SecretString` from the moment it is read.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use secrecy::SecretString;
use serde::Deserialize;

use crate::auth::Credentials;
use crate::browse::DEFAULT_PAGE_SIZE;
use crate::client::CharacterClient;

#[derive(Deserialize, Debug)]
pub struct Config {
    pub api: Api,
    #[serde(default)]
    pub storage: Persistence,
}

#[derive(Deserialize, Debug)]
pub struct Api {
    pub base_url: String,
    pub public_key: String,
    pub private_key: SecretString,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Persistence {
    pub path: PathBuf,
}

impl Default for Persistence {
    fn default() -> Self {
        Self {
            path: PathBuf::from("catalog-state.json"),
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Api {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.public_key.clone(), self.private_key.clone())
    }

    pub fn client(&self) -> CharacterClient {
        CharacterClient::new(&self.base_url, self.credentials())
    }
}

impl Config {
    /// Read `./configuration/`.
    pub fn read() -> Result<Self, figment::Error> {
        let base_path = std::env::current_dir()
            .map_err(|e| figment::Error::from(format!("cannot determine current directory: {e}")))?;
        Self::from_dir(&base_path.join("configuration"))
    }

    /// `base.yaml`, then `local.yaml` if present, then `CATALOG__*` env vars
    /// (`CATALOG__API__PRIVATE_KEY` sets `api.private_key`).
    pub fn from_dir(config_directory: &Path) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Yaml::file(config_directory.join("base.yaml")))
            .merge(Yaml::file(config_directory.join("local.yaml")))
            .merge(Env::prefixed("CATALOG__").split("__"))
            .extract()
    }
}

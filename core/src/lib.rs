//! Client core for the comic character directory.
//!
//! # Overview
//! Two independent pieces:
//! - `CharacterClient` builds signed `HttpRequest` values and parses
//!   `HttpResponse` values without touching the network (host-does-IO).
//!   `FetchClient` pairs it with a `Transport` for call-and-return use.
//! - `FavoritesStore` keeps the persisted set of favorited character ids on
//!   top of an injected `Storage`.
//!
//! # Design
//! - The client is stateless: base URL plus key pair, signing every request
//!   afresh.
//! - An unknown character id is `CharacterLookup::NotFound`, never an error.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod auth;
pub mod browse;
pub mod client;
pub mod config;
pub mod error;
pub mod favorites;
pub mod http;
pub mod sequence;
pub mod storage;
pub mod types;

pub use auth::{AuthParams, Credentials};
pub use browse::{BrowseState, PageWindow, DEFAULT_PAGE_SIZE};
pub use client::{CharacterClient, FetchClient};
pub use config::Config;
pub use error::{ApiError, StorageError};
pub use favorites::{FavoritesStore, FAVORITES_KEY};
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use sequence::{RequestSequencer, Ticket};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use types::{
    Character, CharacterLookup, CharacterPage, CharacterUrl, ResourceList, StorySummary, Summary,
    Thumbnail,
};

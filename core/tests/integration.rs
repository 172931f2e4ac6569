//! End-to-end checks against the live mock server.
//!
//! # Design
//! Each test starts the mock server on a random port in a background tokio
//! runtime, then drives the core over real HTTP through `UreqTransport`. This
//! validates signing, query encoding and envelope parsing against an
//! independent implementation of the API.

use std::net::SocketAddr;

use catalog_core::{
    ApiError, CharacterClient, CharacterLookup, Credentials, FavoritesStore, FetchClient,
    FileStorage, UreqTransport,
};
use secrecy::SecretString;

fn spawn_mock_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn fetch_client(addr: SocketAddr, private_key: &str) -> FetchClient<UreqTransport> {
    let credentials = Credentials::new(
        mock_server::PUBLIC_KEY,
        SecretString::from(private_key.to_string()),
    );
    let client = CharacterClient::new(&format!("http://{addr}/v1/public"), credentials);
    FetchClient::new(client, UreqTransport::new())
}

#[test]
fn consecutive_pages_are_disjoint_with_stable_total() {
    let fetch = fetch_client(spawn_mock_server(), mock_server::PRIVATE_KEY);

    let first = fetch.list_characters(0, 20, Some("")).unwrap();
    let second = fetch.list_characters(20, 20, Some("")).unwrap();

    assert!(first.total >= 40);
    assert_eq!(first.total, second.total);
    assert_eq!(first.results.len(), 20);
    assert_eq!(second.results.len(), 20);
    for character in &second.results {
        assert!(
            first.results.iter().all(|c| c.id != character.id),
            "{} appears on both pages",
            character.name
        );
    }
}

#[test]
fn name_prefix_filters_and_total_counts_all_matches() {
    let fetch = fetch_client(spawn_mock_server(), mock_server::PRIVATE_KEY);

    let page = fetch.list_characters(0, 2, Some("Iron")).unwrap();
    assert_eq!(page.total, 4);
    assert_eq!(page.results.len(), 2);
    assert!(page
        .results
        .iter()
        .all(|c| c.name.to_lowercase().starts_with("iron")));

    // spaces must survive query encoding
    let exact = fetch.list_characters(0, 20, Some("iron man")).unwrap();
    assert_eq!(exact.total, 1);
    assert_eq!(exact.results[0].id, 1009368);
}

#[test]
fn lookup_distinguishes_found_not_found_and_failure() {
    let addr = spawn_mock_server();
    let fetch = fetch_client(addr, mock_server::PRIVATE_KEY);

    match fetch.get_character_by_id(1009351).unwrap() {
        CharacterLookup::Found(hulk) => {
            assert_eq!(hulk.name, "Hulk");
            assert!(hulk.comics.is_truncated());
            assert!(hulk.thumbnail.image_url().unwrap().ends_with(".jpg"));
        }
        CharacterLookup::NotFound => panic!("expected Hulk"),
    }

    assert_eq!(fetch.get_character_by_id(1).unwrap(), CharacterLookup::NotFound);

    let bad_key = fetch_client(addr, "not-the-private-key");
    let err = bad_key.get_character_by_id(1009351).unwrap_err();
    match err {
        ApiError::Request { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("InvalidCredentials"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn placeholder_thumbnail_has_no_image_url() {
    let fetch = fetch_client(spawn_mock_server(), mock_server::PRIVATE_KEY);
    let iron_lad = fetch
        .get_character_by_id(1011120)
        .unwrap()
        .into_option()
        .unwrap();
    assert_eq!(iron_lad.thumbnail.image_url(), None);
    assert!(iron_lad.description.is_empty());
}

#[test]
fn oversized_limit_surfaces_api_error() {
    let fetch = fetch_client(spawn_mock_server(), mock_server::PRIVATE_KEY);
    let err = fetch.list_characters(0, 101, None).unwrap_err();
    assert_eq!(err.status(), Some(409));
}

#[test]
fn unreachable_server_is_a_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let fetch = fetch_client(addr, mock_server::PRIVATE_KEY);
    let err = fetch.list_characters(0, 20, None).unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err}");
}

#[test]
fn favorites_select_from_a_fetched_page() {
    let fetch = fetch_client(spawn_mock_server(), mock_server::PRIVATE_KEY);
    let page = fetch.list_characters(0, 20, None).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let store = FavoritesStore::new(FileStorage::new(dir.path().join("state.json")));
    let picked: Vec<u64> = page.results.iter().step_by(7).map(|c| c.id).collect();
    for id in &picked {
        assert!(store.toggle_favorite(*id).unwrap());
    }

    let reopened = FavoritesStore::new(FileStorage::new(dir.path().join("state.json")));
    let favorites = reopened.get_favorite_characters(&page.results).unwrap();
    let ids: Vec<u64> = favorites.iter().map(|c| c.id).collect();
    assert_eq!(ids, picked);
}

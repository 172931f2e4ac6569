//! Terminal host for the catalog core: wires configuration, logging, the
//! ureq transport and file-backed favorites together.

mod command;

use anyhow::Context;
use catalog_core::{
    BrowseState, Character, CharacterLookup, Config, FavoritesStore, FetchClient, FileStorage,
    PageWindow, UreqTransport,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use command::{Command, USAGE};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog=info,catalog_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let command = match Command::parse(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let config = Config::read().context("failed to read configuration")?;
    let fetch = FetchClient::new(config.api.client(), UreqTransport::new());
    let favorites = FavoritesStore::new(FileStorage::new(&config.storage.path));
    tracing::debug!(base_url = fetch.client().base_url(), storage = %config.storage.path.display(), "configured");

    match command {
        Command::List { page, query } => {
            let state = BrowseState::default().with_search(&query).with_page(page);
            let per_page = config.api.page_size;
            let result = fetch
                .list_characters(state.offset(per_page), per_page, state.name_prefix())
                .context("failed to load characters")?;

            if result.results.is_empty() {
                println!("No characters found.");
            }
            for character in &result.results {
                let star = if favorites.is_favorite(character.id)? { "*" } else { " " };
                println!("{star} {:>8}  {}", character.id, character.name);
            }
            if let Some(window) = PageWindow::new(result.total, per_page, state.page) {
                println!(
                    "\npage {} of {} ({} characters)  ?{}",
                    window.current,
                    window.total_pages,
                    result.total,
                    state.to_query_string()
                );
            }
        }
        Command::Show { id } => match fetch.get_character_by_id(id)? {
            CharacterLookup::Found(character) => {
                print_details(&character, favorites.is_favorite(id)?)
            }
            CharacterLookup::NotFound => println!("No character with id {id}."),
        },
        Command::Favorites => {
            let ids = favorites.get_favorites()?;
            if ids.is_empty() {
                println!("No favorites yet.");
            }
            for id in ids {
                match fetch.get_character_by_id(id)? {
                    CharacterLookup::Found(character) => println!("{id:>8}  {}", character.name),
                    CharacterLookup::NotFound => println!("{id:>8}  (no longer available)"),
                }
            }
        }
        Command::Add { id } => {
            favorites.add_favorite(id)?;
            println!("{id} added to favorites.");
        }
        Command::Remove { id } => {
            favorites.remove_favorite(id)?;
            println!("{id} removed from favorites.");
        }
        Command::Toggle { id } => {
            if favorites.toggle_favorite(id)? {
                println!("{id} added to favorites.");
            } else {
                println!("{id} removed from favorites.");
            }
        }
    }

    Ok(())
}

fn print_details(character: &Character, favorite: bool) {
    println!("{}{}", character.name, if favorite { "  *" } else { "" });
    if !character.description.is_empty() {
        println!("\n{}", character.description);
    }
    match character.thumbnail.image_url() {
        Some(url) => println!("\nimage: {url}"),
        None => println!("\nimage: not available"),
    }
    println!(
        "\ncomics {}  series {}  stories {}  events {}",
        character.comics.available,
        character.series.available,
        character.stories.available,
        character.events.available
    );
    for (label, list) in [("comics", &character.comics), ("series", &character.series), ("events", &character.events)] {
        for item in &list.items {
            println!("  {label}: {}", item.name);
        }
        if list.is_truncated() {
            println!("  {label}: ... and {} more", list.available as usize - list.items.len());
        }
    }
    for link in &character.urls {
        println!("{}: {}", link.label(), link.url);
    }
}

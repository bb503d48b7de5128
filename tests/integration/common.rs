//! Shared fixtures for integration tests.

use movie_console::config::DatabaseConfig;
use movie_console::console::Console;
use movie_console::db::{AddMovieOutcome, MovieStore, NewMovie, SqliteStore};
use tempfile::TempDir;

/// Opens an empty store in a fresh temporary directory.
pub async fn create_test_store() -> (SqliteStore, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(&DatabaseConfig::at(dir.path().join("movies.db")))
        .await
        .unwrap();
    (store, dir)
}

/// Adds a movie by names; director and cast must already exist.
pub async fn add_movie(
    store: &SqliteStore,
    title: &str,
    length: i64,
    director: &str,
    release_year: i32,
    cast: &[&str],
) -> AddMovieOutcome {
    let director = store.find_person(director).await.unwrap().unwrap();
    let mut actors = Vec::new();
    for name in cast {
        actors.push(store.find_person(name).await.unwrap().unwrap());
    }

    store
        .add_movie(&NewMovie {
            title: title.to_string(),
            length,
            director,
            release_year,
            cast: actors,
        })
        .await
        .unwrap()
}

/// Opens a store seeded with a handful of people and movies.
///
/// Titles ascending: Alien, Batman Begins, Following, Memento,
/// The Dark Knight, The Matrix. "Following" and "The Matrix" share a
/// length of 136 minutes.
pub async fn create_seeded_store() -> (SqliteStore, TempDir) {
    let (store, dir) = create_test_store().await;

    for (name, born) in [
        ("Lana Wachowski", 1965),
        ("Keanu Reeves", 1964),
        ("Carrie-Anne Moss", 1967),
        ("Christopher Nolan", 1970),
        ("Christian Bale", 1974),
        ("Ridley Scott", 1937),
        ("Sigourney Weaver", 1949),
    ] {
        store.add_person(name, born).await.unwrap();
    }

    add_movie(
        &store,
        "The Matrix",
        136,
        "Lana Wachowski",
        1999,
        &["Keanu Reeves", "Carrie-Anne Moss"],
    )
    .await;
    add_movie(
        &store,
        "The Dark Knight",
        152,
        "Christopher Nolan",
        2008,
        &["Christian Bale"],
    )
    .await;
    add_movie(&store, "Alien", 117, "Ridley Scott", 1979, &["Sigourney Weaver"]).await;
    add_movie(&store, "Memento", 113, "Christopher Nolan", 2000, &[]).await;
    add_movie(
        &store,
        "Batman Begins",
        140,
        "Christopher Nolan",
        2005,
        &["Christian Bale"],
    )
    .await;
    add_movie(&store, "Following", 136, "Christopher Nolan", 1998, &[]).await;

    (store, dir)
}

/// Runs a console script against the store and returns everything printed.
pub async fn run_script(store: &SqliteStore, script: &str) -> String {
    let mut console = Console::new(store, script.as_bytes(), Vec::new());
    console.run().await.unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

/// Counts rows in a table.
pub async fn count_rows(store: &SqliteStore, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(store.pool())
        .await
        .unwrap()
}

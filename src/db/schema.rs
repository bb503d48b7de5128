//! Table bootstrap for the movie database.
//!
//! Creates the people, movies and movie_actors tables when they are
//! missing. Existing tables are left as they are.

use crate::error::{ConsoleError, Result};
use sqlx::sqlite::SqlitePool;
use tracing::debug;

const STATEMENTS: &[(&str, &str)] = &[
    (
        "people",
        r#"
        CREATE TABLE IF NOT EXISTS people (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            birth_year INTEGER NOT NULL
        )
        "#,
    ),
    (
        "movies",
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            length INTEGER NOT NULL CHECK (length >= 0),
            director_id INTEGER NOT NULL,
            release_year INTEGER NOT NULL,
            FOREIGN KEY (director_id) REFERENCES people(id)
        )
        "#,
    ),
    (
        "movie_actors",
        r#"
        CREATE TABLE IF NOT EXISTS movie_actors (
            movie_id INTEGER NOT NULL,
            actor_id INTEGER NOT NULL,
            PRIMARY KEY (movie_id, actor_id),
            FOREIGN KEY (movie_id) REFERENCES movies(id),
            FOREIGN KEY (actor_id) REFERENCES people(id)
        )
        "#,
    ),
    (
        "idx_movies_director",
        "CREATE INDEX IF NOT EXISTS idx_movies_director ON movies(director_id)",
    ),
    (
        "idx_movie_actors_actor",
        "CREATE INDEX IF NOT EXISTS idx_movie_actors_actor ON movie_actors(actor_id)",
    ),
];

/// Creates any missing tables and indexes.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<()> {
    for (name, sql) in STATEMENTS {
        sqlx::query(sql)
            .execute(pool)
            .await
            .map_err(|e| ConsoleError::query(format!("Failed to create {name}: {e}")))?;
        debug!("Ensured {}", name);
    }
    Ok(())
}

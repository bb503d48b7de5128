//! SQLite movie store.
//!
//! Provides the `SqliteStore` struct that implements the `MovieStore` trait
//! using sqlx. `REGEXP` is backed by the `regex` crate through sqlx's
//! `regexp` feature, so list filters run in SQL.

use super::schema::ensure_schema;
use super::types::{AddMovieOutcome, CastMember, DeletePersonOutcome, MovieRow, NewMovie, Person};
use super::MovieStore;
use crate::commands::ListQuery;
use crate::config::DatabaseConfig;
use crate::error::{ConsoleError, Result};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Time to wait for a pooled connection.
const ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// Movie store backed by a SQLite file.
#[derive(Debug)]
pub struct SqliteStore {
    pool: SqlitePool,
    path: PathBuf,
}

impl SqliteStore {
    /// Opens (creating if needed) the database file and bootstraps the tables.
    pub async fn open(config: &DatabaseConfig) -> Result<Self> {
        let path = config.resolved_path()?;
        ensure_parent_dirs(&path)?;

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(config.busy_timeout_secs))
            .with_regexp();

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections.max(1))
            .acquire_timeout(Duration::from_secs(ACQUIRE_TIMEOUT_SECS))
            .connect_with(options)
            .await
            .map_err(|e| {
                ConsoleError::connection(format!(
                    "Failed to open database {}: {e}",
                    path.display()
                ))
            })?;

        ensure_schema(&pool).await?;
        info!("Movie database opened at {}", path.display());

        Ok(Self { pool, path })
    }

    /// Returns the path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Ensures parent directories exist for the database path.
fn ensure_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConsoleError::config(format!(
                "Failed to create database directory {}: {e}",
                parent.display()
            ))
        })?;
    }
    Ok(())
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db| db.is_unique_violation())
}

#[async_trait]
impl MovieStore for SqliteStore {
    async fn list_movies(&self, query: &ListQuery) -> Result<Vec<MovieRow>> {
        let stmt = query.to_sql();
        debug!(sql = %stmt.sql, params = ?stmt.params, "Listing movies");

        let mut q = sqlx::query_as::<_, MovieRow>(&stmt.sql);
        for param in &stmt.params {
            q = q.bind(param.as_str());
        }

        q.fetch_all(&self.pool)
            .await
            .map_err(|e| ConsoleError::query(format!("Failed to list movies: {e}")))
    }

    async fn cast_of(&self, movie_id: i64) -> Result<Vec<CastMember>> {
        sqlx::query_as::<_, CastMember>(
            r#"
            SELECT p.name, p.birth_year, m.release_year
            FROM movie_actors ma
            JOIN people p ON p.id = ma.actor_id
            JOIN movies m ON m.id = ma.movie_id
            WHERE ma.movie_id = ?
            ORDER BY p.name
            "#,
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| ConsoleError::query(format!("Failed to fetch cast: {e}")))
    }

    async fn find_person(&self, name: &str) -> Result<Option<Person>> {
        sqlx::query_as::<_, Person>("SELECT id, name, birth_year FROM people WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| ConsoleError::query(format!("Failed to look up person: {e}")))
    }

    async fn add_person(&self, name: &str, birth_year: i32) -> Result<i64> {
        let result = sqlx::query("INSERT INTO people (name, birth_year) VALUES (?, ?)")
            .bind(name)
            .bind(birth_year)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    ConsoleError::query(format!("Person '{name}' already exists"))
                } else {
                    ConsoleError::query(format!("Failed to add person: {e}"))
                }
            })?;

        let id = result.last_insert_rowid();
        debug!("Added person {} with id {}", name, id);
        Ok(id)
    }

    async fn add_movie(&self, movie: &NewMovie) -> Result<AddMovieOutcome> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ConsoleError::query(format!("Failed to start transaction: {e}")))?;

        let existing: Option<(i64,)> =
            sqlx::query_as("SELECT id FROM movies WHERE title = ? AND director_id = ?")
                .bind(&movie.title)
                .bind(movie.director.id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| {
                    ConsoleError::query(format!("Failed to check for existing movie: {e}"))
                })?;

        if existing.is_some() {
            debug!(
                "Movie '{}' by {} already exists",
                movie.title, movie.director.name
            );
            return Ok(AddMovieOutcome::Duplicate);
        }

        let result = sqlx::query(
            r#"
            INSERT INTO movies (title, length, director_id, release_year)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&movie.title)
        .bind(movie.length)
        .bind(movie.director.id)
        .bind(movie.release_year)
        .execute(&mut *tx)
        .await
        .map_err(|e| ConsoleError::query(format!("Failed to add movie: {e}")))?;

        let movie_id = result.last_insert_rowid();

        for actor in &movie.cast {
            sqlx::query("INSERT INTO movie_actors (movie_id, actor_id) VALUES (?, ?)")
                .bind(movie_id)
                .bind(actor.id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    ConsoleError::query(format!(
                        "Failed to add {} to the cast: {e}",
                        actor.name
                    ))
                })?;
        }

        tx.commit()
            .await
            .map_err(|e| ConsoleError::query(format!("Failed to commit movie: {e}")))?;

        debug!(
            "Added movie {} with {} cast members",
            movie_id,
            movie.cast.len()
        );
        Ok(AddMovieOutcome::Added(movie_id))
    }

    async fn delete_person(&self, name: &str) -> Result<DeletePersonOutcome> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| ConsoleError::query(format!("Failed to start transaction: {e}")))?;

        let person: Option<(i64,)> = sqlx::query_as("SELECT id FROM people WHERE name = ?")
            .bind(name)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| ConsoleError::query(format!("Failed to look up person: {e}")))?;

        let Some((id,)) = person else {
            return Ok(DeletePersonOutcome::NotFound);
        };

        let directed: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies WHERE director_id = ?")
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                ConsoleError::query(format!("Failed to check if person is a director: {e}"))
            })?;

        if directed > 0 {
            return Ok(DeletePersonOutcome::DirectsMovies(directed));
        }

        sqlx::query("DELETE FROM movie_actors WHERE actor_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| ConsoleError::query(format!("Failed to remove cast links: {e}")))?;

        sqlx::query("DELETE FROM people WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| ConsoleError::query(format!("Failed to delete person: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| ConsoleError::query(format!("Failed to commit deletion: {e}")))?;

        debug!("Deleted person {} ({})", name, id);
        Ok(DeletePersonOutcome::Deleted)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

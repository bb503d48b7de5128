//! Data access layer for the movie console.
//!
//! Provides a trait-based interface over the movie store so the console
//! works against any backend that can run these operations.

mod schema;
mod sqlite;
mod types;

pub use schema::ensure_schema;
pub use sqlite::SqliteStore;
pub use types::{
    format_length, AddMovieOutcome, CastMember, DeletePersonOutcome, MovieRow, NewMovie, Person,
};

use crate::commands::ListQuery;
use crate::config::DatabaseConfig;
use crate::error::Result;
use async_trait::async_trait;

/// Opens the movie store described by the configuration.
pub async fn connect(config: &DatabaseConfig) -> Result<Box<dyn MovieStore>> {
    let store = SqliteStore::open(config).await?;
    Ok(Box::new(store))
}

/// Operations the console performs against the movie database.
#[async_trait]
pub trait MovieStore: Send + Sync {
    /// Returns the movies matching a list query, in its sort order.
    async fn list_movies(&self, query: &ListQuery) -> Result<Vec<MovieRow>>;

    /// Returns the cast of a movie.
    async fn cast_of(&self, movie_id: i64) -> Result<Vec<CastMember>>;

    /// Looks up a person by exact name.
    async fn find_person(&self, name: &str) -> Result<Option<Person>>;

    /// Inserts a person and returns their id.
    async fn add_person(&self, name: &str, birth_year: i32) -> Result<i64>;

    /// Inserts a movie and its cast unless (title, director) already exists.
    async fn add_movie(&self, movie: &NewMovie) -> Result<AddMovieOutcome>;

    /// Deletes a person and their cast links unless they direct a movie.
    async fn delete_person(&self, name: &str) -> Result<DeletePersonOutcome>;

    /// Closes the underlying connections.
    async fn close(&self);
}

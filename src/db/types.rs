//! Row and outcome types for the movie store.

use sqlx::FromRow;
use std::fmt;

/// A person who can direct or act in movies.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub birth_year: i32,
}

/// One row of a movie listing.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MovieRow {
    pub id: i64,
    pub title: String,
    /// Director's name.
    pub director: String,
    pub release_year: i32,
    /// Length in minutes.
    pub length: i64,
}

impl MovieRow {
    /// Returns the length formatted as `HH:MM`.
    pub fn formatted_length(&self) -> String {
        format_length(self.length)
    }
}

impl fmt::Display for MovieRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} by {} in {}, {}",
            self.title,
            self.director,
            self.release_year,
            self.formatted_length()
        )
    }
}

/// An actor in a movie's cast, with the movie's release year for age math.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CastMember {
    pub name: String,
    pub birth_year: i32,
    pub release_year: i32,
}

impl CastMember {
    /// Age of the actor in the movie's release year.
    ///
    /// Computed in `i64` so any pair of stored years fits.
    pub fn age_at_release(&self) -> i64 {
        i64::from(self.release_year) - i64::from(self.birth_year)
    }
}

/// A movie ready to be inserted, with resolved director and cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    /// Length in minutes.
    pub length: i64,
    pub director: Person,
    pub release_year: i32,
    pub cast: Vec<Person>,
}

/// Result of adding a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddMovieOutcome {
    /// Inserted with the given id.
    Added(i64),
    /// A movie with the same title and director already exists.
    Duplicate,
}

/// Result of deleting a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePersonOutcome {
    /// Person and their cast links were removed.
    Deleted,
    /// No person with that name.
    NotFound,
    /// Person directs this many movies and was kept.
    DirectsMovies(i64),
}

/// Formats a length in minutes as zero-padded `HH:MM`; hours are unbounded.
pub fn format_length(minutes: i64) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

//! List-query construction.
//!
//! Turns scanned flags into a validated [`ListQuery`] and renders it as a
//! single parameterized SQL statement over the movie tables.

use super::scanner::{scan_flags, Flag};
use regex::Regex;
use thiserror::Error;

/// Sort order for listed movies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Title ascending.
    #[default]
    Title,
    /// Length ascending, then title ascending.
    LengthAsc,
    /// Length descending, then title ascending.
    LengthDesc,
}

impl SortOrder {
    /// Returns the ORDER BY clause for this sort.
    pub fn order_by(&self) -> &'static str {
        match self {
            Self::Title => "ORDER BY m.title ASC",
            Self::LengthAsc => "ORDER BY m.length ASC, m.title ASC",
            Self::LengthDesc => "ORDER BY m.length DESC, m.title ASC",
        }
    }
}

/// Validated filter and sort options for the list command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Also print the cast with ages at release.
    pub verbose: bool,
    /// Regex the title must match.
    pub title: Option<String>,
    /// Regex the director's name must match.
    pub director: Option<String>,
    /// Regex at least one cast member's name must match.
    pub actor: Option<String>,
    /// Result ordering.
    pub order: SortOrder,
}

/// Reasons the list command is rejected before any query runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListArgsError {
    #[error("No regex provided for -{0} switch")]
    MissingPattern(String),

    #[error("Invalid regex for -{flag} switch: {message}")]
    InvalidPattern { flag: String, message: String },

    #[error("Cannot use both -la and -ld switches")]
    ConflictingSort,

    #[error("Unknown switch: -{0}")]
    UnknownSwitch(String),
}

/// A SQL statement with its positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlStatement {
    pub sql: String,
    pub params: Vec<String>,
}

const BASE_SELECT: &str = "SELECT m.id, m.title, p.name AS director, m.release_year, m.length \
     FROM movies m JOIN people p ON m.director_id = p.id";

const ACTOR_FILTER: &str = "m.id IN (SELECT ma.movie_id FROM movie_actors ma \
     JOIN people a ON ma.actor_id = a.id WHERE a.name REGEXP ?)";

impl ListQuery {
    /// Parses the raw argument string of a list command.
    pub fn parse(args: &str) -> Result<Self, ListArgsError> {
        Self::from_flags(&scan_flags(args))
    }

    /// Builds a query from scanned flags, stopping at the first invalid one.
    pub fn from_flags(flags: &[Flag]) -> Result<Self, ListArgsError> {
        let mut query = Self::default();

        for flag in flags {
            match flag.name.as_str() {
                "v" => query.verbose = true,
                "t" => query.title = Some(pattern(flag)?),
                "d" => query.director = Some(pattern(flag)?),
                "a" => query.actor = Some(pattern(flag)?),
                "la" => {
                    if query.order == SortOrder::LengthDesc {
                        return Err(ListArgsError::ConflictingSort);
                    }
                    query.order = SortOrder::LengthAsc;
                }
                "ld" => {
                    if query.order == SortOrder::LengthAsc {
                        return Err(ListArgsError::ConflictingSort);
                    }
                    query.order = SortOrder::LengthDesc;
                }
                other => return Err(ListArgsError::UnknownSwitch(other.to_string())),
            }
        }

        Ok(query)
    }

    /// Renders the query as SQL with `?` placeholders, in parameter order.
    pub fn to_sql(&self) -> SqlStatement {
        let mut conditions = Vec::new();
        let mut params = Vec::new();

        if let Some(title) = &self.title {
            conditions.push("m.title REGEXP ?");
            params.push(title.clone());
        }
        if let Some(director) = &self.director {
            conditions.push("p.name REGEXP ?");
            params.push(director.clone());
        }
        if let Some(actor) = &self.actor {
            conditions.push(ACTOR_FILTER);
            params.push(actor.clone());
        }

        let mut sql = String::from(BASE_SELECT);
        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }
        sql.push(' ');
        sql.push_str(self.order.order_by());

        SqlStatement { sql, params }
    }
}

/// Returns the flag's value as a regex pattern, rejecting empty or invalid ones.
fn pattern(flag: &Flag) -> Result<String, ListArgsError> {
    if flag.is_bare() {
        return Err(ListArgsError::MissingPattern(flag.name.clone()));
    }
    Regex::new(&flag.value).map_err(|e| ListArgsError::InvalidPattern {
        flag: flag.name.clone(),
        message: e.to_string(),
    })?;
    Ok(flag.value.clone())
}

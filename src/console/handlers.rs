//! Console command handlers.
//!
//! Each handler runs one command against the store, prompting for any
//! fields it needs and printing outcomes through the prompter.

use super::prompt::Prompter;
use crate::commands::ListQuery;
use crate::db::{AddMovieOutcome, DeletePersonOutcome, MovieStore, NewMovie, Person};
use crate::error::Result;
use std::io::Write;
use tokio::io::AsyncBufRead;
use tracing::debug;

/// Sentinel that ends actor entry.
pub const ACTOR_SENTINEL: &str = "exit";

/// Handle `l [flags]`.
pub async fn list_movies<R, W>(
    store: &dyn MovieStore,
    term: &mut Prompter<R, W>,
    args: &str,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let query = match ListQuery::parse(args) {
        Ok(query) => query,
        Err(e) => return term.say(e),
    };

    let movies = store.list_movies(&query).await?;
    if movies.is_empty() {
        return term.say("No movies found.");
    }

    for movie in &movies {
        term.say(movie)?;
        if query.verbose {
            let cast = store.cast_of(movie.id).await?;
            term.say("Starring:")?;
            for member in &cast {
                term.say(format!(
                    "  - {} at age {}",
                    member.name,
                    member.age_at_release()
                ))?;
            }
        }
    }

    Ok(())
}

/// Handle `a -p`.
pub async fn add_person<R, W>(store: &dyn MovieStore, term: &mut Prompter<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(name) = term.ask_non_empty("Name: ").await? else {
        return aborted("add person");
    };
    let Some(birth_year) = term.ask_year("Birth Year: ").await? else {
        return aborted("add person");
    };

    store.add_person(&name, birth_year).await?;
    term.say("Person added successfully!")
}

/// Handle `a -m`.
pub async fn add_movie<R, W>(store: &dyn MovieStore, term: &mut Prompter<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let Some(title) = term.ask_non_empty("Title: ").await? else {
        return aborted("add movie");
    };
    let Some(length) = term.ask_length("Length (hh:mm): ").await? else {
        return aborted("add movie");
    };
    let Some(director) = ask_existing_person(store, term, "Director: ").await? else {
        return aborted("add movie");
    };
    let Some(release_year) = term.ask_year("Release Year: ").await? else {
        return aborted("add movie");
    };
    let Some(cast) = ask_cast(store, term).await? else {
        return aborted("add movie");
    };

    let movie = NewMovie {
        title,
        length,
        director,
        release_year,
        cast,
    };

    match store.add_movie(&movie).await? {
        AddMovieOutcome::Added(_) => term.say("Movie added successfully!"),
        AddMovieOutcome::Duplicate => {
            term.say("Movie with the same title and director already exists!")
        }
    }
}

/// Handle `d -p [name]`.
pub async fn delete_person<R, W>(
    store: &dyn MovieStore,
    term: &mut Prompter<R, W>,
    name: Option<String>,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let name = match name {
        Some(name) => name,
        None => match term.ask_non_empty("Name: ").await? {
            Some(name) => name,
            None => return aborted("delete person"),
        },
    };

    match store.delete_person(&name).await? {
        DeletePersonOutcome::Deleted => term.say("Person deleted successfully!"),
        DeletePersonOutcome::NotFound => term.say("Person not found."),
        DeletePersonOutcome::DirectsMovies(count) => {
            debug!("{} directs {} movie(s)", name, count);
            term.say("Cannot delete person. They are a director of a movie.")
        }
    }
}

/// Asks for a name until it matches an existing person.
async fn ask_existing_person<R, W>(
    store: &dyn MovieStore,
    term: &mut Prompter<R, W>,
    label: &str,
) -> Result<Option<Person>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    loop {
        let Some(name) = term.ask(label).await? else {
            return Ok(None);
        };
        match store.find_person(name.trim()).await? {
            Some(person) => return Ok(Some(person)),
            None => term.say(format!("- We could not find \"{name}\", try again!"))?,
        }
    }
}

/// Collects actors until the sentinel, skipping unknown and repeated names.
async fn ask_cast<R, W>(
    store: &dyn MovieStore,
    term: &mut Prompter<R, W>,
) -> Result<Option<Vec<Person>>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let label = format!("Actor (type '{ACTOR_SENTINEL}' to finish): ");
    let mut cast: Vec<Person> = Vec::new();

    loop {
        let Some(answer) = term.ask(&label).await? else {
            return Ok(None);
        };
        let name = answer.trim();
        if name == ACTOR_SENTINEL {
            return Ok(Some(cast));
        }

        match store.find_person(name).await? {
            Some(actor) if cast.iter().any(|p| p.id == actor.id) => {
                term.say(format!("- \"{name}\" is already in the cast"))?;
            }
            Some(actor) => cast.push(actor),
            None => term.say(format!("- We could not find \"{name}\", try again!"))?,
        }
    }
}

fn aborted(command: &str) -> Result<()> {
    debug!("Input ended during {}", command);
    Ok(())
}

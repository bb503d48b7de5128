//! Interactive read-evaluate loop.
//!
//! Reads one command per line, routes it, and runs it to completion
//! (including any nested prompts) before reading the next line.

pub mod handlers;
pub mod prompt;

pub use prompt::{InputError, Prompter};

use crate::commands::help::{BANNER, HELP_TEXT, RULE};
use crate::commands::{Command, CommandRouter};
use crate::db::MovieStore;
use crate::error::Result;
use std::io::Write;
use tokio::io::AsyncBufRead;
use tracing::{debug, warn};

/// What the loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The movie console over a store and a pair of streams.
pub struct Console<'a, R, W> {
    store: &'a dyn MovieStore,
    term: Prompter<R, W>,
    prompt: String,
}

impl<'a, R, W> Console<'a, R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    /// Creates a console reading commands from `input` and writing to `output`.
    pub fn new(store: &'a dyn MovieStore, input: R, output: W) -> Self {
        Self {
            store,
            term: Prompter::new(input, output),
            prompt: "> ".to_string(),
        }
    }

    /// Sets the prompt printed before each command.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Consumes the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.term.into_output()
    }

    /// Prints the welcome banner followed by the help text.
    pub fn print_banner(&mut self) -> Result<()> {
        self.term.say(RULE)?;
        self.term.say(BANNER)?;
        print_help(&mut self.term)
    }

    /// Runs commands until end of input or `exit`.
    ///
    /// Errors from a single command are printed and the loop continues;
    /// fatal errors (unreadable input, lost connection) are returned.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.term.show_prompt(&self.prompt)?;
            let Some(line) = self.term.read_line().await? else {
                debug!("End of input");
                return Ok(());
            };

            let command = CommandRouter::parse(&line);
            debug!(?command, "Dispatching");

            match self.execute(command).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!("{}: {}", e.category(), e);
                    self.term.say(&e)?;
                }
            }
        }
    }

    /// Executes a single parsed command.
    pub async fn execute(&mut self, command: Command) -> Result<Flow> {
        let store = self.store;
        let term = &mut self.term;

        match command {
            Command::List(args) => handlers::list_movies(store, term, &args).await?,
            Command::AddPerson => handlers::add_person(store, term).await?,
            Command::AddMovie => handlers::add_movie(store, term).await?,
            Command::AddMissing => term.say("No sub-command provided for add")?,
            Command::AddUnknown(_) => term.say("Unknown sub-command for add")?,
            Command::DeletePerson(name) => handlers::delete_person(store, term, name).await?,
            Command::DeleteInvalid => {
                term.say("Invalid delete command. Use '-p' for person.")?
            }
            Command::Help => print_help(term)?,
            Command::Exit => {
                term.say("Exiting...")?;
                return Ok(Flow::Exit);
            }
            Command::Empty => term.say("Please enter a command.")?,
            Command::Unknown(_) => term.say("Invalid command. Type 'h' for help.")?,
        }

        Ok(Flow::Continue)
    }
}

fn print_help<R, W>(term: &mut Prompter<R, W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    term.say(RULE)?;
    term.say(HELP_TEXT)?;
    term.say(RULE)
}

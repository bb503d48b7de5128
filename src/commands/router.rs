//! Command parsing and routing.
//!
//! Parses a console input line into a structured [`Command`]. The first
//! whitespace-separated token selects the command; the remainder of the
//! line is kept raw so quoted list patterns survive intact.

/// Parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List movies; carries the raw flag string.
    List(String),
    /// Interactively add a person.
    AddPerson,
    /// Interactively add a movie.
    AddMovie,
    /// `a` without a sub-flag.
    AddMissing,
    /// `a` with an unknown sub-flag.
    AddUnknown(String),
    /// Delete a person, optionally named inline.
    DeletePerson(Option<String>),
    /// `d` with a missing or unknown sub-flag.
    DeleteInvalid,
    /// Print the command reference.
    Help,
    /// Leave the console.
    Exit,
    /// Blank input line.
    Empty,
    /// Anything else.
    Unknown(String),
}

/// Command router for parsing console input.
pub struct CommandRouter;

impl CommandRouter {
    /// Parse one input line into a Command.
    pub fn parse(input: &str) -> Command {
        let input = input.trim();
        if input.is_empty() {
            return Command::Empty;
        }

        let (command, args) = match input.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (input, ""),
        };

        match command {
            "l" => Command::List(args.to_string()),
            "a" => Self::parse_add(args),
            "d" => Self::parse_delete(args),
            "h" => Command::Help,
            "exit" => Command::Exit,
            other => Command::Unknown(other.to_string()),
        }
    }

    fn parse_add(args: &str) -> Command {
        match args.split_whitespace().next() {
            None => Command::AddMissing,
            Some("-p") => Command::AddPerson,
            Some("-m") => Command::AddMovie,
            Some(other) => Command::AddUnknown(other.to_string()),
        }
    }

    fn parse_delete(args: &str) -> Command {
        let Some(rest) = args.strip_prefix("-p") else {
            return Command::DeleteInvalid;
        };
        // `-person` is not `-p`
        if rest.chars().next().is_some_and(|c| !c.is_whitespace()) {
            return Command::DeleteInvalid;
        }

        let name = rest.trim().trim_matches('"').trim();
        if name.is_empty() {
            Command::DeletePerson(None)
        } else {
            Command::DeletePerson(Some(name.to_string()))
        }
    }
}

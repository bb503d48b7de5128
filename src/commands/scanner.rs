//! Flag scanner for list command arguments.
//!
//! Extracts `-flag value` pairs from a raw argument string in a single
//! left-to-right pass:
//! - A dash followed by word characters starts a flag (`-v`, `-la`)
//! - A double-quoted value may contain spaces: `-t "The Matrix"`
//! - An unquoted value runs to the next whitespace: `-d Nolan`
//! - A value must be separated from its flag by whitespace
//! - A flag followed directly by another flag has an empty value
//! - Text that is not part of a flag or its value is ignored

/// A flag and its (possibly empty) value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    /// Flag name without the leading dash.
    pub name: String,
    /// Value following the flag, or empty for boolean flags.
    pub value: String,
}

impl Flag {
    /// Creates a flag from a name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Returns true if no value followed the flag.
    pub fn is_bare(&self) -> bool {
        self.value.is_empty()
    }
}

/// Scanner position within the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between flags; everything except a flag start is skipped.
    Scanning,
    /// Reading the word characters of a flag name.
    FlagName,
    /// After a flag name and at least one space, looking for its value.
    AwaitValue,
    /// Inside a double-quoted value.
    Quoted,
    /// Inside an unquoted value.
    Bare,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Scans an argument string into flags, in order of appearance.
pub fn scan_flags(input: &str) -> Vec<Flag> {
    let mut flags = Vec::new();
    let mut chars = input.chars().peekable();
    let mut state = State::Scanning;
    let mut name = String::new();
    let mut value = String::new();

    while let Some(&c) = chars.peek() {
        match state {
            State::Scanning => {
                chars.next();
                if c == '-' && chars.peek().is_some_and(|&n| is_word_char(n)) {
                    state = State::FlagName;
                }
            }
            State::FlagName => {
                if is_word_char(c) {
                    name.push(c);
                    chars.next();
                } else if c.is_whitespace() {
                    chars.next();
                    state = State::AwaitValue;
                } else {
                    // No space before the next character, so no value.
                    flags.push(Flag::new(std::mem::take(&mut name), String::new()));
                    state = State::Scanning;
                }
            }
            State::AwaitValue => {
                if c.is_whitespace() {
                    chars.next();
                } else if c == '"' {
                    chars.next();
                    state = State::Quoted;
                } else if c == '-' {
                    // Next flag (or a stray dash); this flag has no value.
                    flags.push(Flag::new(std::mem::take(&mut name), String::new()));
                    state = State::Scanning;
                } else {
                    state = State::Bare;
                }
            }
            State::Quoted => {
                chars.next();
                if c == '"' {
                    flags.push(Flag::new(
                        std::mem::take(&mut name),
                        std::mem::take(&mut value),
                    ));
                    state = State::Scanning;
                } else {
                    value.push(c);
                }
            }
            State::Bare => {
                if c.is_whitespace() {
                    flags.push(Flag::new(
                        std::mem::take(&mut name),
                        std::mem::take(&mut value),
                    ));
                    state = State::Scanning;
                } else {
                    value.push(c);
                    chars.next();
                }
            }
        }
    }

    // End of input closes whatever flag is still open, including an
    // unterminated quote.
    if state != State::Scanning {
        flags.push(Flag::new(name, value));
    }

    flags
}

//! Command parsing for the movie console.
//!
//! This module keeps command parsing separate from execution, so the
//! router, flag scanner and list-query builder can be tested without a
//! database.

pub mod help;
pub mod list;
pub mod router;
pub mod scanner;

pub use list::{ListArgsError, ListQuery, SortOrder, SqlStatement};
pub use router::{Command, CommandRouter};
pub use scanner::{scan_flags, Flag};

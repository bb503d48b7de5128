//! Help text constants for console commands.

/// Rule printed around the banner and help text.
pub const RULE: &str =
    "============================================================================";

/// Greeting printed once when the console starts.
pub const BANNER: &str =
    "------------------ Welcome to the Movie Console Application! ---------------";

/// Help text displayed for the `h` command.
pub const HELP_TEXT: &str = r#"Available Commands:
- List Movies: l
  - l: List all movies alphabetically by title
  - l -v: List movies with details including actors and ages
  - l -t "regex": List movies matching the title regex
  - l -d "regex": Filter movies by director matching the regex
  - l -a "regex": Filter movies by actors matching the regex
  - l -la: List movies in ascending order by length, then title
  - l -ld: List movies in descending order by length, then title
- Add Entries:
  - Add Person: a -p
    - Adds a new person to the database
  - Add Movie: a -m
    - Adds a new movie to the database
- Delete Entries:
  - Delete Person: d -p ["name"]
    - Deletes a person from the database and their associations with movies
- Help: h
- Exit Application: exit"#;

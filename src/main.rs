//! Movie console - an interactive console for a movie, people and cast database.

use movie_console::cli::Cli;
use movie_console::config::Config;
use movie_console::console::Console;
use movie_console::error::Result;
use movie_console::{db, logging};
use tokio::io::BufReader;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Pick up MOVIES_DATABASE and RUST_LOG from a local .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse_args();

    match &cli.log_file {
        Some(path) => logging::init_file_logging(path),
        None => logging::init_stderr_logging(),
    }

    if let Err(e) = run(cli).await {
        error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());

    // Database path precedence:
    // 1. --database / MOVIES_DATABASE
    // 2. [database] path from the config file
    // 3. Platform data directory
    let config = Config::load_from_file(&config_path)?.with_database_path(cli.database.clone());

    let store = db::connect(&config.database).await?;
    println!("Successfully connected to the database!");

    let mut console = Console::new(
        store.as_ref(),
        BufReader::new(tokio::io::stdin()),
        std::io::stdout(),
    )
    .with_prompt(config.console.prompt.clone());

    if config.console.banner && !cli.no_banner {
        console.print_banner()?;
    }

    let result = console.run().await;
    store.close().await;
    info!("Database closed");
    result
}

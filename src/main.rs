// src/main.rs
use std::env;
use std::io;

use trade_journal::adapter::console::Console;
use trade_journal::application::service::Journal;
use trade_journal::config::Config;
use trade_journal::domain::errors::AppResult;

fn main() -> AppResult<()> {
    // Load configuration
    let config = match env::var("JOURNAL_CONFIG") {
        Ok(path) => Config::from_file(path)?,
        Err(_) => Config::from_env()?,
    };

    // Initialize logging
    config.init_logging()?;

    log::info!("Starting trade_journal v{}", env!("CARGO_PKG_VERSION"));

    let journal = Journal::new(&config.journal)?;

    let stdin = io::stdin();
    let mut console = Console::new(journal, config.display.clone(), io::stdout());
    console.run(stdin.lock())?;

    log::info!("Goodbye!");
    Ok(())
}

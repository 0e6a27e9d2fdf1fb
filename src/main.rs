mod app;
mod constants;
mod editor;
mod event;
mod theme;
mod ui;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use app::App;
use tern_config::Config;
use tern_logger::LogLevel;

fn main() -> Result<()> {
    // Load config first to get the log level; problems are reported once
    // the logger is up
    let (mut config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    let corrections = config.normalize();

    let log_path = tern_config::get_data_dir()
        .map(|dir| dir.join(constants::LOG_FILE_NAME))
        .unwrap_or_else(|_| std::env::temp_dir().join(constants::LOG_FILE_NAME));
    let min_level = LogLevel::from_str(&config.options.log_level).unwrap_or(LogLevel::Info);
    tern_logger::init(log_path, min_level);
    tern_logger::info("Editor started");

    if let Some(e) = config_error {
        tern_logger::warn(format!("Config load failed, using defaults: {:#}", e));
    }
    for correction in corrections {
        tern_logger::warn(correction);
    }

    // Optional single positional argument: file to open
    let file_path = std::env::args().nth(1).map(PathBuf::from);

    // Build the application before touching the terminal so an unreadable
    // file fails cleanly with exit code 1
    let mut app = App::new(config, file_path)?;

    // Initialize terminal; release whatever was acquired on failure
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    let mut terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    };

    // Run application
    let result = app.run(&mut terminal);

    // Restore terminal before reporting anything
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tern_logger::error(format!("Fatal: {:#}", err));
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

//! Genius song collector library
//!
//! This library walks the Genius catalog for a configured list of artists,
//! hydrates every song with its metadata and lyrics, exports the results as a
//! CSV file plus one lyric file per song, and derives weighted edge lists
//! from that CSV for graph tools like Gephi or Cytoscape.
//!
//! # Modules
//!
//! - `cli` - Command implementations behind the binary
//! - `config` - Environment and `.env` configuration
//! - `export` - CSV row and lyric file writers
//! - `genius` - Genius catalog walker and lyric extraction
//! - `graph` - Weighted edge aggregation over the exported CSV
//! - `http` - Authenticated JSON fetching with bounded retries
//! - `types` - API payloads and domain records
//! - `utils` - Small string helpers

pub mod cli;
pub mod config;
pub mod export;
pub mod genius;
pub mod graph;
pub mod http;
pub mod types;
pub mod utils;

/// A convenient Result type alias for glue code that may fail in many ways.
///
/// Typed errors live next to the modules that raise them; this alias is
/// used where those errors meet transport failures and CLI plumbing.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("{} {}", artist_name, song_title);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Wrote {} songs for {}", count, artist_name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal conditions: exhausted fetch retries, a missing access
/// token or an unwritable output file.
///
/// # Example
///
/// ```
/// error!("Cannot fetch songs. Err: {}", e);
/// // Program exits here
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for conditions the run recovers from, like an artist name that
/// never shows up in the search results.
///
/// # Example
///
/// ```
/// warning!("No lyrics found at {}", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

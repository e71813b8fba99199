//! # CLI Module
//!
//! Command implementations behind the `geniusing` binary.
//!
//! ## Commands
//!
//! - [`fetch`] - Walks the Genius catalog for every configured artist and
//!   writes `songs.csv` plus one lyric file per song
//! - [`edges`] - Turns two columns of `songs.csv` into a weighted edge list
//!
//! ## Typical Session
//!
//! ```bash
//! geniusing fetch                        # songs.csv + lyrics/<artist>/*.txt
//! geniusing edges Artist Producers       # artist-producers.csv
//! geniusing edges Artist "Sampled Artists"
//! ```
//!
//! Fatal conditions (missing token, exhausted retries, unwritable files) are
//! reported through [`crate::error!`], which exits the process. An artist
//! that cannot be found is reported with [`crate::warning!`] and skipped.

mod edges;
mod fetch;

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

pub use edges::edges;
pub use edges::top_edges;
pub use fetch::FetchOptions;
pub use fetch::collect;
pub use fetch::fetch;

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

use std::{path::PathBuf, time::Duration};

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use geniusing::{
    cli::{self, FetchOptions},
    config,
    export::WriteMode,
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fetch songs and lyrics for the configured artists
    Fetch(FetchArgs),

    /// Build a weighted edge list from two columns of the songs CSV
    Edges(EdgesArgs),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct FetchArgs {
    /// CSV file songs are written to
    #[clap(long, default_value = "songs.csv")]
    pub output: PathBuf,

    /// Directory lyric files are written under
    #[clap(long, default_value = "lyrics")]
    pub lyrics_dir: PathBuf,

    /// Append to an existing CSV instead of truncating it
    #[clap(long)]
    pub append: bool,

    /// Include songs where the artist is not the primary artist
    #[clap(long)]
    pub all_songs: bool,

    /// Pause after each song, in milliseconds
    #[clap(long, default_value_t = 500)]
    pub delay_ms: u64,
}

#[derive(Parser, Debug, Clone)]
pub struct EdgesArgs {
    /// Column holding edge sources, e.g. Artist
    pub source: String,

    /// Column holding comma-separated edge targets, e.g. Producers
    pub target: String,

    /// Songs CSV to read
    #[clap(long, default_value = "songs.csv")]
    pub input: PathBuf,

    /// Directory the edge list is written to
    #[clap(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Number of heaviest edges to print
    #[clap(long, default_value_t = 10)]
    pub top: usize,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Fetch(opt) => {
            cli::fetch(FetchOptions {
                output: opt.output,
                lyrics_dir: opt.lyrics_dir,
                mode: if opt.append {
                    WriteMode::Append
                } else {
                    WriteMode::Truncate
                },
                primary_only: !opt.all_songs,
                delay: Duration::from_millis(opt.delay_ms),
            })
            .await
        }
        Command::Edges(opt) => {
            cli::edges(&opt.source, &opt.target, &opt.input, &opt.output_dir, opt.top)
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

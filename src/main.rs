use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

use moji::clipboard;
use moji::core::config::{self, ResolvedConfig};
use moji::search::skin_tone;
use moji::tui;

#[derive(Parser)]
#[command(
    name = "moji",
    about = "Find relevant emoji from the command line",
    after_help = "Run without arguments to enter the live search: type to see \
matches, Left/Right to pick one, Up/Down to change the skin tone, and Enter \
or 1-9 to copy it and exit.\n\nExample:\n  moji 'i love unicorns'"
)]
struct Args {
    /// Search for this text and print the matches instead of going live
    text: Option<String>,

    /// Copy the first match to the clipboard
    #[arg(short, long)]
    copy: bool,

    /// Skin tone, 0 (none) through 5 (darkest); persisted for future runs
    #[arg(short, long, value_name = "TONE")]
    skin_tone: Option<u8>,

    /// How many matches to show, 1 through 10
    #[arg(short, long, value_name = "COUNT")]
    limit: Option<usize>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to moji.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("moji.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Moji starting up (query={:?})", args.text);

    let file_config = match config::load_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            warn!("Failed to load config, falling back to defaults: {}", e);
            Default::default()
        }
    };

    if let Some(tone) = args.skin_tone
        && let Err(e) = config::save_skin_tone(tone)
    {
        warn!("Failed to persist skin tone: {}", e);
    }

    let config = config::resolve(&file_config, args.skin_tone, args.limit);

    match args.text {
        Some(text) => one_shot(&text, args.copy, &config).await,
        None => match tui::run(&config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("moji: {}", e);
                ExitCode::FAILURE
            }
        },
    }
}

/// Non-interactive mode: search once, print the matches, optionally copy
/// the first one.
async fn one_shot(text: &str, copy: bool, config: &ResolvedConfig) -> ExitCode {
    let engine = tui::build_engine(config);
    match engine.search(text).await {
        Ok(results) => {
            let rendered: Vec<String> = results
                .iter()
                .map(|emoji| skin_tone::apply(emoji, config.skin_tone))
                .collect();
            println!("{}", rendered.join("  "));
            if copy && let Some(first) = rendered.first() {
                clipboard::copy(first);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("moji: {}", e);
            ExitCode::FAILURE
        }
    }
}

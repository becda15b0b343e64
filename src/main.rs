use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use slidenav::core::config::{self, CliOverrides, SlidenavConfig};
use slidenav::core::deck::Deck;
use slidenav::core::state::App;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "slidenav", about = "Present a Markdown slide deck in the terminal")]
struct Args {
    /// Markdown deck, slides separated by `---` lines
    deck: PathBuf,

    /// Slide to open on (1-based)
    #[arg(long)]
    start: Option<usize>,

    /// Pause between hiding one slide and revealing the next
    #[arg(long, value_name = "MS")]
    reveal_delay_ms: Option<u64>,

    /// Keep the controls at full brightness
    #[arg(long)]
    no_auto_hide: bool,

    /// Print the deck outline as JSON and exit
    #[arg(long)]
    outline: bool,

    /// Log file path
    #[arg(long, default_value = "slidenav.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - the terminal belongs to the presentation
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let deck = match Deck::load(&args.deck) {
        Ok(deck) => deck,
        Err(e) => {
            eprintln!("slidenav: {}: {}", args.deck.display(), e);
            return ExitCode::FAILURE;
        }
    };

    if args.outline {
        return match serde_json::to_string_pretty(&deck.outline()) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("slidenav: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {}", e);
        SlidenavConfig::default()
    });
    let cli = CliOverrides {
        start_slide: args.start,
        reveal_delay_ms: args.reveal_delay_ms,
        no_auto_hide: args.no_auto_hide,
    };
    let resolved = config::resolve(&file_config, &cli);

    log::info!(
        "slidenav starting: {} ({} slides, start at {})",
        deck.name,
        deck.len(),
        resolved.start_slide
    );

    let app = App::from_config(deck, &resolved);
    match slidenav::tui::run(app, &resolved) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Terminal error: {}", e);
            eprintln!("slidenav: {e}");
            ExitCode::FAILURE
        }
    }
}

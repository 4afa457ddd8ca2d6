use chunkread::app::App;
use chunkread::engine::{Config, DelayMode};
use chunkread::input::{ClipboardText, FileText};
use chunkread::ui::{Theme, TuiManager};
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;

/// Terminal speed reader: shows text a few words at a time at a steady pace.
#[derive(Debug, Parser)]
#[command(name = "chunkread", version, about)]
struct Cli {
    /// Text file to start reading immediately
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Read the clipboard contents instead of a file
    #[arg(long, conflicts_with = "file")]
    clipboard: bool,

    /// Reading speed in words per minute
    #[arg(short, long, value_name = "N")]
    wpm: Option<u32>,

    /// Words shown at a time (1-5)
    #[arg(short = 'n', long, value_name = "N")]
    chunk_size: Option<usize>,

    /// How a chunk's display time is derived: whole-chunk or per-word-average
    #[arg(long, value_name = "MODE")]
    delay_mode: Option<DelayMode>,

    /// Colour theme: dark, light or sepia
    #[arg(short, long, value_name = "NAME")]
    theme: Option<String>,

    /// Configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write log output to this file (the terminal is owned by the reader)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn init_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let log_level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };
        let file = File::create(path)?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        Ok(())
    }

    /// Config file first, then command-line overrides.
    fn build_config(&self) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(wpm) = self.wpm {
            let clamped = config.timing.clamp_wpm(wpm);
            if clamped != wpm {
                log::warn!("wpm {} out of range, using {}", wpm, clamped);
            }
            config.timing.wpm = clamped;
        }
        if let Some(chunk_size) = self.chunk_size {
            config.timing.chunk_size = config.timing.sanitize_chunk_size(chunk_size);
        }
        if let Some(mode) = self.delay_mode {
            config.timing.delay_mode = mode;
        }
        if let Some(theme) = &self.theme {
            if Theme::by_name(theme).is_some() {
                config.theme = theme.trim().to_ascii_lowercase();
            } else {
                log::warn!("unknown theme {:?}, keeping {}", theme, config.theme);
            }
        }

        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    cli.init_logging()?;
    let config = cli.build_config()?;
    log::debug!("starting with {:?}", config);

    let mut app = App::new(&config);
    if let Some(path) = &cli.file {
        app.set_source(Box::new(FileText::new(path.clone())));
        app.start_reading();
    } else if cli.clipboard {
        app.set_source(Box::new(ClipboardText));
        app.start_reading();
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}

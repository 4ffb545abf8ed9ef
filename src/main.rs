//! linkpaste - Command Line Entry Point
//!
//! Runs the paste pipeline against a document on disk, so the Markdown link
//! rewriting can be used from scripts and editor integrations that shell out.

use clap::{Parser, Subcommand};
use linkpaste::clipboard::{ClipboardEvent, SystemClipboard};
use linkpaste::config::{self, NothingSelected, Settings};
use linkpaste::editor::{Editor, Position, TextBuffer};
use linkpaste::error::{Result, ResultExt};
use linkpaste::paste::{self, PasteConfig};
use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "linkpaste")]
#[command(about = "Turn pasted URLs and file paths into Markdown links")]
#[command(version)]
struct Cli {
    /// Settings file to use instead of the platform config location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Paste into a document and print (or save) the result
    Paste {
        /// Markdown document to paste into
        file: PathBuf,

        /// Cursor position as LINE:COLUMN, zero-based
        #[arg(long, value_name = "L:C")]
        cursor: Position,

        /// Selection start as LINE:COLUMN; the selection runs to the cursor
        #[arg(long, value_name = "L:C")]
        anchor: Option<Position>,

        /// Text to paste; the system clipboard is read when omitted
        #[arg(long)]
        text: Option<String>,

        /// Write the result back to FILE instead of printing it
        #[arg(long)]
        in_place: bool,

        /// Override the nothing-selected behavior
        #[arg(long, value_name = "BEHAVIOR", value_parser = parse_behavior)]
        nothing_selected: Option<NothingSelected>,
    },

    /// Show how a piece of text would be treated as a link
    Classify {
        /// Text to classify
        text: String,
    },

    /// Print the effective settings as JSON
    Config {
        /// Write the default settings file
        #[arg(long)]
        init: bool,
    },
}

fn parse_behavior(value: &str) -> std::result::Result<NothingSelected, String> {
    NothingSelected::from_key(value).ok_or_else(|| {
        let choices: Vec<String> = NothingSelected::all()
            .iter()
            .map(|b| format!("{} ({})", b.key(), b.label()))
            .collect();
        format!("expected one of: {}", choices.join(", "))
    })
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Paste {
            file,
            cursor,
            anchor,
            text,
            in_place,
            nothing_selected,
        } => {
            let settings = load_settings(cli.config.as_deref());
            let mut config = PasteConfig::from_settings(&settings);
            if let Some(behavior) = nothing_selected {
                config = config.with_nothing_selected(behavior);
            }
            run_paste(&file, cursor, anchor, text, in_place, &config)
        }
        Command::Classify { text } => {
            let settings = load_settings(cli.config.as_deref());
            run_classify(&text, &PasteConfig::from_settings(&settings));
            Ok(())
        }
        Command::Config { init } => run_config(cli.config.as_deref(), init),
    }
}

fn load_settings(path: Option<&Path>) -> Settings {
    match path {
        Some(path) => config::load_config_from(path)
            .unwrap_or_warn_default(Settings::default(), "Failed to load configuration"),
        None => config::load_config(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Commands
// ─────────────────────────────────────────────────────────────────────────────

fn run_paste(
    file: &Path,
    cursor: Position,
    anchor: Option<Position>,
    text: Option<String>,
    in_place: bool,
    config: &PasteConfig,
) -> Result<()> {
    let document = fs::read_to_string(file)?;
    let mut buffer = TextBuffer::new(&document);
    match anchor {
        Some(anchor) => buffer.select(anchor, cursor),
        None => buffer.set_cursor(cursor),
    }

    let (handled, pasted) = match text {
        Some(text) => (paste::paste_text(&mut buffer, &text, config)?, Some(text)),
        None => {
            let mut event = SystemClipboard::capture();
            let pasted = event.text();
            paste::paste_event(&mut buffer, &mut event, config)?;
            (event.default_prevented(), pasted)
        }
    };

    if handled {
        info!("Pasted as a Markdown link");
    } else if let Some(pasted) = pasted {
        // What the host would do on its own
        info!("Pasted as plain text");
        buffer.replace_selection(&pasted);
    }
    info!("Cursor now at {}", buffer.cursor());

    if in_place {
        fs::write(file, buffer.text())?;
        info!("Wrote {}", file.display());
    } else {
        print!("{}", buffer.text());
    }
    Ok(())
}

fn run_classify(text: &str, config: &PasteConfig) {
    let text = text.trim();
    let is_link = paste::is_link_target(text, config);
    println!("link:       {}", is_link);
    println!("file path:  {}", paste::is_file_path(text));
    if is_link {
        println!("normalized: {}", paste::normalize(text));
        println!("image:      {}", config.is_image_url(text));
    }
}

fn run_config(path: Option<&Path>, init: bool) -> Result<()> {
    if init {
        let settings = Settings::default();
        match path {
            Some(path) => config::save_config_to(path, &settings)?,
            None => config::save_config(&settings)?,
        }
        return Ok(());
    }

    let settings = load_settings(path);
    if let Err(e) = settings.validate() {
        eprintln!("Warning: {}", e);
    }
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

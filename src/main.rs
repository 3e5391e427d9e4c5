use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use keycalc::Config;
use keycalc::calculator::{
    Catalog, Engine, Layout, clipboard_text, copy_to_clipboard, looks_like_keys, parse_keys,
};
use keycalc::ui::{DisplayStyle, render_display, render_keypad};

/// Keypad calculator. Feeds key sequences such as `3+2=` into the engine
/// and prints the display.
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
struct Cli {
    /// Key sequences to submit in order. Reads lines from stdin when empty.
    keys: Vec<String>,

    /// Config file (default: ~/.config/keycalc/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Keypad layout, overrides the config file.
    #[arg(long, value_enum)]
    layout: Option<Layout>,

    /// Print the keypad before the display.
    #[arg(long)]
    keypad: bool,

    /// Print the engine state as JSON instead of the display.
    #[arg(long)]
    json: bool,

    /// Copy the final result to the clipboard.
    #[arg(long)]
    copy: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(layout) = cli.layout {
        config.layout = layout;
    }
    debug!(?config, "starting");

    let catalog = Catalog::build(config.layout);
    let mut engine = Engine::with_options(config.engine_options());
    let style = DisplayStyle::for_catalog(&catalog);

    let mut stdout = io::stdout().lock();
    if cli.keypad {
        write!(stdout, "{}", render_keypad(&catalog))?;
    }

    if cli.keys.is_empty() {
        run_interactive(&catalog, &mut engine, &cli, style, &mut stdout)?;
    } else {
        for keys in &cli.keys {
            submit_line(&catalog, &mut engine, keys)?;
        }
        print_state(&engine, &cli, style, &mut stdout)?;
    }

    if cli.copy {
        match clipboard_text(engine.display_text()) {
            Some(text) => copy_to_clipboard(&text).context("Failed to copy result")?,
            None => warn!(display = engine.display_text(), "nothing to copy"),
        }
    }

    Ok(())
}

/// Submit every key in a line.
fn submit_line(catalog: &Catalog, engine: &mut Engine, line: &str) -> Result<()> {
    let options = parse_keys(catalog, line).with_context(|| format!("Invalid keys {line:?}"))?;
    for option in options {
        engine.submit(option);
    }
    Ok(())
}

/// Read key lines from stdin and print the display after each one.
///
/// Lines that are not key sequences are reported and skipped so a typo does
/// not end the session. `:keypad` reprints the keypad, `:quit` exits.
fn run_interactive(
    catalog: &Catalog,
    engine: &mut Engine,
    cli: &Cli,
    style: DisplayStyle,
    out: &mut impl Write,
) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        match line.trim() {
            ":quit" | ":q" => break,
            ":keypad" => {
                write!(out, "{}", render_keypad(catalog))?;
                continue;
            }
            _ => {}
        }

        // An empty line is the Enter key.
        let keys = if line.trim().is_empty() { "=" } else { line.as_str() };
        if !looks_like_keys(keys) {
            eprintln!("Not a key sequence: {keys:?}");
            continue;
        }
        match submit_line(catalog, engine, keys) {
            Ok(()) => print_state(engine, cli, style, out)?,
            Err(err) => eprintln!("{err:#}"),
        }
    }
    Ok(())
}

fn print_state(
    engine: &Engine,
    cli: &Cli,
    style: DisplayStyle,
    out: &mut impl Write,
) -> Result<()> {
    if cli.json {
        let json = serde_json::to_string(&engine.snapshot()).context("Failed to encode state")?;
        writeln!(out, "{json}")?;
    } else if cli.keypad {
        writeln!(out, "{}", render_display(engine, style))?;
    } else {
        writeln!(out, "{}", engine.formatted_display_text())?;
    }
    out.flush()?;
    Ok(())
}

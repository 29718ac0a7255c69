//! Command-line interface for camelsnake.
//!
//! The binary acts as a minimal editor host: it opens FILE (or stdin) in a
//! [`BufferHost`], optionally selects a range, runs a command and writes the
//! document back to stdout or, with `--in-place`, to FILE.

use crate::case_convert::CaseMode;
use crate::commands::{CaseCommand, MenuItem};
use crate::host::{BufferHost, Position, TextRange};
use crate::plugin::{Plugin, RunOutcome};
use anyhow::{Context, Result};
use camelsnake_config::LogLevel;
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// camelsnake - convert identifiers between camelCase and snake_case
#[derive(Parser, Debug)]
#[command(name = "camelsnake")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/camelsnake/config.yaml
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log level for the debug log (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert snake_case to camelCase
    Camel(TargetArgs),

    /// Convert camelCase to snake_case
    Snake(TargetArgs),

    /// Run the command bound to a key chord, e.g. "Shift+Alt+C"
    Key {
        /// Key chord as the editor would report it
        chord: String,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// List commands, their key bindings and the context-menu layout
    #[command(name = "commands")]
    ListCommands,
}

#[derive(Args, Debug)]
pub struct TargetArgs {
    /// File to convert (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Range to convert as LINE:COL-LINE:COL, zero-based (whole document when omitted)
    #[arg(long, value_name = "RANGE", value_parser = parse_range)]
    pub selection: Option<TextRange>,

    /// Rewrite FILE instead of printing the result
    #[arg(short, long, requires = "file")]
    pub in_place: bool,
}

/// Parse "LINE:COL-LINE:COL" into a range.
pub fn parse_range(s: &str) -> Result<TextRange, String> {
    let (start, end) = s
        .split_once('-')
        .ok_or_else(|| format!("expected LINE:COL-LINE:COL, got '{s}'"))?;
    Ok(TextRange::new(parse_position(start)?, parse_position(end)?))
}

fn parse_position(s: &str) -> Result<Position, String> {
    let (line, ch) = s
        .trim()
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got '{s}'"))?;
    let line = line
        .parse::<usize>()
        .map_err(|e| format!("invalid line '{line}': {e}"))?;
    let ch = ch
        .parse::<usize>()
        .map_err(|e| format!("invalid column '{ch}': {e}"))?;
    Ok(Position::new(line, ch))
}

/// Execute a parsed command line with a configured plugin.
pub fn execute(command: Commands, plugin: &Plugin) -> Result<()> {
    match command {
        Commands::Camel(target) => {
            convert_target(&target, |host| Ok(plugin.run(host, CaseMode::ToCamel)?))
        }
        Commands::Snake(target) => {
            convert_target(&target, |host| Ok(plugin.run(host, CaseMode::ToSnake)?))
        }
        Commands::Key { chord, target } => {
            convert_target(&target, |host| Ok(plugin.dispatch_key(&chord, host)?))
        }
        Commands::ListCommands => {
            print_commands(plugin, &mut io::stdout().lock())?;
            Ok(())
        }
    }
}

fn convert_target(
    target: &TargetArgs,
    run: impl FnOnce(&mut BufferHost) -> Result<RunOutcome>,
) -> Result<()> {
    let text = match &target.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let mut host = BufferHost::new(text);
    if let Some(range) = target.selection {
        host.select(range)
            .with_context(|| format!("invalid selection {range}"))?;
    }

    let outcome = run(&mut host)?;
    match outcome {
        RunOutcome::Unbound => eprintln!("camelsnake: key chord is not bound to a command"),
        RunOutcome::NothingSelected => eprintln!("camelsnake: nothing selected"),
        RunOutcome::NoTarget | RunOutcome::Replaced { .. } => {}
    }

    let changed = matches!(outcome, RunOutcome::Replaced { changed: true, .. });
    let document = host.into_text().unwrap_or_default();

    match (&target.file, target.in_place) {
        (Some(path), true) => {
            if changed {
                std::fs::write(path, &document)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                log::info!("Rewrote {}", path.display());
            }
        }
        _ => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(document.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Print commands with their bindings, followed by the context menu.
pub fn print_commands(plugin: &Plugin, out: &mut impl Write) -> io::Result<()> {
    for command in CaseCommand::all() {
        let keys: Vec<String> = plugin
            .keybindings()
            .combos_for(command.id())
            .iter()
            .map(|combo| combo.to_string())
            .collect();
        let keys = if keys.is_empty() {
            "(unbound)".to_string()
        } else {
            keys.join(", ")
        };
        writeln!(out, "{:<20} {:<18} {}", command.id(), command.title(), keys)?;
    }

    let menu = plugin.context_menu();
    if !menu.is_empty() {
        writeln!(out)?;
        writeln!(out, "Context menu:")?;
        for item in menu {
            match item {
                MenuItem::Divider => writeln!(out, "  ----")?,
                MenuItem::Command(command) => writeln!(out, "  {}", command.title())?,
            }
        }
    }
    Ok(())
}

//! Potku Rückstoß-Verteilungs-Editor (Headless).
//!
//! Spielt eine aufgezeichnete Editor-Sitzung ab und gibt die resultierende
//! Kurven-Szene als JSON aus.

use anyhow::Context;
use clap::Parser;
use potku_recoil_editor::{EditorOptions, ReplayScript};
use std::path::PathBuf;

/// Kommandozeilen-Argumente.
#[derive(Parser, Debug)]
#[command(name = "Potku-Recoil-Editor", version)]
#[command(about = "Spielt eine Editor-Sitzung für Rückstoß-Verteilungen ab", long_about = None)]
struct Cli {
    /// Pfad zum JSON-Skript mit den aufgezeichneten Intents
    script_path: PathBuf,
    /// TOML-Datei mit Editor-Optionen (Standard: neben der Binary)
    #[arg(long)]
    options: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Potku Recoil Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let options_path = cli.options.unwrap_or_else(EditorOptions::config_path);
    let options = EditorOptions::load_from_file(&options_path);

    let script = ReplayScript::load_from_file(&cli.script_path)
        .with_context(|| format!("Skript nicht lesbar: {}", cli.script_path.display()))?;
    let scene = script.run_to_scene(options)?;

    if let Some(error) = &scene.last_error {
        log::warn!("Letzte Ablehnung: {}", error);
    }
    println!("{}", serde_json::to_string_pretty(&scene)?);
    Ok(())
}

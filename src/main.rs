//! Bezier-LUT-Editor.
//!
//! Headless-Einstiegspunkt: lädt die Optionen, baut die Session aus den
//! konfigurierten Ankern auf und schreibt die exportierte Lookup-Tabelle
//! als JSON nach stdout. Die interaktive Oberfläche spricht die gleiche
//! Session über `EditorIntent`s an.

use bezier_lut_editor::{EditorOptions, EditorSession};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Bezier-LUT-Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    // Optionen aus TOML laden (oder Standardwerte); optionaler Pfad
    // als erstes Argument
    let config_path = match std::env::args_os().nth(1) {
        Some(arg) => std::path::PathBuf::from(arg),
        None => EditorOptions::config_path(),
    };
    let options = EditorOptions::load_from_file(&config_path);

    let mut session = EditorSession::new(options)?;
    let set = session.export()?;

    log::info!("Export: {} Punkte", set.len());
    serde_json::to_writer_pretty(std::io::stdout().lock(), set)?;
    println!();

    Ok(())
}

//! Zentrale Konfiguration für den Bezier-LUT-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Koordinatensystem ───────────────────────────────────────────────

/// Ursprung des logischen Koordinatensystems in Screen-Einheiten.
/// Anker werden relativ dazu platziert (logische y-Achse zeigt nach oben).
pub const ORIGIN: Vec2 = Vec2::new(100.0, 1000.0);

/// Standard-Anker-Offsets relativ zum Ursprung.
pub const ANCHOR_OFFSETS_DEFAULT: [Vec2; 2] = [Vec2::new(0.0, 300.0), Vec2::new(600.0, 600.0)];

// ── Domäne ──────────────────────────────────────────────────────────

/// Untere Grenze der horizontalen Domäne (z.B. Tag 0).
pub const X_MIN: f32 = 0.0;
/// Obere Grenze der horizontalen Domäne (Anzahl der Tage). Muss > 0 sein.
pub const X_MAX: f32 = 100.0;
/// Untere Grenze der vertikalen Domäne (informativ).
pub const Y_MIN: f32 = 50.0;
/// Obere Grenze der vertikalen Domäne (informativ).
pub const Y_MAX: f32 = 400.0;

// ── Handles ─────────────────────────────────────────────────────────

/// Seed-Position des ersten Kontroll-Handles (Screen-Einheiten).
/// Spätere ungerade Handles starten ebenfalls hier als Platzhalter.
pub const SEED_HANDLE: Vec2 = Vec2::new(150.0, 500.0);
/// Versatz zwischen den beiden Seed-Handles des ersten Segments.
pub const SEED_HANDLE_STEP: Vec2 = Vec2::new(100.0, -100.0);

// ── Interaktion ─────────────────────────────────────────────────────

/// Pick-Radius für Anker und Handles in Screen-Einheiten.
pub const PICK_RADIUS: f32 = 15.0;

// ── Sampling ────────────────────────────────────────────────────────

/// Anzahl der Schritte des parametrischen Sweeps über die gesamte Kette.
pub const SWEEP_RESOLUTION: usize = 5000;
/// Horizontale Rundungs-Genauigkeit des Duplikat-Filters (1 = ganze Einheiten).
pub const FILTER_ACCURACY_X: f32 = 1.0;
/// Vertikale Rundungs-Genauigkeit des Duplikat-Filters (0.1 = Zehner-Schritte).
pub const FILTER_ACCURACY_Y: f32 = 0.1;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_lut_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    /// Ursprung des Koordinatensystems in Screen-Einheiten
    pub origin: Vec2,
    /// Anker-Offsets relativ zum Ursprung (mindestens 2)
    pub anchor_offsets: Vec<Vec2>,

    // ── Domäne ──────────────────────────────────────────────────
    /// Untere horizontale Domänengrenze
    pub x_min: f32,
    /// Obere horizontale Domänengrenze (muss > 0 und > x_min sein)
    pub x_max: f32,
    /// Untere vertikale Domänengrenze (informativ)
    pub y_min: f32,
    /// Obere vertikale Domänengrenze (informativ)
    pub y_max: f32,

    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Anker und Handles in Screen-Einheiten
    #[serde(default = "default_pick_radius")]
    pub pick_radius: f32,

    // ── Sampling ────────────────────────────────────────────────
    /// Schrittzahl des parametrischen Sweeps
    #[serde(default = "default_sweep_resolution")]
    pub sweep_resolution: usize,
    /// Horizontale Filter-Genauigkeit
    #[serde(default = "default_filter_accuracy_x")]
    pub filter_accuracy_x: f32,
    /// Vertikale Filter-Genauigkeit
    #[serde(default = "default_filter_accuracy_y")]
    pub filter_accuracy_y: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            origin: ORIGIN,
            anchor_offsets: ANCHOR_OFFSETS_DEFAULT.to_vec(),

            x_min: X_MIN,
            x_max: X_MAX,
            y_min: Y_MIN,
            y_max: Y_MAX,

            pick_radius: PICK_RADIUS,

            sweep_resolution: SWEEP_RESOLUTION,
            filter_accuracy_x: FILTER_ACCURACY_X,
            filter_accuracy_y: FILTER_ACCURACY_Y,
        }
    }
}

/// Serde-Default für `pick_radius` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_pick_radius() -> f32 {
    PICK_RADIUS
}

/// Serde-Default für `sweep_resolution` (Abwärtskompatibilität).
fn default_sweep_resolution() -> usize {
    SWEEP_RESOLUTION
}

/// Serde-Default für `filter_accuracy_x` (Abwärtskompatibilität).
fn default_filter_accuracy_x() -> f32 {
    FILTER_ACCURACY_X
}

/// Serde-Default für `filter_accuracy_y` (Abwärtskompatibilität).
fn default_filter_accuracy_y() -> f32 {
    FILTER_ACCURACY_Y
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_lut_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_lut_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_optionen_konsistent() {
        let opts = EditorOptions::default();
        assert_eq!(opts.anchor_offsets.len(), 2);
        assert!(opts.x_max > opts.x_min);
        assert!(opts.x_max > 0.0);
        assert_eq!(opts.pick_radius, PICK_RADIUS);
    }

    #[test]
    fn test_toml_roundtrip() {
        let mut opts = EditorOptions::default();
        opts.x_max = 42.0;
        opts.anchor_offsets.push(Vec2::new(1000.0, 200.0));

        let content = toml::to_string_pretty(&opts).expect("Serialisierung erwartet");
        let restored: EditorOptions = toml::from_str(&content).expect("Parse erwartet");
        assert_eq!(restored, opts);
    }

    #[test]
    fn test_toml_ohne_optionale_felder_nutzt_defaults() {
        // Nur Pflichtfelder — serde-Defaults füllen den Rest
        let content = r#"
            origin = [100.0, 1000.0]
            anchor_offsets = [[0.0, 300.0], [600.0, 600.0]]
            x_min = 0.0
            x_max = 100.0
            y_min = 50.0
            y_max = 400.0
        "#;
        let opts: EditorOptions = toml::from_str(content).expect("Parse erwartet");
        assert_eq!(opts.sweep_resolution, SWEEP_RESOLUTION);
        assert_eq!(opts.filter_accuracy_y, FILTER_ACCURACY_Y);
    }
}

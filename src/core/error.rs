//! Typisierte Fehler des Kurvenmodells und des Samplers.
//!
//! Alle Varianten sind lokal behebbar: der betroffene Aufruf wird
//! abgelehnt, der vorherige Zustand bleibt unverändert.

use thiserror::Error;

/// Fehler bei Modell-Mutationen und beim Sampling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CurveError {
    /// Konfiguration verletzt eine Grundbedingung (z.B. weniger als 2 Anker).
    #[error("Ungültige Konfiguration: {0}")]
    InvalidConfiguration(String),

    /// Mutation adressiert einen nicht existierenden Anker oder Handle.
    #[error("Index {index} außerhalb des gültigen Bereichs (Länge {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Die horizontale Domäne ergibt keinen brauchbaren Sampling-Schritt.
    #[error("Degenerierte Domäne: Spanne {span} über Domänenbreite {domain} ergibt Schritt 0")]
    DegenerateDomain { span: f32, domain: f32 },
}

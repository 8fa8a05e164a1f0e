//! Eingabe-Intents der Editor-Oberfläche.
//!
//! Die Oberfläche übersetzt rohe Eingaben in diese Intents; der
//! `SessionController` setzt sie gegen die Session um. Dadurch bleibt
//! die Interaktionslogik frei von UI-Details und direkt testbar.

use glam::Vec2;

/// Ein Eingabe-Intent aus der Oberfläche.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorIntent {
    /// Pointer wurde an `pos` gedrückt (startet ggf. einen Drag)
    PointerPressed { pos: Vec2 },
    /// Pointer wurde bei gedrückter Taste nach `pos` bewegt
    PointerDragged { pos: Vec2 },
    /// Pointer wurde losgelassen (beendet einen laufenden Drag)
    PointerReleased,
    /// Export der aktuellen Kette als Lookup-Tabelle anfordern
    ExportRequested,
    /// Anker-Sequenz durch neue Offsets ersetzen
    AnchorsReplaced { offsets: Vec<Vec2> },
    /// Horizontale Domäne ändern
    DomainChanged { x_min: f32, x_max: f32 },
}

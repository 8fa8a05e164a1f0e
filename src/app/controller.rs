//! Dünner Controller zwischen Oberfläche und Session.
//!
//! Übersetzt `EditorIntent`s in Session-Aufrufe und hält dabei keinen
//! eigenen Zustand außer der Session selbst.

use crate::app::events::EditorIntent;
use crate::app::state::EditorSession;
use anyhow::Context;

/// Setzt Eingabe-Intents gegen die Session um.
#[derive(Debug)]
pub struct SessionController {
    session: EditorSession,
}

impl SessionController {
    /// Erstellt einen Controller um eine bestehende Session.
    pub fn new(session: EditorSession) -> Self {
        Self { session }
    }

    /// Setzt einen Intent um.
    ///
    /// Drag-Intents ohne aktives Ziel sind No-ops; alle übrigen Fehler
    /// werden mit Kontext nach oben gereicht.
    pub fn handle_intent(&mut self, intent: EditorIntent) -> anyhow::Result<()> {
        match intent {
            EditorIntent::PointerPressed { pos } => {
                self.session.pointer_pressed(pos);
                Ok(())
            }
            EditorIntent::PointerDragged { pos } => self
                .session
                .pointer_dragged(pos)
                .context("Drag fehlgeschlagen"),
            EditorIntent::PointerReleased => {
                self.session.pointer_released();
                Ok(())
            }
            EditorIntent::ExportRequested => {
                let set = self.session.export().context("Export fehlgeschlagen")?;
                log::info!("Export: {} Punkte", set.len());
                Ok(())
            }
            EditorIntent::AnchorsReplaced { offsets } => self
                .session
                .replace_anchor_offsets(offsets)
                .context("Anker-Austausch fehlgeschlagen"),
            EditorIntent::DomainChanged { x_min, x_max } => self
                .session
                .set_domain(x_min, x_max)
                .context("Domänenwechsel fehlgeschlagen"),
        }
    }

    /// Read-only Sicht auf die Session.
    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    /// Mutable Sicht auf die Session (z.B. für den Export-Abruf).
    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }
}

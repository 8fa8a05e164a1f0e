//! Editor-Session: Kette, Optionen, Drag-Zustand und Sample-Cache.

use crate::app::pick::{self, PickTarget};
use crate::core::{sampler, CurveChain, CurveError, SampleSet};
use crate::shared::EditorOptions;

/// Laufende Editor-Session.
///
/// Hält die Kurvenkette zusammen mit den Optionen, dem aktiven
/// Drag-Ziel und dem Sample-Cache. Der Cache wird bei jeder Mutation
/// der Kette oder der Domäne verworfen und beim nächsten Export neu
/// berechnet.
#[derive(Debug)]
pub struct EditorSession {
    chain: CurveChain,
    options: EditorOptions,
    /// Aktives Drag-Ziel zwischen Pressed und Released
    drag_target: Option<PickTarget>,
    /// Letztes Export-Ergebnis, gültig bis zur nächsten Mutation
    sample_set: Option<SampleSet>,
}

impl EditorSession {
    /// Erstellt eine Session aus validierten Optionen.
    ///
    /// Abgelehnt werden weniger als 2 Anker-Offsets, `x_max <= 0` und
    /// `x_max <= x_min` — alles Konfigurationen, mit denen später kein
    /// Gitter abgeleitet werden könnte.
    pub fn new(options: EditorOptions) -> Result<Self, CurveError> {
        if options.anchor_offsets.len() < 2 {
            return Err(CurveError::InvalidConfiguration(format!(
                "mindestens 2 Anker-Offsets erforderlich (gegeben: {})",
                options.anchor_offsets.len()
            )));
        }
        if options.x_max <= 0.0 {
            return Err(CurveError::InvalidConfiguration(format!(
                "x_max muss > 0 sein (gegeben: {})",
                options.x_max
            )));
        }
        if options.x_max <= options.x_min {
            return Err(CurveError::InvalidConfiguration(format!(
                "x_max ({}) muss > x_min ({}) sein",
                options.x_max, options.x_min
            )));
        }

        let chain = CurveChain::from_offsets(options.origin, &options.anchor_offsets)?;
        log::info!(
            "Session gestartet: {} Anker, Domäne [{}, {}]",
            chain.anchors().len(),
            options.x_min,
            options.x_max
        );

        Ok(Self {
            chain,
            options,
            drag_target: None,
            sample_set: None,
        })
    }

    /// Startet eine Session mit den Standard-Optionen.
    pub fn with_defaults() -> Result<Self, CurveError> {
        Self::new(EditorOptions::default())
    }

    // ── Interaktion ─────────────────────────────────────────────────

    /// Pointer gedrückt: Hit-Test und Drag-Start.
    ///
    /// Gibt das getroffene Ziel zurück; kein Treffer beendet einen noch
    /// aktiven Drag.
    pub fn pointer_pressed(&mut self, pos: glam::Vec2) -> Option<PickTarget> {
        self.drag_target = pick::pick_target(&self.chain, pos, self.options.pick_radius);
        if let Some(target) = self.drag_target {
            log::debug!("Drag-Start: {:?} bei ({}, {})", target, pos.x, pos.y);
        }
        self.drag_target
    }

    /// Pointer bewegt: laufenden Drag auf die neue Position umsetzen.
    ///
    /// Ohne aktives Ziel ist der Aufruf ein No-op.
    pub fn pointer_dragged(&mut self, pos: glam::Vec2) -> Result<(), CurveError> {
        let Some(target) = self.drag_target else {
            return Ok(());
        };

        match target {
            PickTarget::Anchor(index) => self.chain.move_anchor(index, pos)?,
            PickTarget::Handle(index) => self.chain.move_handle(index, pos)?,
        }
        self.invalidate_samples();
        Ok(())
    }

    /// Pointer losgelassen: beendet einen laufenden Drag.
    pub fn pointer_released(&mut self) {
        if let Some(target) = self.drag_target.take() {
            log::debug!("Drag-Ende: {:?}", target);
        }
    }

    // ── Mutationen außerhalb des Drags ──────────────────────────────

    /// Ersetzt die Anker-Offsets und baut die Kette neu auf.
    ///
    /// Bei ungültigen Offsets bleiben Kette und Optionen unverändert.
    pub fn replace_anchor_offsets(&mut self, offsets: Vec<glam::Vec2>) -> Result<(), CurveError> {
        let anchors = crate::core::anchors_from_offsets(self.options.origin, &offsets);
        self.chain.set_anchors(anchors)?;
        self.options.anchor_offsets = offsets;
        self.drag_target = None;
        self.invalidate_samples();
        Ok(())
    }

    /// Ändert die horizontale Domäne.
    pub fn set_domain(&mut self, x_min: f32, x_max: f32) -> Result<(), CurveError> {
        if x_max <= 0.0 || x_max <= x_min {
            return Err(CurveError::InvalidConfiguration(format!(
                "ungültige Domäne [{}, {}]",
                x_min, x_max
            )));
        }
        self.options.x_min = x_min;
        self.options.x_max = x_max;
        self.invalidate_samples();
        Ok(())
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Exportiert die Kette als gefilterte Lookup-Tabelle.
    ///
    /// Das Ergebnis wird gecacht; solange keine Mutation dazwischenkommt,
    /// berechnet ein erneuter Export nichts neu.
    pub fn export(&mut self) -> Result<&SampleSet, CurveError> {
        let set = match self.sample_set.take() {
            Some(set) => set,
            None => sampler::sweep_and_export(
                &self.chain,
                self.options.x_min,
                self.options.x_max,
                self.options.sweep_resolution,
                self.options.filter_accuracy_x,
                self.options.filter_accuracy_y,
            )?,
        };
        Ok(self.sample_set.insert(set))
    }

    /// Verwirft den Sample-Cache.
    fn invalidate_samples(&mut self) {
        self.sample_set = None;
    }

    // ── Sichten ─────────────────────────────────────────────────────

    /// Read-only Sicht auf die Kurvenkette.
    pub fn chain(&self) -> &CurveChain {
        &self.chain
    }

    /// Read-only Sicht auf die Optionen.
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Aktives Drag-Ziel, falls ein Drag läuft.
    pub fn drag_target(&self) -> Option<PickTarget> {
        self.drag_target
    }

    /// Gecachtes Export-Ergebnis, falls seit dem letzten Export nichts
    /// mutiert wurde.
    pub fn cached_samples(&self) -> Option<&SampleSet> {
        self.sample_set.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn session() -> EditorSession {
        EditorSession::with_defaults().expect("Session erwartet")
    }

    #[test]
    fn test_session_lehnt_zu_wenige_offsets_ab() {
        let mut opts = EditorOptions::default();
        opts.anchor_offsets.truncate(1);
        let result = EditorSession::new(opts);
        assert!(matches!(result, Err(CurveError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_session_lehnt_x_max_null_ab() {
        let mut opts = EditorOptions::default();
        opts.x_min = -10.0;
        opts.x_max = 0.0;
        let result = EditorSession::new(opts);
        assert!(matches!(result, Err(CurveError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_session_lehnt_vertauschte_domaene_ab() {
        let mut opts = EditorOptions::default();
        opts.x_min = 100.0;
        opts.x_max = 50.0;
        let result = EditorSession::new(opts);
        assert!(matches!(result, Err(CurveError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_drag_ohne_treffer_ist_noop() {
        let mut session = session();
        let anchors_before = session.chain().anchors().to_vec();

        assert_eq!(session.pointer_pressed(Vec2::new(400.0, 100.0)), None);
        session
            .pointer_dragged(Vec2::new(500.0, 200.0))
            .expect("No-op erwartet");

        assert_eq!(session.chain().anchors(), anchors_before.as_slice());
    }

    #[test]
    fn test_drag_verschiebt_anker() {
        let mut session = session();
        // Erster Anker liegt default bei (100, 700)
        let hit = session.pointer_pressed(Vec2::new(102.0, 698.0));
        assert_eq!(hit, Some(PickTarget::Anchor(0)));

        session
            .pointer_dragged(Vec2::new(120.0, 680.0))
            .expect("Drag erwartet");
        session.pointer_released();

        assert_eq!(session.chain().anchors()[0], Vec2::new(120.0, 680.0));
        assert_eq!(session.drag_target(), None);
    }

    #[test]
    fn test_drag_nach_release_bewegt_nichts() {
        let mut session = session();
        session.pointer_pressed(Vec2::new(100.0, 700.0));
        session.pointer_released();

        let anchors_before = session.chain().anchors().to_vec();
        session
            .pointer_dragged(Vec2::new(300.0, 300.0))
            .expect("No-op erwartet");
        assert_eq!(session.chain().anchors(), anchors_before.as_slice());
    }

    #[test]
    fn test_export_wird_gecacht() {
        let mut session = session();
        let first = session.export().expect("Export erwartet").clone();
        assert!(session.cached_samples().is_some());

        let second = session.export().expect("Export erwartet").clone();
        assert_eq!(first, second);
    }

    #[test]
    fn test_mutation_verwirft_den_cache() {
        let mut session = session();
        session.export().expect("Export erwartet");
        assert!(session.cached_samples().is_some());

        session.pointer_pressed(Vec2::new(100.0, 700.0));
        session
            .pointer_dragged(Vec2::new(110.0, 690.0))
            .expect("Drag erwartet");

        assert!(session.cached_samples().is_none());
    }

    #[test]
    fn test_domaenenwechsel_verwirft_den_cache() {
        let mut session = session();
        session.export().expect("Export erwartet");

        session.set_domain(0.0, 50.0).expect("Domäne erwartet");
        assert!(session.cached_samples().is_none());
        assert_eq!(session.options().x_max, 50.0);
    }

    #[test]
    fn test_replace_anchor_offsets_baut_kette_neu() {
        let mut session = session();
        session
            .replace_anchor_offsets(vec![
                Vec2::new(0.0, 300.0),
                Vec2::new(300.0, 450.0),
                Vec2::new(600.0, 600.0),
            ])
            .expect("Offsets erwartet");

        assert_eq!(session.chain().anchors().len(), 3);
        assert_eq!(session.chain().handles().len(), 4);
    }

    #[test]
    fn test_replace_mit_ungueltigen_offsets_laesst_session_unveraendert() {
        let mut session = session();
        let anchors_before = session.chain().anchors().to_vec();
        let offsets_before = session.options().anchor_offsets.clone();

        let result = session.replace_anchor_offsets(vec![Vec2::ZERO]);
        assert!(matches!(result, Err(CurveError::InvalidConfiguration(_))));
        assert_eq!(session.chain().anchors(), anchors_before.as_slice());
        assert_eq!(session.options().anchor_offsets, offsets_before);
    }

    #[test]
    fn test_ungueltige_domaene_wird_abgelehnt() {
        let mut session = session();
        assert!(session.set_domain(50.0, 50.0).is_err());
        assert!(session.set_domain(0.0, -10.0).is_err());
        // Optionen unverändert
        assert_eq!(session.options().x_max, 100.0);
    }
}

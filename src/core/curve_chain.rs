//! Die zentrale Kurvenketten-Datenstruktur mit Ankern, Handles und
//! abgeleiteter Segment-Liste.
//!
//! Invarianten:
//! - `handles.len() == 2 * (anchors.len() - 1)` zu jedem Zeitpunkt.
//! - Segment k verläuft immer von Anker k nach Anker k+1.
//! - An jedem inneren Anker sind Exit-Handle des Vorgänger-Segments und
//!   Entry-Handle des Folge-Segments Punktspiegelungen voneinander
//!   (Tangenten-Stetigkeit). Die Spiegelung pflegt `continuity`.

use super::continuity;
use super::error::CurveError;
use super::segment::{Segment, SegmentPoints};
use crate::shared::options;
use glam::Vec2;

/// Rechnet Anker-Offsets (logische y-Achse nach oben) in Screen-Anker um.
pub fn anchors_from_offsets(origin: Vec2, offsets: &[Vec2]) -> Vec<Vec2> {
    offsets
        .iter()
        .map(|off| Vec2::new(origin.x + off.x, origin.y - off.y))
        .collect()
}

/// Kette verbundener kubischer Bézier-Segmente mit gemeinsamen Endpunkten.
#[derive(Debug, Clone)]
pub struct CurveChain {
    /// Anker, durch die die Kette exakt verläuft (Index = Identität)
    anchors: Vec<Vec2>,
    /// Flache Handle-Liste: `2k` = Entry von Segment k, `2k+1` = Exit
    pub(crate) handles: Vec<Vec2>,
    /// Abgeleitete Segment-Sichten, bei Strukturänderung neu aufgebaut
    segments: Vec<Segment>,
}

impl CurveChain {
    /// Erstellt eine Kette aus absoluten Anker-Positionen.
    pub fn new(anchors: Vec<Vec2>) -> Result<Self, CurveError> {
        let mut chain = Self {
            anchors: Vec::new(),
            handles: Vec::new(),
            segments: Vec::new(),
        };
        chain.set_anchors(anchors)?;
        Ok(chain)
    }

    /// Erstellt eine Kette aus Offsets relativ zu `origin`.
    pub fn from_offsets(origin: Vec2, offsets: &[Vec2]) -> Result<Self, CurveError> {
        Self::new(anchors_from_offsets(origin, offsets))
    }

    /// Ersetzt die Anker-Sequenz vollständig und platziert alle Handles neu.
    ///
    /// Bei weniger als 2 Ankern wird der Aufruf abgelehnt und der
    /// vorherige Zustand bleibt unverändert.
    pub fn set_anchors(&mut self, anchors: Vec<Vec2>) -> Result<(), CurveError> {
        if anchors.len() < 2 {
            return Err(CurveError::InvalidConfiguration(format!(
                "mindestens 2 Ankerpunkte erforderlich (gegeben: {})",
                anchors.len()
            )));
        }

        self.anchors = anchors;
        self.seed_handles();
        self.rebuild_segments();
        Ok(())
    }

    /// Platziert alle Handles initial.
    ///
    /// Die ersten beiden Handles liegen auf festen Seed-Positionen. Jedes
    /// spätere Entry-Handle (gerader Index) setzt die Tangente des
    /// Vorgänger-Segments fort: End-Anker plus Tangentenvektor bei t=1 —
    /// das ist genau die Punktspiegelung des vorherigen Exit-Handles am
    /// gemeinsamen Anker. Ungerade Handles starten auf dem Platzhalter-Seed.
    /// Die Spiegelungs-Invariante gilt damit ab Konstruktion.
    fn seed_handles(&mut self) {
        let handle_count = 2 * (self.anchors.len() - 1);
        self.handles.clear();
        self.handles.reserve(handle_count);

        for i in 0..handle_count {
            let position = if i < 2 {
                options::SEED_HANDLE + i as f32 * options::SEED_HANDLE_STEP
            } else if i % 2 == 0 {
                // Entry-Handle von Segment k: Endpunkt-Geometrie des
                // Vorgänger-Segments bei t=1 fortsetzen
                let k = i / 2;
                let previous = SegmentPoints {
                    start: self.anchors[k - 1],
                    entry: self.handles[i - 2],
                    exit: self.handles[i - 1],
                    end: self.anchors[k],
                };
                self.anchors[k] + previous.derivative_at(1.0)
            } else {
                options::SEED_HANDLE
            };
            self.handles.push(position);
        }
    }

    /// Baut die abgeleiteten Segment-Sichten neu auf.
    fn rebuild_segments(&mut self) {
        self.segments = (0..self.anchors.len() - 1).map(Segment::new).collect();
    }

    /// Verschiebt einen Anker und lässt die angrenzenden Handles mitfahren.
    ///
    /// Die Handles werden nicht geometrisch neu berechnet, sondern um das
    /// gleiche Delta verschoben — die Spiegelungs-Invariante an diesem
    /// Anker bleibt dadurch automatisch erhalten (ein Endpunkt-Anker hat
    /// ein angrenzendes Handle, ein innerer Anker zwei).
    pub fn move_anchor(&mut self, index: usize, new_position: Vec2) -> Result<(), CurveError> {
        let Some(anchor) = self.anchors.get_mut(index) else {
            return Err(CurveError::IndexOutOfRange {
                index,
                len: self.anchors.len(),
            });
        };

        let delta = new_position - *anchor;
        *anchor = new_position;

        let last = self.anchors.len() - 1;
        if index == 0 {
            self.handles[0] += delta;
        } else if index == last {
            self.handles[2 * index - 1] += delta;
        } else {
            self.handles[2 * index - 1] += delta;
            self.handles[2 * index] += delta;
        }

        // Segmente sind Index-Sichten — die Struktur ändert sich nicht,
        // nur die referenzierten Punkte
        Ok(())
    }

    /// Verschiebt ein Handle und spiegelt das Partner-Handle am
    /// gemeinsamen inneren Anker (siehe `continuity`).
    pub fn move_handle(&mut self, index: usize, new_position: Vec2) -> Result<(), CurveError> {
        if index >= self.handles.len() {
            return Err(CurveError::IndexOutOfRange {
                index,
                len: self.handles.len(),
            });
        }

        self.handles[index] = new_position;
        continuity::sync_paired_handle(self, index);
        Ok(())
    }

    /// Read-only Sicht auf die Anker.
    pub fn anchors(&self) -> &[Vec2] {
        &self.anchors
    }

    /// Read-only Sicht auf die flache Handle-Liste.
    pub fn handles(&self) -> &[Vec2] {
        &self.handles
    }

    /// Read-only Sicht auf die abgeleiteten Segmente (Länge N−1).
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Löst die Punktsicht eines Segments gegen den aktuellen Zustand auf.
    pub fn segment_points(&self, segment: Segment) -> SegmentPoints {
        SegmentPoints {
            start: self.anchors[segment.start_anchor],
            entry: self.handles[segment.entry_handle],
            exit: self.handles[segment.exit_handle],
            end: self.anchors[segment.end_anchor],
        }
    }

    /// Horizontale Spanne zwischen erstem und letztem Anker (vorzeichenbehaftet).
    pub fn anchor_span_x(&self) -> f32 {
        let first = self.anchors[0];
        let last = self.anchors[self.anchors.len() - 1];
        last.x - first.x
    }

    /// Kurvenposition für den globalen Fortschritt p ∈ [0, 1] über die
    /// gesamte Kette: alle Segmente zählen als ein zusammenhängender
    /// Parameterbereich mit gleichmäßiger Segment-Gewichtung.
    pub fn point_at_progress(&self, progress: f32) -> Vec2 {
        let segment_count = self.segments.len();
        let u = progress.clamp(0.0, 1.0) * segment_count as f32;
        let k = (u as usize).min(segment_count - 1);
        let t = u - k as f32;
        self.segment_points(self.segments[k]).point_at(t)
    }
}

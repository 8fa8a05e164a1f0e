//! Abgeleitete Segment-Sicht auf die Kurvenkette.
//!
//! Segmente besitzen keine eigenen Punktdaten: sie referenzieren Anker
//! und Handles über Indizes in die besitzende `CurveChain`. Spätere
//! Punkt-Mutationen sind dadurch ohne Kopien durch das Segment sichtbar.

use crate::shared::bezier_geometry::{cubic_derivative, cubic_point};
use glam::Vec2;

/// Index-Sicht auf ein kubisches Bézier-Segment zwischen zwei Ankern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Index des Start-Ankers (Segment k → Anker k)
    pub start_anchor: usize,
    /// Index des End-Ankers (immer `start_anchor + 1`)
    pub end_anchor: usize,
    /// Index des Entry-Handles im flachen Handle-Vektor (`2k`)
    pub entry_handle: usize,
    /// Index des Exit-Handles im flachen Handle-Vektor (`2k + 1`)
    pub exit_handle: usize,
}

impl Segment {
    /// Erstellt die Index-Sicht für Segment `k`.
    pub fn new(k: usize) -> Self {
        Self {
            start_anchor: k,
            end_anchor: k + 1,
            entry_handle: 2 * k,
            exit_handle: 2 * k + 1,
        }
    }

    /// Segment-Nummer in der Kette.
    pub fn index(&self) -> usize {
        self.start_anchor
    }
}

/// Aufgelöste Punktsicht eines Segments — die vier Punkte, die der
/// Evaluator benötigt. Snapshot zum Zeitpunkt der Auflösung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPoints {
    /// Start-Anker P0
    pub start: Vec2,
    /// Entry-Handle C0
    pub entry: Vec2,
    /// Exit-Handle C1
    pub exit: Vec2,
    /// End-Anker P1
    pub end: Vec2,
}

impl SegmentPoints {
    /// Kurvenposition bei lokalem Parameter t ∈ [0, 1].
    pub fn point_at(&self, t: f32) -> Vec2 {
        cubic_point(self.start, self.entry, self.exit, self.end, t)
    }

    /// Tangentenvektor bei lokalem Parameter t ∈ [0, 1].
    pub fn derivative_at(&self, t: f32) -> Vec2 {
        cubic_derivative(self.start, self.entry, self.exit, self.end, t)
    }
}

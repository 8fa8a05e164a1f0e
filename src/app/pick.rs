//! Hit-Testing von Pointer-Positionen gegen Anker und Handles.

use crate::core::CurveChain;
use glam::Vec2;

/// Ziel eines Picks bzw. laufenden Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// Kontroll-Handle mit flachem Index
    Handle(usize),
    /// Anker mit Index in der Anker-Sequenz
    Anchor(usize),
}

/// Findet das nächstgelegene Ziel innerhalb von `radius` um `pos`.
///
/// Handles werden vor den Ankern einsortiert und gewinnen dadurch bei
/// Distanz-Gleichstand (stabile Sortierung). Kein Treffer ist der
/// normale Fall und kein Fehler.
pub fn pick_target(chain: &CurveChain, pos: Vec2, radius: f32) -> Option<PickTarget> {
    if radius <= 0.0 {
        return None;
    }

    let mut candidates: Vec<(PickTarget, f32)> =
        Vec::with_capacity(chain.handles().len() + chain.anchors().len());

    for (i, handle) in chain.handles().iter().enumerate() {
        candidates.push((PickTarget::Handle(i), handle.distance(pos)));
    }
    for (i, anchor) in chain.anchors().iter().enumerate() {
        candidates.push((PickTarget::Anchor(i), anchor.distance(pos)));
    }

    candidates.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
        .first()
        .filter(|(_, distance)| *distance <= radius)
        .map(|(target, _)| *target)
}

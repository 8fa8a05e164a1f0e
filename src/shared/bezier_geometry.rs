//! Reine Geometrie-Funktionen für kubische Bézier-Segmente.
//!
//! Layer-neutral: kann von `core` und `app` importiert werden ohne
//! Zirkel-Abhängigkeiten zu erzeugen. Alle Funktionen sind zustandslos.

use glam::Vec2;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·C0 + 3(1-t)t²·C1 + t³·P1
///
/// Definiert für t ∈ [0, 1]; Aufrufer müssen t klemmen.
pub fn cubic_point(p0: Vec2, c0: Vec2, c1: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    inv2 * inv * p0 + 3.0 * inv2 * t * c0 + 3.0 * inv * t2 * c1 + t2 * t * p1
}

/// Tangentenvektor B'(t) = (1-t)²·(C0-P0) + 2t(1-t)·(C1-C0) + t²·(P1-C1)
///
/// Quadratische Bézier-Form ohne den konstanten Faktor 3 — für die
/// Handle-Fortsetzung zählt nur die Richtung und das Betragsverhältnis
/// der Kontrollpunkt-Abstände, nicht die parametrische Geschwindigkeit.
pub fn cubic_derivative(p0: Vec2, c0: Vec2, c1: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    inv * inv * (c0 - p0) + 2.0 * t * inv * (c1 - c0) + t * t * (p1 - c1)
}

/// Punktspiegelung von `point` an `axis`: `axis + (axis - point)`.
///
/// Spiegelt den Versatz eines Handles am gemeinsamen Anker auf die
/// Gegenseite — Richtung *und* Betrag bleiben erhalten (symmetrische,
/// nicht nur kollineare Fortsetzung).
pub fn reflect_point(point: Vec2, axis: Vec2) -> Vec2 {
    axis + (axis - point)
}

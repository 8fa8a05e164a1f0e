//! Sampling und Export der Kurvenkette als Lookup-Tabelle.
//!
//! Der Sweep evaluiert die gesamte Kette in gleichmäßigen Parameterschritten
//! und behält pro gequerter Gitterlinie genau ein Sample. Ein anschließender
//! Filterlauf entfernt aufeinanderfolgende Samples im gleichen horizontalen
//! Rundungs-Bucket. Synchron und ohne Abbruchpunkte: der Sweep läuft entweder
//! vollständig durch oder wird gar nicht gestartet.

use super::curve_chain::CurveChain;
use super::error::CurveError;
use serde::{Deserialize, Serialize};

/// Ein exportierter Kurvenpunkt (Screen-Koordinaten).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Horizontale Position
    pub x: f32,
    /// Vertikale Position
    pub y: f32,
}

/// Geordnete, gefilterte Liste exportierter Kurvenpunkte.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    /// Punkte in Sweep-Reihenfolge
    pub points: Vec<CurvePoint>,
}

impl SampleSet {
    /// Anzahl der exportierten Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Prüft ob die Menge leer ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Gitter-Parameter des Sweeps, abgeleitet aus Kette und Domäne.
#[derive(Debug, Clone, Copy)]
struct SweepGrid {
    /// Horizontale Position der ersten Gitterlinie (erster Anker)
    first_x: f32,
    /// Vorzeichenbehafteter Abstand zwischen zwei Gitterlinien
    step: f32,
    /// Index der letzten Gitterlinie
    last_line: i64,
}

impl SweepGrid {
    /// Leitet das Gitter ab: `step = round(span / (x_max − x_min))`.
    ///
    /// Die Spanne ist vorzeichenbehaftet (letzter Anker kann links vom
    /// ersten liegen); ein Schritt der auf 0 rundet oder nicht endlich
    /// ist, wird als degenerierte Domäne abgelehnt, bevor eine Schleife
    /// läuft.
    fn derive(chain: &CurveChain, x_min: f32, x_max: f32) -> Result<Self, CurveError> {
        let span = chain.anchor_span_x();
        let domain = x_max - x_min;
        let step = (span / domain).round();

        if !step.is_finite() || step.abs() < 1.0 {
            return Err(CurveError::DegenerateDomain { span, domain });
        }

        Ok(Self {
            first_x: chain.anchors()[0].x,
            step,
            last_line: (span / step).round() as i64,
        })
    }

    /// Gitterlinien-Index, auf dem die gerundete x-Koordinate exakt liegt.
    fn line_for(&self, x: f32) -> Option<i64> {
        let rounded = x.round();
        let k = ((rounded - self.first_x) / self.step).round();
        let line = k as i64;
        if line >= 0 && line <= self.last_line && self.first_x + self.step * k == rounded {
            Some(line)
        } else {
            None
        }
    }
}

/// Parametrischer Sweep über die gesamte Kette (ungefiltert).
///
/// Behält pro Gitterlinien-Querung genau ein Sample in Sweep-Reihenfolge.
/// Verlässt die Kurve den Rundungsbereich einer Linie und kehrt später
/// zurück, zählt das als neue Querung. Deterministisch: ein erneuter
/// Sweep über den gleichen Kettenzustand liefert die gleiche Sequenz.
pub fn sweep_chain(
    chain: &CurveChain,
    x_min: f32,
    x_max: f32,
    resolution: usize,
) -> Result<Vec<CurvePoint>, CurveError> {
    let grid = SweepGrid::derive(chain, x_min, x_max)?;
    let resolution = resolution.max(1);

    let mut points = Vec::with_capacity((grid.last_line.unsigned_abs() as usize) + 1);
    let mut current_line: Option<i64> = None;

    for i in 0..=resolution {
        let progress = i as f32 / resolution as f32;
        let p = chain.point_at_progress(progress);

        match grid.line_for(p.x) {
            Some(line) => {
                if current_line != Some(line) {
                    points.push(CurvePoint { x: p.x, y: p.y });
                    current_line = Some(line);
                }
            }
            None => {
                // Zwischen den Linien: die nächste Landung zählt wieder
                current_line = None;
            }
        }
    }

    Ok(points)
}

/// Entfernt aufeinanderfolgende Samples im gleichen horizontalen Bucket.
///
/// Für jeden inneren Index i (nicht erster, nicht letzter) wird das
/// Folgesample i+1 zum Löschen vorgemerkt, wenn beide auf den gleichen
/// horizontalen Bucket runden. Gelöscht wird in einem einzigen Lauf von
/// hinten, damit die vorgemerkten Indizes gültig bleiben.
pub fn filter_consecutive_duplicates(
    points: &mut Vec<CurvePoint>,
    accuracy_x: f32,
    accuracy_y: f32,
) {
    let bucket_x = |p: &CurvePoint| (p.x * accuracy_x).round() / accuracy_x;
    let mut to_delete = Vec::new();

    for i in 1..points.len().saturating_sub(1) {
        if bucket_x(&points[i]) == bucket_x(&points[i + 1]) {
            log::trace!(
                "Filter: Sample {} entfällt (x-Bucket {}, y ≈ {})",
                i + 1,
                bucket_x(&points[i + 1]),
                (points[i + 1].y * accuracy_y).round() / accuracy_y
            );
            to_delete.push(i + 1);
        }
    }

    for &index in to_delete.iter().rev() {
        points.remove(index);
    }
}

/// Vollständiger Export: Sweep plus Filterlauf.
pub fn sweep_and_export(
    chain: &CurveChain,
    x_min: f32,
    x_max: f32,
    resolution: usize,
    accuracy_x: f32,
    accuracy_y: f32,
) -> Result<SampleSet, CurveError> {
    let mut points = sweep_chain(chain, x_min, x_max, resolution)?;
    let raw_count = points.len();

    filter_consecutive_duplicates(&mut points, accuracy_x, accuracy_y);
    log::debug!(
        "Sweep: {} Samples, {} nach Filterung",
        raw_count,
        points.len()
    );

    Ok(SampleSet { points })
}

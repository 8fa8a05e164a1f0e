//! Tangenten-Stetigkeit an inneren Ankern.
//!
//! Nach jeder Handle-Verschiebung wird genau das eine Partner-Handle auf
//! der Gegenseite des berührten Ankers als Punktspiegelung nachgezogen.
//! Es gibt keine Kaskade: ein Drag wirkt sichtbar nur auf die beiden
//! Segmente, die sich den Anker teilen.

use super::curve_chain::CurveChain;
use crate::shared::bezier_geometry::reflect_point;

/// Spiegelt das Partner-Handle des soeben bewegten Handles.
///
/// Zuordnung über den flachen Index `h`: Segment `k = h / 2`, gerade
/// Indizes sind Entry-, ungerade Exit-Handles.
/// - Exit-Handle von Segment k → Partner ist das Entry-Handle von
///   Segment k+1, gespiegelt an `anchors[k+1]` (falls k+1 existiert).
/// - Entry-Handle von Segment k → Partner ist das Exit-Handle von
///   Segment k−1, gespiegelt an `anchors[k]` (falls k > 0).
/// - Endpunkt-Handles haben keinen Partner und bleiben unberührt.
///
/// Gibt den Index des geschriebenen Partner-Handles zurück, falls einer
/// existiert. Da Segmente Index-Sichten auf die flache Handle-Liste sind,
/// ist der neue Wert ohne zweiten Schreibvorgang durch beide Segmente
/// sichtbar.
pub fn sync_paired_handle(chain: &mut CurveChain, moved_handle: usize) -> Option<usize> {
    let segment_count = chain.segments().len();
    let k = moved_handle / 2;
    let is_exit = moved_handle % 2 == 1;

    if is_exit {
        if k + 1 >= segment_count {
            return None;
        }
        let shared_anchor = chain.anchors()[k + 1];
        chain.handles[moved_handle + 1] = reflect_point(chain.handles[moved_handle], shared_anchor);
        Some(moved_handle + 1)
    } else {
        if k == 0 {
            return None;
        }
        let shared_anchor = chain.anchors()[k];
        chain.handles[moved_handle - 1] = reflect_point(chain.handles[moved_handle], shared_anchor);
        Some(moved_handle - 1)
    }
}

//! Core-Domänentypen: Kurvenkette, Segmente, Stetigkeit, Sampling.
//!
//! Dieses Modul definiert die Haupt-Datenstrukturen:
//! - CurveChain: Container für Anker, Handles und abgeleitete Segmente
//! - Segment/SegmentPoints: Index-Sicht und aufgelöste Punktsicht
//! - Sampler: Sweep, Gitter-Retention und Duplikat-Filter

pub mod continuity;
pub mod curve_chain;
pub mod error;
pub mod sampler;
pub mod segment;

pub use curve_chain::{anchors_from_offsets, CurveChain};
pub use error::CurveError;
pub use sampler::{filter_consecutive_duplicates, sweep_and_export, sweep_chain};
pub use sampler::{CurvePoint, SampleSet};
pub use segment::{Segment, SegmentPoints};

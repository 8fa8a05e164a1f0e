//! Bezier-LUT-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{EditorIntent, EditorSession, PickTarget, SessionController};
pub use core::{
    anchors_from_offsets, sweep_and_export, sweep_chain, CurveChain, CurveError, CurvePoint,
    SampleSet, Segment, SegmentPoints,
};
pub use shared::EditorOptions;

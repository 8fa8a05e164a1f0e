//! Layer-übergreifende Module: Geometrie und Konfiguration.

pub mod bezier_geometry;
pub mod options;

pub use options::EditorOptions;

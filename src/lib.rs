//! Inspection tools for train-sim scene snapshots.
//!
//! A snapshot is a captured image of the engine's live object graph. The
//! [`scene`] module reads and models it; the [`dump`] module turns parts of
//! it into JSON report documents through a depth-bounded reflective
//! serializer.

/// Dump engine: reflective serializer, special-case encoders, hierarchy
/// dumpers, and the report file writer.
pub mod dump;
/// Scene snapshot model: container format, dynamic field values, and the
/// engine-object arena.
pub mod scene;

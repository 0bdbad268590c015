mod curve;
mod hierarchy;
mod report;
mod serialize;
mod special;

/// Curve evaluation, resampling, and constants.
pub use curve::{CURVE_SAMPLES, Keyframe, SAMPLES_SUPPRESSED, evaluate, resample};
/// Structure and collider tree dumpers.
pub use hierarchy::{COLLIDER_TYPES, dump_collider_tree, dump_structure};
/// Report file writer.
pub use report::{report_path, write_report};
/// Reflective serializer entry points and options.
pub use serialize::{DEPTH_LIMIT_SENTINEL, DumpOptions, serialize, serialize_engine_object, serialize_object};

mod compression;
mod error;
mod object;
mod parse;
mod snapshot;
mod value;

/// Compression detection result and zstd frame magic.
pub use compression::{Compression, ZSTD_MAGIC, decode_bytes};
/// Error and result aliases.
pub use error::{Result, SceneError};
/// Captured engine object record.
pub use object::EngineObject;
/// Snapshot container and queries.
pub use snapshot::{FORMAT_VERSION, Snapshot};
/// Dynamic field value types.
pub use value::{DataValue, EnumValue, FieldValue, ObjectId, Value, find_field};

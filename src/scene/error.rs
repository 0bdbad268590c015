use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors produced while reading, parsing, and querying scene snapshots.
#[derive(Debug, Error)]
pub enum SceneError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input is neither a JSON snapshot nor a zstd frame.
	#[error("not a scene snapshot (magic={magic:?})")]
	UnknownMagic {
		/// First up-to-4 bytes of the stream.
		magic: [u8; 4],
	},
	/// Decompressed stream did not contain a JSON snapshot.
	#[error("decompressed data is not a JSON snapshot")]
	NotSnapshotAfterDecompress,
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Snapshot envelope was not valid JSON of the expected shape.
	#[error("snapshot json: {0}")]
	Json(#[from] serde_json::Error),
	/// Unsupported snapshot container version.
	#[error("unsupported snapshot format version {version} (expected 1)")]
	UnsupportedFormatVersion {
		/// Parsed format version.
		version: u32,
	},
	/// Two object entries declared the same id.
	#[error("duplicate object id {id}")]
	DuplicateObjectId {
		/// Offending object id.
		id: u32,
	},
	/// A child or component id did not resolve to any object entry.
	#[error("object {parent} lists unresolved {kind} id {id}")]
	UnresolvedLink {
		/// Link kind being validated.
		kind: &'static str,
		/// Declaring object id.
		parent: u32,
		/// Offending target id.
		id: u32,
	},
	/// A root id did not resolve to any object entry.
	#[error("unresolved root id {id}")]
	UnresolvedRoot {
		/// Offending root id.
		id: u32,
	},
	/// A captured field value did not match any recognized encoding.
	#[error("field {path}: expected {expected}")]
	BadFieldValue {
		/// Dotted path to the offending value.
		path: String,
		/// Description of the accepted encodings.
		expected: &'static str,
	},
	/// No object with the requested name exists in the snapshot.
	#[error("no object named \"{name}\" in snapshot")]
	ObjectNotFound {
		/// Requested object name.
		name: String,
	},
	/// An expected singleton object type is absent from the snapshot.
	#[error("no object of type {type_name} in snapshot")]
	SingletonNotFound {
		/// Requested runtime type name.
		type_name: &'static str,
	},
	/// No car livery with the requested id exists in the catalog.
	#[error("couldn't find car type \"{id}\"")]
	CarNotFound {
		/// Requested livery id.
		id: String,
	},
	/// No car id was given and the player was not on a car.
	#[error("player is not on a car and no car id was given")]
	NoCarSelected,
	/// A car livery references a prefab that is absent from the snapshot.
	#[error("car type {car} has missing prefab")]
	MissingPrefab {
		/// Livery id of the offending car.
		car: String,
	},
}

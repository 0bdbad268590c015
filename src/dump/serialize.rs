use serde_json::{Map, Value as Json};

use crate::dump::special;
use crate::scene::{DataValue, EngineObject, FieldValue, ObjectId, Snapshot, Value};

/// Sentinel scalar emitted when the depth budget is exhausted.
pub const DEPTH_LIMIT_SENTINEL: &str = "Depth limit reached";

/// Behavior switches threaded through one dump traversal.
#[derive(Debug, Clone)]
pub struct DumpOptions {
	/// Evaluate animation curves into resampled point lists. Disabled, a
	/// placeholder string is emitted instead, skipping the per-curve
	/// evaluation cost.
	pub evaluate_curves: bool,
}

impl Default for DumpOptions {
	fn default() -> Self {
		Self { evaluate_curves: true }
	}
}

/// Serialize one captured value into a JSON document tree.
///
/// Total over any input: malformed, dangling, or destroyed data degrades to
/// `null` or a sentinel string at the point of failure, never an error. The
/// depth budget alone bounds recursion; cyclic references terminate through
/// it.
pub fn serialize(snapshot: &Snapshot, value: &Value, depth: i32, options: &DumpOptions) -> Json {
	match value {
		Value::Null => Json::Null,
		_ if depth <= 0 => Json::from(DEPTH_LIMIT_SENTINEL),
		Value::Bool(value) => Json::from(*value),
		Value::Int(value) => Json::from(*value),
		Value::Float(value) => float_json(*value),
		Value::Str(value) => Json::from(value.as_ref()),
		Value::Enum(item) => Json::from(format!("{} ({})", item.member, item.type_name)),
		Value::List(items) => Json::Array(items.iter().map(|item| serialize(snapshot, item, depth - 1, options)).collect()),
		Value::Data(data) => serialize_data(snapshot, data, depth, options),
		Value::Ref(id) => serialize_object(snapshot, *id, depth, options),
	}
}

/// Serialize the engine object behind a handle.
///
/// A dangling handle logs a warning and yields `null`; a destroyed entry
/// yields the `"Null <type>"` sentinel.
pub fn serialize_object(snapshot: &Snapshot, id: ObjectId, depth: i32, options: &DumpOptions) -> Json {
	let Some(object) = snapshot.get(id) else {
		log::warn!("dangling object reference #{}", id.0);
		return Json::Null;
	};
	serialize_engine_object(snapshot, object, depth, options)
}

/// Serialize one resolved engine object.
pub fn serialize_engine_object(snapshot: &Snapshot, object: &EngineObject, depth: i32, options: &DumpOptions) -> Json {
	if depth <= 0 {
		return Json::from(DEPTH_LIMIT_SENTINEL);
	}

	// A registered special encoding shadows the component wrapper.
	if let Some(encode) = special::encoder_for(&object.type_name) {
		return encode(snapshot, &special::FieldView::from_object(object), depth, options);
	}

	if object.destroyed {
		return Json::from(format!("Null {}", object.type_name));
	}

	let mut map = Map::with_capacity(object.fields.len() + 2);
	map.insert("_componentType".to_owned(), Json::from(object.type_name.as_ref()));
	map.insert("_name".to_owned(), Json::from(object.name.as_ref()));
	append_fields(&mut map, snapshot, &object.fields, depth, options);
	Json::Object(map)
}

fn serialize_data(snapshot: &Snapshot, data: &DataValue, depth: i32, options: &DumpOptions) -> Json {
	if let Some(encode) = special::encoder_for(&data.type_name) {
		return encode(snapshot, &special::FieldView::from_data(data), depth, options);
	}

	let mut map = Map::with_capacity(data.fields.len());
	append_fields(&mut map, snapshot, &data.fields, depth, options);
	Json::Object(map)
}

fn append_fields(map: &mut Map<String, Json>, snapshot: &Snapshot, fields: &[FieldValue], depth: i32, options: &DumpOptions) {
	for field in fields {
		map.insert(field.name.to_string(), serialize(snapshot, &field.value, depth - 1, options));
	}
}

/// Render a float, falling back to its decimal text for non-finite values
/// JSON cannot carry.
pub(crate) fn float_json(value: f64) -> Json {
	match serde_json::Number::from_f64(value) {
		Some(number) => Json::Number(number),
		None => Json::from(value.to_string()),
	}
}

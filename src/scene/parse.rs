use serde::Deserialize;

use crate::scene::value::{DataValue, EnumValue, FieldValue, ObjectId, Value};
use crate::scene::{Result, SceneError};

/// Snapshot envelope as it appears on disk.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSnapshot {
	pub format_version: u32,
	#[serde(default)]
	pub producer: Option<String>,
	#[serde(default)]
	pub roots: Vec<u32>,
	pub objects: Vec<RawObject>,
}

/// One object entry as it appears on disk.
#[derive(Debug, Deserialize)]
pub(crate) struct RawObject {
	pub id: u32,
	#[serde(rename = "type")]
	pub type_name: String,
	pub name: String,
	#[serde(default)]
	pub destroyed: bool,
	#[serde(default)]
	pub layer: Option<String>,
	#[serde(default)]
	pub children: Vec<u32>,
	#[serde(default)]
	pub components: Vec<u32>,
	#[serde(default)]
	pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Convert one on-disk field map into ordered model fields.
pub(crate) fn fields_from_json(map: &serde_json::Map<String, serde_json::Value>, path: &str) -> Result<Vec<FieldValue>> {
	let mut fields = Vec::with_capacity(map.len());
	for (name, raw) in map {
		let value = value_from_json(raw, &format!("{path}.{name}"))?;
		fields.push(FieldValue {
			name: name.clone().into_boxed_str(),
			value,
		});
	}
	Ok(fields)
}

/// Convert one on-disk field value into the model encoding.
pub(crate) fn value_from_json(raw: &serde_json::Value, path: &str) -> Result<Value> {
	match raw {
		serde_json::Value::Null => Ok(Value::Null),
		serde_json::Value::Bool(value) => Ok(Value::Bool(*value)),
		serde_json::Value::Number(number) => number_value(number, path),
		serde_json::Value::String(value) => Ok(Value::Str(value.clone().into_boxed_str())),
		serde_json::Value::Array(items) => {
			let mut list = Vec::with_capacity(items.len());
			for (index, item) in items.iter().enumerate() {
				list.push(value_from_json(item, &format!("{path}[{index}]"))?);
			}
			Ok(Value::List(list))
		}
		serde_json::Value::Object(map) => tagged_value(map, path),
	}
}

fn number_value(number: &serde_json::Number, path: &str) -> Result<Value> {
	if let Some(value) = number.as_i64() {
		return Ok(Value::Int(value));
	}
	number.as_f64().map(Value::Float).ok_or_else(|| SceneError::BadFieldValue {
		path: path.to_owned(),
		expected: "a representable number",
	})
}

fn tagged_value(map: &serde_json::Map<String, serde_json::Value>, path: &str) -> Result<Value> {
	if let Some(target) = map.get("$ref") {
		let id = target.as_u64().and_then(|raw| u32::try_from(raw).ok()).ok_or_else(|| SceneError::BadFieldValue {
			path: path.to_owned(),
			expected: "an object id in $ref",
		})?;
		return Ok(Value::Ref(ObjectId(id)));
	}

	if let Some(payload) = map.get("$enum") {
		return enum_value(payload, path);
	}

	if let Some(tag) = map.get("$data") {
		let type_name = tag.as_str().ok_or_else(|| SceneError::BadFieldValue {
			path: path.to_owned(),
			expected: "a type name string in $data",
		})?;

		let mut fields = Vec::with_capacity(map.len().saturating_sub(1));
		for (name, raw) in map {
			if name == "$data" {
				continue;
			}
			let value = value_from_json(raw, &format!("{path}.{name}"))?;
			fields.push(FieldValue {
				name: name.clone().into_boxed_str(),
				value,
			});
		}

		return Ok(Value::Data(DataValue {
			type_name: type_name.to_owned().into_boxed_str(),
			fields,
		}));
	}

	Err(SceneError::BadFieldValue {
		path: path.to_owned(),
		expected: "a $ref, $enum, or $data tagged object",
	})
}

fn enum_value(payload: &serde_json::Value, path: &str) -> Result<Value> {
	let bad = || SceneError::BadFieldValue {
		path: path.to_owned(),
		expected: "an object with type and member strings in $enum",
	};

	let map = payload.as_object().ok_or_else(bad)?;
	let type_name = map.get("type").and_then(|value| value.as_str()).ok_or_else(bad)?;
	let member = map.get("member").and_then(|value| value.as_str()).ok_or_else(bad)?;

	Ok(Value::Enum(EnumValue {
		type_name: type_name.to_owned().into_boxed_str(),
		member: member.to_owned().into_boxed_str(),
	}))
}

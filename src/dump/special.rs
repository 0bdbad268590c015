use serde_json::{Map, Value as Json};

use crate::dump::curve;
use crate::dump::serialize::{DumpOptions, float_json, serialize};
use crate::scene::{DataValue, EngineObject, FieldValue, Snapshot, Value};

/// Encoder for one registered runtime type.
pub(crate) type Encoder = fn(&Snapshot, &FieldView<'_>, i32, &DumpOptions) -> Json;

/// Registered special-case encoders, looked up by runtime type name before
/// any generic field enumeration. Kept sorted by name.
const ENCODERS: &[(&str, Encoder)] = &[
	("AnimationCurve", curve::encode),
	("AudioClip", audio_clip),
	("AudioPoolReferences", audio_pool_references),
	("AudioSource", audio_source),
	("BoxCollider", box_collider),
	("CapsuleCollider", capsule_collider),
	("CarDamageProperties", car_damage_properties),
	("DrivingForce", driving_force),
	("MeshCollider", mesh_collider),
	("ParticleSystem", particle_system),
	("SphereCollider", sphere_collider),
];

/// Look up the registered encoder for a runtime type name.
pub(crate) fn encoder_for(type_name: &str) -> Option<Encoder> {
	ENCODERS.iter().find(|(name, _)| *name == type_name).map(|(_, encode)| *encode)
}

/// Borrowed view over the named fields of a data record or engine object.
pub(crate) struct FieldView<'a> {
	pub(crate) type_name: &'a str,
	pub(crate) name: Option<&'a str>,
	fields: &'a [FieldValue],
}

impl<'a> FieldView<'a> {
	pub(crate) fn from_data(data: &'a DataValue) -> Self {
		Self {
			type_name: &data.type_name,
			name: None,
			fields: &data.fields,
		}
	}

	pub(crate) fn from_object(object: &'a EngineObject) -> Self {
		Self {
			type_name: &object.type_name,
			name: Some(&object.name),
			fields: &object.fields,
		}
	}

	pub(crate) fn field(&self, name: &str) -> Option<&'a Value> {
		crate::scene::find_field(self.fields, name)
	}

	/// Encode a scalar field, degrading to `null` with a warning when the
	/// field is absent or not scalar.
	pub(crate) fn scalar(&self, name: &str) -> Json {
		match self.field(name) {
			Some(Value::Null) => Json::Null,
			Some(Value::Bool(value)) => Json::from(*value),
			Some(Value::Int(value)) => Json::from(*value),
			Some(Value::Float(value)) => float_json(*value),
			Some(Value::Str(value)) => Json::from(value.as_ref()),
			Some(Value::Enum(item)) => Json::from(format!("{} ({})", item.member, item.type_name)),
			Some(_) => {
				log::warn!("{}.{name} is not a scalar", self.type_name);
				Json::Null
			}
			None => {
				log::warn!("{} has no field {name}", self.type_name);
				Json::Null
			}
		}
	}

	/// Encode a vector field as a comma-joined component string.
	pub(crate) fn vector(&self, name: &str) -> Json {
		let Some(value) = self.field(name) else {
			log::warn!("{} has no field {name}", self.type_name);
			return Json::Null;
		};
		match vector_string(value) {
			Some(text) => Json::from(text),
			None => {
				log::warn!("{}.{name} is not a vector", self.type_name);
				Json::Null
			}
		}
	}

	/// Re-enter the serializer for a structured field.
	fn nested(&self, snapshot: &Snapshot, name: &str, depth: i32, options: &DumpOptions) -> Json {
		let Some(value) = self.field(name) else {
			log::warn!("{} has no field {name}", self.type_name);
			return Json::Null;
		};
		serialize(snapshot, value, depth - 1, options)
	}

	/// Resolve a field holding a name string or an object reference to the
	/// referenced object's display name.
	fn named(&self, snapshot: &Snapshot, name: &str) -> Json {
		let Some(value) = self.field(name) else {
			log::warn!("{} has no field {name}", self.type_name);
			return Json::Null;
		};
		match display_name(snapshot, value) {
			Some(text) => Json::from(text),
			None => {
				log::warn!("{}.{name} does not name an object", self.type_name);
				Json::Null
			}
		}
	}
}

/// Render an `x,y,z` component string for a captured vector record.
pub(crate) fn vector_string(value: &Value) -> Option<String> {
	let data = value.as_data()?;
	let x = data.field("x")?.as_f64()?;
	let y = data.field("y")?.as_f64()?;
	let z = data.field("z")?.as_f64()?;
	Some(format!("{x},{y},{z}"))
}

fn display_name(snapshot: &Snapshot, value: &Value) -> Option<String> {
	match value {
		Value::Str(name) => Some(name.to_string()),
		Value::Ref(id) => snapshot.get(*id).map(|object| object.name.to_string()),
		_ => None,
	}
}

fn box_collider(_snapshot: &Snapshot, view: &FieldView<'_>, _depth: i32, _options: &DumpOptions) -> Json {
	let mut map = Map::new();
	map.insert("type".to_owned(), Json::from("box"));
	map.insert("center".to_owned(), view.vector("center"));
	map.insert("size".to_owned(), view.vector("size"));
	Json::Object(map)
}

fn capsule_collider(_snapshot: &Snapshot, view: &FieldView<'_>, _depth: i32, _options: &DumpOptions) -> Json {
	let mut map = Map::new();
	map.insert("type".to_owned(), Json::from("capsule"));
	map.insert("center".to_owned(), view.vector("center"));
	map.insert("direction".to_owned(), view.scalar("direction"));
	map.insert("height".to_owned(), view.scalar("height"));
	map.insert("radius".to_owned(), view.scalar("radius"));
	Json::Object(map)
}

fn sphere_collider(_snapshot: &Snapshot, view: &FieldView<'_>, _depth: i32, _options: &DumpOptions) -> Json {
	let mut map = Map::new();
	map.insert("type".to_owned(), Json::from("sphere"));
	map.insert("center".to_owned(), view.vector("center"));
	map.insert("radius".to_owned(), view.scalar("radius"));
	Json::Object(map)
}

fn mesh_collider(snapshot: &Snapshot, view: &FieldView<'_>, _depth: i32, _options: &DumpOptions) -> Json {
	let mut map = Map::new();
	map.insert("type".to_owned(), Json::from("mesh"));
	map.insert("mesh".to_owned(), view.named(snapshot, "sharedMesh"));
	Json::Object(map)
}

fn car_damage_properties(_snapshot: &Snapshot, view: &FieldView<'_>, _depth: i32, _options: &DumpOptions) -> Json {
	let mut map = Map::new();
	for name in ["fullHitPoints", "damageResistance", "damageMultiplier", "fireResistance", "fireMultiplier"] {
		map.insert(name.to_owned(), view.scalar(name));
	}
	Json::Object(map)
}

fn driving_force(snapshot: &Snapshot, view: &FieldView<'_>, depth: i32, options: &DumpOptions) -> Json {
	let mut map = Map::new();
	map.insert("preventWheelslip".to_owned(), view.scalar("preventWheelslip"));
	map.insert("frictionCoefficient".to_owned(), view.scalar("frictionCoefficient"));
	map.insert("sandCoefMax".to_owned(), view.scalar("sandCoefMax"));
	map.insert("slopeCoefficientMultiplier".to_owned(), view.scalar("slopeCoefficientMultiplier"));
	map.insert("wheelslipToFrictionModifierCurve".to_owned(), view.nested(snapshot, "wheelslipToFrictionModifierCurve", depth, options));
	Json::Object(map)
}

fn audio_pool_references(snapshot: &Snapshot, view: &FieldView<'_>, _depth: i32, _options: &DumpOptions) -> Json {
	let Some(entries) = view.field("poolData").and_then(Value::as_list) else {
		log::warn!("{} has no poolData list", view.type_name);
		return Json::Null;
	};

	let mut pools = Vec::with_capacity(entries.len());
	for entry in entries {
		let Some(data) = entry.as_data() else {
			log::warn!("pool entry is not a data record");
			pools.push(Json::Null);
			continue;
		};
		let entry_view = FieldView::from_data(data);
		let mut map = Map::new();
		map.insert("prefab".to_owned(), entry_view.named(snapshot, "audioPrefab"));
		map.insert("poolSize".to_owned(), entry_view.scalar("poolSize"));
		pools.push(Json::Object(map));
	}

	let mut map = Map::new();
	map.insert("poolData".to_owned(), Json::Array(pools));
	Json::Object(map)
}

fn audio_clip(_snapshot: &Snapshot, view: &FieldView<'_>, _depth: i32, _options: &DumpOptions) -> Json {
	let mut map = Map::new();
	if let Some(name) = view.name {
		map.insert("name".to_owned(), Json::from(name));
	}
	for name in ["length", "frequency", "channels", "samples", "loadType"] {
		map.insert(name.to_owned(), view.scalar(name));
	}
	Json::Object(map)
}

fn audio_source(snapshot: &Snapshot, view: &FieldView<'_>, _depth: i32, _options: &DumpOptions) -> Json {
	let mut map = Map::new();
	map.insert("clip".to_owned(), view.named(snapshot, "clip"));
	for name in ["volume", "pitch", "loop", "spatialBlend", "minDistance", "maxDistance"] {
		map.insert(name.to_owned(), view.scalar(name));
	}
	Json::Object(map)
}

fn particle_system(_snapshot: &Snapshot, view: &FieldView<'_>, _depth: i32, _options: &DumpOptions) -> Json {
	let mut map = Map::new();
	if let Some(name) = view.name {
		map.insert("name".to_owned(), Json::from(name));
	}
	for name in ["duration", "looping", "startLifetime", "startSpeed", "startSize", "maxParticles", "emissionRate"] {
		map.insert(name.to_owned(), view.scalar(name));
	}
	Json::Object(map)
}

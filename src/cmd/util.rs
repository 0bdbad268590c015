use serde_json::Value as Json;

use railscope::dump::{DumpOptions, serialize};
use railscope::scene::{DataValue, EngineObject, Result, SceneError, Snapshot, Value};

/// Default depth budget for generic component dumps.
pub(crate) const DUMP_DEPTH: i32 = 10;

/// Serialize a named field of an engine object, degrading to `null` with a
/// warning when the field is absent.
pub(crate) fn field_json(snapshot: &Snapshot, object: &EngineObject, name: &str, depth: i32, options: &DumpOptions) -> Json {
	match object.field(name) {
		Some(value) => serialize(snapshot, value, depth, options),
		None => {
			log::warn!("{} has no field {name}", object.type_name);
			Json::Null
		}
	}
}

/// One resolved car selection: the livery record, its owning car type, and
/// the livery id used as the report subject name.
pub(crate) struct SelectedCar<'a> {
	pub name: String,
	pub car_type: &'a DataValue,
	pub livery: &'a DataValue,
}

impl<'a> SelectedCar<'a> {
	/// Resolve the livery's main prefab object.
	pub(crate) fn prefab(&self, snapshot: &'a Snapshot) -> Result<&'a EngineObject> {
		self.object_field(snapshot, "prefab").ok_or_else(|| SceneError::MissingPrefab { car: self.name.clone() })
	}

	/// Resolve an object-reference field on the livery record.
	pub(crate) fn object_field(&self, snapshot: &'a Snapshot, name: &str) -> Option<&'a EngineObject> {
		self.livery.field(name).and_then(Value::as_ref_id).and_then(|id| snapshot.get(id))
	}
}

/// Resolve the car a command should act on: the given livery id, or the car
/// the player was occupying when the snapshot was captured.
pub(crate) fn selected_car<'a>(snapshot: &'a Snapshot, arg: Option<&str>) -> Result<SelectedCar<'a>> {
	match arg {
		Some(id) => find_livery(snapshot, id),
		None => {
			let id = player_livery_id(snapshot)?;
			find_livery(snapshot, &id)
		}
	}
}

/// Iterate the car-type records in the snapshot's catalog.
pub(crate) fn car_types(snapshot: &Snapshot) -> Result<impl Iterator<Item = &DataValue>> {
	let catalog = snapshot.first_of_type("TrainCarCatalog").ok_or(SceneError::SingletonNotFound { type_name: "TrainCarCatalog" })?;
	let types = catalog.field("carTypes").and_then(Value::as_list).unwrap_or(&[]);
	Ok(types.iter().filter_map(Value::as_data))
}

/// Resolve the scene object for the car the player is occupying, if any.
pub(crate) fn player_car<'a>(snapshot: &'a Snapshot) -> Result<Option<&'a EngineObject>> {
	let manager = snapshot.first_of_type("PlayerManager").ok_or(SceneError::SingletonNotFound { type_name: "PlayerManager" })?;
	Ok(manager.field("car").and_then(Value::as_ref_id).and_then(|id| snapshot.get(id)))
}

fn player_livery_id(snapshot: &Snapshot) -> Result<String> {
	let car = player_car(snapshot)?.ok_or(SceneError::NoCarSelected)?;
	let train_car = snapshot.component_of_type(car, "TrainCar").ok_or(SceneError::NoCarSelected)?;
	train_car.field("liveryId").and_then(Value::as_str).map(str::to_owned).ok_or(SceneError::NoCarSelected)
}

fn find_livery<'a>(snapshot: &'a Snapshot, id: &str) -> Result<SelectedCar<'a>> {
	for car_type in car_types(snapshot)? {
		let Some(liveries) = car_type.field("liveries").and_then(Value::as_list) else {
			continue;
		};
		for livery in liveries.iter().filter_map(Value::as_data) {
			let Some(livery_id) = livery.field("id").and_then(Value::as_str) else {
				continue;
			};
			if livery_id.eq_ignore_ascii_case(id) {
				return Ok(SelectedCar {
					name: livery_id.to_owned(),
					car_type,
					livery,
				});
			}
		}
	}

	Err(SceneError::CarNotFound { id: id.to_owned() })
}

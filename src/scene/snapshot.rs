use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::scene::compression::{Compression, decode_bytes};
use crate::scene::object::EngineObject;
use crate::scene::parse::{RawObject, RawSnapshot, fields_from_json};
use crate::scene::value::ObjectId;
use crate::scene::{Result, SceneError};

/// Snapshot container version this crate understands.
pub const FORMAT_VERSION: u32 = 1;

/// One parsed scene snapshot: an arena of captured engine objects.
#[derive(Debug)]
pub struct Snapshot {
	/// Container format version of the source file.
	pub format_version: u32,
	/// Free-text label of the capture tool, when present.
	pub producer: Option<String>,
	/// Compression mode the source file used.
	pub compression: Compression,
	roots: Vec<ObjectId>,
	objects: Vec<EngineObject>,
	index: HashMap<u32, usize>,
}

impl Snapshot {
	/// Read, decompress, parse, and validate a snapshot file.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = fs::read(path)?;
		let (compression, bytes) = decode_bytes(raw)?;
		let mut snapshot = Self::from_slice(&bytes)?;
		snapshot.compression = compression;
		Ok(snapshot)
	}

	/// Parse and validate snapshot JSON text.
	pub fn from_slice(bytes: &[u8]) -> Result<Self> {
		let raw: RawSnapshot = serde_json::from_slice(bytes)?;
		Self::from_raw(raw)
	}

	fn from_raw(raw: RawSnapshot) -> Result<Self> {
		if raw.format_version != FORMAT_VERSION {
			return Err(SceneError::UnsupportedFormatVersion { version: raw.format_version });
		}

		let mut index = HashMap::with_capacity(raw.objects.len());
		for (slot, object) in raw.objects.iter().enumerate() {
			if index.insert(object.id, slot).is_some() {
				return Err(SceneError::DuplicateObjectId { id: object.id });
			}
		}

		for object in &raw.objects {
			for (kind, links) in [("child", &object.children), ("component", &object.components)] {
				for id in links {
					if !index.contains_key(id) {
						return Err(SceneError::UnresolvedLink {
							kind,
							parent: object.id,
							id: *id,
						});
					}
				}
			}
		}

		for id in &raw.roots {
			if !index.contains_key(id) {
				return Err(SceneError::UnresolvedRoot { id: *id });
			}
		}

		let roots = raw.roots.iter().map(|id| ObjectId(*id)).collect();
		let objects = raw.objects.iter().map(convert_object).collect::<Result<Vec<_>>>()?;

		Ok(Self {
			format_version: raw.format_version,
			producer: raw.producer,
			compression: Compression::None,
			roots,
			objects,
			index,
		})
	}

	/// Build a snapshot directly from model objects, bypassing validation.
	pub fn from_objects_for_test(objects: Vec<EngineObject>) -> Self {
		let index = objects.iter().enumerate().map(|(slot, object)| (object.id.0, slot)).collect();
		Self {
			format_version: FORMAT_VERSION,
			producer: None,
			compression: Compression::None,
			roots: Vec::new(),
			objects,
			index,
		}
	}

	/// Resolve an object handle, if it points at a captured entry.
	pub fn get(&self, id: ObjectId) -> Option<&EngineObject> {
		self.index.get(&id.0).map(|slot| &self.objects[*slot])
	}

	/// Scene root handles recorded by the capture.
	pub fn roots(&self) -> &[ObjectId] {
		&self.roots
	}

	/// Number of captured objects.
	pub fn object_count(&self) -> usize {
		self.objects.len()
	}

	/// Iterate all captured objects in file order.
	pub fn objects(&self) -> impl Iterator<Item = &EngineObject> {
		self.objects.iter()
	}

	/// Iterate all objects with the given runtime type name.
	pub fn objects_of_type<'a>(&'a self, type_name: &'a str) -> impl Iterator<Item = &'a EngineObject> {
		self.objects.iter().filter(move |object| object.type_name.as_ref() == type_name)
	}

	/// First object with the given runtime type name, in file order.
	pub fn first_of_type(&self, type_name: &str) -> Option<&EngineObject> {
		self.objects.iter().find(|object| object.type_name.as_ref() == type_name)
	}

	/// First object with the given display name, in file order.
	pub fn find_by_name(&self, name: &str) -> Option<&EngineObject> {
		self.objects.iter().find(|object| object.name.as_ref() == name)
	}

	/// Iterate the resolved components attached to an object.
	pub fn components_of<'a>(&'a self, object: &'a EngineObject) -> impl Iterator<Item = &'a EngineObject> {
		object.components.iter().filter_map(|id| self.get(*id))
	}

	/// First attached component with the given runtime type name.
	pub fn component_of_type<'a>(&'a self, object: &EngineObject, type_name: &str) -> Option<&'a EngineObject> {
		object.components.iter().filter_map(|id| self.get(*id)).find(|component| component.type_name.as_ref() == type_name)
	}

	/// Collect matching components from an object and all its descendants.
	pub fn components_in_subtree<'a>(&'a self, root: &'a EngineObject, matches: impl Fn(&EngineObject) -> bool) -> Vec<&'a EngineObject> {
		let mut found = Vec::new();
		self.collect_components(root, &matches, &mut found);
		found
	}

	fn collect_components<'a>(&'a self, object: &'a EngineObject, matches: &impl Fn(&EngineObject) -> bool, found: &mut Vec<&'a EngineObject>) {
		for component in self.components_of(object) {
			if matches(component) {
				found.push(component);
			}
		}
		for child in &object.children {
			if let Some(child) = self.get(*child) {
				self.collect_components(child, matches, found);
			}
		}
	}
}

fn convert_object(raw: &RawObject) -> Result<EngineObject> {
	let path = format!("{}#{}", raw.type_name, raw.id);
	let fields = fields_from_json(&raw.fields, &path)?;

	Ok(EngineObject {
		id: ObjectId(raw.id),
		type_name: raw.type_name.clone().into_boxed_str(),
		name: raw.name.clone().into_boxed_str(),
		layer: raw.layer.clone().map(String::into_boxed_str),
		destroyed: raw.destroyed,
		fields,
		children: raw.children.iter().map(|id| ObjectId(*id)).collect(),
		components: raw.components.iter().map(|id| ObjectId(*id)).collect(),
	})
}

#[cfg(test)]
mod tests {
	use super::Snapshot;
	use crate::scene::{ObjectId, SceneError, Value};

	const YARD: &str = r#"{
		"formatVersion": 1,
		"producer": "capture-tool 0.3",
		"roots": [1],
		"objects": [
			{"id": 1, "type": "GameObject", "name": "loco", "children": [2], "components": [3]},
			{"id": 2, "type": "GameObject", "name": "cab", "layer": "Interactable"},
			{"id": 3, "type": "TrainCar", "name": "loco", "fields": {"liveryId": "DE2", "mass": {"$data": "Vector3", "x": 1.0, "y": 2.0, "z": 3.0}}}
		]
	}"#;

	#[test]
	fn parses_objects_links_and_fields() {
		let snapshot = Snapshot::from_slice(YARD.as_bytes()).expect("snapshot parses");
		assert_eq!(snapshot.format_version, 1);
		assert_eq!(snapshot.producer.as_deref(), Some("capture-tool 0.3"));
		assert_eq!(snapshot.object_count(), 3);
		assert_eq!(snapshot.roots(), [ObjectId(1)]);

		let loco = snapshot.get(ObjectId(1)).expect("root resolves");
		assert_eq!(loco.children, [ObjectId(2)]);

		let car = snapshot.component_of_type(loco, "TrainCar").expect("component resolves");
		assert_eq!(car.field("liveryId").and_then(Value::as_str), Some("DE2"));
		assert_eq!(snapshot.get(ObjectId(2)).unwrap().layer_name(), "Interactable");
	}

	#[test]
	fn rejects_wrong_format_version() {
		let err = Snapshot::from_slice(br#"{"formatVersion": 2, "objects": []}"#).unwrap_err();
		assert!(matches!(err, SceneError::UnsupportedFormatVersion { version: 2 }));
	}

	#[test]
	fn rejects_duplicate_object_ids() {
		let text = r#"{"formatVersion": 1, "objects": [
			{"id": 1, "type": "GameObject", "name": "a"},
			{"id": 1, "type": "GameObject", "name": "b"}
		]}"#;
		let err = Snapshot::from_slice(text.as_bytes()).unwrap_err();
		assert!(matches!(err, SceneError::DuplicateObjectId { id: 1 }));
	}

	#[test]
	fn rejects_unresolved_child_links() {
		let text = r#"{"formatVersion": 1, "objects": [
			{"id": 1, "type": "GameObject", "name": "a", "children": [9]}
		]}"#;
		let err = Snapshot::from_slice(text.as_bytes()).unwrap_err();
		assert!(matches!(err, SceneError::UnresolvedLink { kind: "child", parent: 1, id: 9 }));
	}

	#[test]
	fn field_refs_may_dangle() {
		let text = r#"{"formatVersion": 1, "objects": [
			{"id": 1, "type": "TrainCar", "name": "a", "fields": {"coupledTo": {"$ref": 404}}}
		]}"#;
		let snapshot = Snapshot::from_slice(text.as_bytes()).expect("dangling field ref is allowed");
		let car = snapshot.get(ObjectId(1)).unwrap();
		assert_eq!(car.field("coupledTo").and_then(Value::as_ref_id), Some(ObjectId(404)));
		assert!(snapshot.get(ObjectId(404)).is_none());
	}

	#[test]
	fn subtree_component_search_is_depth_first() {
		let text = r#"{"formatVersion": 1, "objects": [
			{"id": 1, "type": "GameObject", "name": "root", "children": [2], "components": [10]},
			{"id": 2, "type": "GameObject", "name": "child", "components": [11]},
			{"id": 10, "type": "AudioSource", "name": "root"},
			{"id": 11, "type": "AudioSource", "name": "child"}
		]}"#;
		let snapshot = Snapshot::from_slice(text.as_bytes()).expect("snapshot parses");
		let root = snapshot.get(ObjectId(1)).unwrap();
		let sources = snapshot.components_in_subtree(root, |component| component.type_name.as_ref() == "AudioSource");
		let names: Vec<&str> = sources.iter().map(|component| component.name.as_ref()).collect();
		assert_eq!(names, ["root", "child"]);
	}
}

use serde_json::{Map, Value as Json};

use crate::dump::serialize::{DumpOptions, serialize_engine_object};
use crate::scene::{EngineObject, ObjectId, Snapshot};

/// Collider component type names recognized by the collider tree dump.
pub const COLLIDER_TYPES: &[&str] = &["BoxCollider", "CapsuleCollider", "SphereCollider", "MeshCollider"];

const COLLIDER_DEPTH: i32 = 4;

/// Compact recursive structure dump of one scene object.
///
/// Emits `{name, components, children}`, collapsing objects with no live
/// components and no children to their bare name string.
pub fn dump_structure(snapshot: &Snapshot, id: ObjectId) -> Json {
	let Some(object) = snapshot.get(id) else {
		log::warn!("dangling object reference #{}", id.0);
		return Json::Null;
	};
	structure_json(snapshot, object)
}

fn structure_json(snapshot: &Snapshot, object: &EngineObject) -> Json {
	let components: Vec<Json> = snapshot
		.components_of(object)
		.filter(|component| !component.destroyed)
		.map(|component| Json::from(component.type_name.as_ref()))
		.collect();

	let children: Vec<Json> = object.children.iter().filter_map(|child| snapshot.get(*child)).map(|child| structure_json(snapshot, child)).collect();

	if components.is_empty() && children.is_empty() {
		return Json::from(object.name.as_ref());
	}

	let mut map = Map::new();
	map.insert("name".to_owned(), Json::from(object.name.as_ref()));
	if !components.is_empty() {
		map.insert("components".to_owned(), Json::Array(components));
	}
	if !children.is_empty() {
		map.insert("children".to_owned(), Json::Array(children));
	}
	Json::Object(map)
}

/// Recursive collider dump of one scene object, pruning subtrees that
/// contain no colliders. Returns `None` when the whole subtree is empty.
pub fn dump_collider_tree(snapshot: &Snapshot, id: ObjectId) -> Option<Json> {
	let Some(object) = snapshot.get(id) else {
		log::warn!("dangling object reference #{}", id.0);
		return None;
	};
	collider_node(snapshot, object)
}

fn collider_node(snapshot: &Snapshot, object: &EngineObject) -> Option<Json> {
	let options = DumpOptions::default();
	let colliders: Vec<Json> = snapshot
		.components_of(object)
		.filter(|component| COLLIDER_TYPES.contains(&component.type_name.as_ref()))
		.map(|component| serialize_engine_object(snapshot, component, COLLIDER_DEPTH, &options))
		.collect();

	let children: Vec<Json> = object
		.children
		.iter()
		.filter_map(|child| snapshot.get(*child))
		.filter_map(|child| collider_node(snapshot, child))
		.collect();

	if colliders.is_empty() && children.is_empty() {
		return None;
	}

	let mut map = Map::new();
	map.insert("name".to_owned(), Json::from(object.name.as_ref()));
	map.insert("layer".to_owned(), Json::from(object.layer_name()));
	if !colliders.is_empty() {
		map.insert("colliders".to_owned(), Json::Array(colliders));
	}
	if !children.is_empty() {
		map.insert("children".to_owned(), Json::Array(children));
	}
	Some(map.into())
}

#[cfg(test)]
mod tests {
	use serde_json::Value as Json;

	use super::{dump_collider_tree, dump_structure};
	use crate::scene::{DataValue, EngineObject, FieldValue, ObjectId, Snapshot, Value};

	fn object(id: u32, type_name: &str, name: &str) -> EngineObject {
		EngineObject {
			id: ObjectId(id),
			type_name: type_name.into(),
			name: name.into(),
			layer: None,
			destroyed: false,
			fields: Vec::new(),
			children: Vec::new(),
			components: Vec::new(),
		}
	}

	#[test]
	fn leaf_objects_collapse_to_bare_names() {
		let mut root = object(1, "GameObject", "car");
		root.children = vec![ObjectId(2)];
		root.components = vec![ObjectId(3)];
		let leaf = object(2, "GameObject", "buffer_l");
		let component = object(3, "TrainCar", "car");
		let snapshot = Snapshot::from_objects_for_test(vec![root, leaf, component]);

		let out = dump_structure(&snapshot, ObjectId(1));
		let Json::Object(map) = out else { panic!("expected object") };
		assert_eq!(map["name"], Json::from("car"));
		assert_eq!(map["components"], Json::Array(vec![Json::from("TrainCar")]));
		assert_eq!(map["children"], Json::Array(vec![Json::from("buffer_l")]));
	}

	#[test]
	fn destroyed_components_are_not_listed() {
		let mut root = object(1, "GameObject", "car");
		root.components = vec![ObjectId(2), ObjectId(3)];
		let live = object(2, "TrainCar", "car");
		let mut dead = object(3, "AudioSource", "car");
		dead.destroyed = true;
		let snapshot = Snapshot::from_objects_for_test(vec![root, live, dead]);

		let out = dump_structure(&snapshot, ObjectId(1));
		assert_eq!(out["components"], Json::Array(vec![Json::from("TrainCar")]));
	}

	#[test]
	fn collider_tree_prunes_empty_subtrees() {
		let mut root = object(1, "GameObject", "car");
		root.children = vec![ObjectId(2), ObjectId(3)];
		let bare = object(2, "GameObject", "decals");
		let mut walkable = object(3, "GameObject", "walkable");
		walkable.layer = Some("Train_Walkable".into());
		walkable.components = vec![ObjectId(4)];
		let mut collider = object(4, "SphereCollider", "walkable");
		collider.fields = vec![
			FieldValue {
				name: "center".into(),
				value: Value::Data(DataValue {
					type_name: "Vector3".into(),
					fields: vec![
						FieldValue { name: "x".into(), value: Value::Float(0.0) },
						FieldValue { name: "y".into(), value: Value::Float(1.0) },
						FieldValue { name: "z".into(), value: Value::Float(0.0) },
					],
				}),
			},
			FieldValue { name: "radius".into(), value: Value::Float(0.5) },
		];
		let snapshot = Snapshot::from_objects_for_test(vec![root, bare, walkable, collider]);

		let out = dump_collider_tree(&snapshot, ObjectId(1)).expect("tree has colliders");
		let children = out["children"].as_array().expect("children array");
		assert_eq!(children.len(), 1, "colliderless subtree must be pruned");
		assert_eq!(children[0]["name"], Json::from("walkable"));
		assert_eq!(children[0]["layer"], Json::from("Train_Walkable"));
		assert_eq!(children[0]["colliders"][0]["type"], Json::from("sphere"));
		assert_eq!(children[0]["colliders"][0]["radius"], Json::from(0.5));
	}

	#[test]
	fn collider_tree_is_none_without_any_colliders() {
		let root = object(1, "GameObject", "car");
		let snapshot = Snapshot::from_objects_for_test(vec![root]);
		assert!(dump_collider_tree(&snapshot, ObjectId(1)).is_none());
	}
}

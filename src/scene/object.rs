use crate::scene::value::{FieldValue, ObjectId, Value, find_field};

/// One captured engine object: a scene node or an attached component.
#[derive(Debug, Clone)]
pub struct EngineObject {
	/// Arena handle this entry was captured under.
	pub id: ObjectId,
	/// Runtime type name.
	pub type_name: Box<str>,
	/// Display name.
	pub name: Box<str>,
	/// Physics layer label, when the capture recorded one.
	pub layer: Option<Box<str>>,
	/// Whether the underlying engine resource was already destroyed.
	pub destroyed: bool,
	/// Public instance fields in declaration order.
	pub fields: Vec<FieldValue>,
	/// Child scene nodes.
	pub children: Vec<ObjectId>,
	/// Attached components.
	pub components: Vec<ObjectId>,
}

impl EngineObject {
	/// Look up a public field value by name.
	pub fn field(&self, name: &str) -> Option<&Value> {
		find_field(&self.fields, name)
	}

	/// Physics layer label, defaulting engine-style when absent.
	pub fn layer_name(&self) -> &str {
		self.layer.as_deref().unwrap_or("Default")
	}
}

/// Stable handle to one engine object slot in a snapshot arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectId(pub u32);

/// Runtime-typed field value captured from the engine.
#[derive(Debug, Clone)]
pub enum Value {
	/// Absent reference or null field.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Integer scalar.
	Int(i64),
	/// Floating-point scalar.
	Float(f64),
	/// String scalar.
	Str(Box<str>),
	/// Enumerated value with its declaring type name.
	Enum(EnumValue),
	/// Ordered sequence of values.
	List(Vec<Value>),
	/// Plain data record with a runtime type name.
	Data(DataValue),
	/// Reference to an engine object in the snapshot arena.
	Ref(ObjectId),
}

/// Enumerated member together with its declaring enum type.
#[derive(Debug, Clone)]
pub struct EnumValue {
	/// Declaring enum type name.
	pub type_name: Box<str>,
	/// Symbolic member name.
	pub member: Box<str>,
}

/// Plain data record: runtime type name plus ordered fields.
#[derive(Debug, Clone)]
pub struct DataValue {
	/// Runtime type name of the record.
	pub type_name: Box<str>,
	/// Fields in capture order.
	pub fields: Vec<FieldValue>,
}

/// One named field inside a data record or engine object.
#[derive(Debug, Clone)]
pub struct FieldValue {
	/// Declared field name.
	pub name: Box<str>,
	/// Captured field value.
	pub value: Value,
}

impl Value {
	/// Boolean payload, when this is a boolean scalar.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Integer payload, when this is an integer scalar.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Self::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Numeric payload widened to `f64`, for integer or float scalars.
	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Self::Int(value) => Some(*value as f64),
			Self::Float(value) => Some(*value),
			_ => None,
		}
	}

	/// String payload, when this is a string scalar.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(value) => Some(value.as_ref()),
			_ => None,
		}
	}

	/// Enum payload, when this is an enumerated value.
	pub fn as_enum(&self) -> Option<&EnumValue> {
		match self {
			Self::Enum(value) => Some(value),
			_ => None,
		}
	}

	/// Element slice, when this is a sequence.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Record payload, when this is a data record.
	pub fn as_data(&self) -> Option<&DataValue> {
		match self {
			Self::Data(data) => Some(data),
			_ => None,
		}
	}

	/// Target handle, when this is an object reference.
	pub fn as_ref_id(&self) -> Option<ObjectId> {
		match self {
			Self::Ref(id) => Some(*id),
			_ => None,
		}
	}
}

impl DataValue {
	/// Look up a field value by name.
	pub fn field(&self, name: &str) -> Option<&Value> {
		find_field(&self.fields, name)
	}
}

/// Look up a field value by name in an ordered field list.
pub fn find_field<'a>(fields: &'a [FieldValue], name: &str) -> Option<&'a Value> {
	fields.iter().find(|field| field.name.as_ref() == name).map(|field| &field.value)
}

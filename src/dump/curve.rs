use serde_json::{Map, Value as Json};

use crate::dump::serialize::{DumpOptions, float_json};
use crate::dump::special::FieldView;
use crate::scene::{Snapshot, Value};

/// Number of evenly-spaced samples emitted per evaluated curve.
pub const CURVE_SAMPLES: usize = 1001;
/// Placeholder emitted in place of samples when evaluation is suppressed.
pub const SAMPLES_SUPPRESSED: &str = "<curve evaluation disabled>";

/// One cubic Hermite keyframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
	/// Keyframe parameter (time).
	pub time: f64,
	/// Curve value at the keyframe.
	pub value: f64,
	/// Incoming slope on the left side of the keyframe.
	pub in_tangent: f64,
	/// Outgoing slope on the right side of the keyframe.
	pub out_tangent: f64,
}

/// Evaluate a keyframe curve at one parameter value.
///
/// The parameter is clamped to the keyframe range. A segment with a
/// non-finite tangent on either end holds the left key's value (a step).
pub fn evaluate(keys: &[Keyframe], t: f64) -> f64 {
	let Some(first) = keys.first() else {
		return 0.0;
	};
	let last = keys[keys.len() - 1];

	if t <= first.time {
		return first.value;
	}
	if t >= last.time {
		return last.value;
	}

	for pair in keys.windows(2) {
		let (left, right) = (pair[0], pair[1]);
		if t > right.time {
			continue;
		}

		let dt = right.time - left.time;
		if dt <= 0.0 {
			return right.value;
		}
		if !left.out_tangent.is_finite() || !right.in_tangent.is_finite() {
			return left.value;
		}

		let s = (t - left.time) / dt;
		return hermite(left.value, left.out_tangent * dt, right.value, right.in_tangent * dt, s);
	}

	last.value
}

/// Evaluate a curve at `samples` evenly-spaced parameters spanning its
/// keyframe range, endpoints included.
pub fn resample(keys: &[Keyframe], samples: usize) -> Vec<f64> {
	if keys.is_empty() || samples == 0 {
		return Vec::new();
	}

	let min_time = keys[0].time;
	let max_time = keys[keys.len() - 1].time;
	if samples == 1 {
		return vec![evaluate(keys, min_time)];
	}

	let step = (max_time - min_time) / (samples - 1) as f64;
	(0..samples)
		.map(|index| {
			let t = if index == samples - 1 { max_time } else { min_time + step * index as f64 };
			evaluate(keys, t)
		})
		.collect()
}

/// Encode an animation curve as wrap modes, parameter bounds, and a
/// comma-joined resampled point list (or a placeholder when suppressed).
pub(crate) fn encode(_snapshot: &Snapshot, view: &FieldView<'_>, _depth: i32, options: &DumpOptions) -> Json {
	let Some(keys) = keyframes(view) else {
		log::warn!("{} has no usable keyframes", view.type_name);
		return Json::Null;
	};

	let mut map = Map::new();
	map.insert("preWrapMode".to_owned(), view.scalar("preWrapMode"));
	map.insert("postWrapMode".to_owned(), view.scalar("postWrapMode"));
	map.insert("minTime".to_owned(), float_json(keys[0].time));
	map.insert("maxTime".to_owned(), float_json(keys[keys.len() - 1].time));

	let samples = if options.evaluate_curves {
		Json::from(join_samples(&resample(&keys, CURVE_SAMPLES)))
	} else {
		Json::from(SAMPLES_SUPPRESSED)
	};
	map.insert("samples".to_owned(), samples);

	Json::Object(map)
}

fn join_samples(samples: &[f64]) -> String {
	let mut out = String::with_capacity(samples.len() * 8);
	for (index, value) in samples.iter().enumerate() {
		if index > 0 {
			out.push(',');
		}
		out.push_str(&value.to_string());
	}
	out
}

fn keyframes(view: &FieldView<'_>) -> Option<Vec<Keyframe>> {
	let entries = view.field("keys")?.as_list()?;

	let mut keys = Vec::with_capacity(entries.len());
	for entry in entries {
		let Some(data) = entry.as_data() else {
			log::warn!("curve keyframe is not a data record");
			continue;
		};
		let (Some(time), Some(value)) = (data.field("time").and_then(Value::as_f64), data.field("value").and_then(Value::as_f64)) else {
			log::warn!("curve keyframe is missing time or value");
			continue;
		};

		keys.push(Keyframe {
			time,
			value,
			in_tangent: data.field("inTangent").and_then(Value::as_f64).unwrap_or(0.0),
			out_tangent: data.field("outTangent").and_then(Value::as_f64).unwrap_or(0.0),
		});
	}

	if keys.is_empty() {
		return None;
	}

	keys.sort_by(|left, right| left.time.total_cmp(&right.time));
	Some(keys)
}

fn hermite(p0: f64, m0: f64, p1: f64, m1: f64, s: f64) -> f64 {
	let s2 = s * s;
	let s3 = s2 * s;
	(2.0 * s3 - 3.0 * s2 + 1.0) * p0 + (s3 - 2.0 * s2 + s) * m0 + (-2.0 * s3 + 3.0 * s2) * p1 + (s3 - s2) * m1
}

#[cfg(test)]
mod tests {
	use serde_json::Value as Json;

	use super::{CURVE_SAMPLES, Keyframe, SAMPLES_SUPPRESSED, evaluate, resample};
	use crate::dump::serialize::{DumpOptions, serialize};
	use crate::scene::{DataValue, EnumValue, FieldValue, Snapshot, Value};

	fn key(time: f64, value: f64, tangent: f64) -> Keyframe {
		Keyframe {
			time,
			value,
			in_tangent: tangent,
			out_tangent: tangent,
		}
	}

	#[test]
	fn linear_resample_is_monotonic_with_exact_endpoints() {
		let keys = [key(0.0, 0.0, 1.0), key(10.0, 10.0, 1.0)];
		let samples = resample(&keys, CURVE_SAMPLES);

		assert_eq!(samples.len(), CURVE_SAMPLES);
		assert_eq!(samples[0], 0.0);
		assert_eq!(samples[CURVE_SAMPLES - 1], 10.0);
		for pair in samples.windows(2) {
			assert!(pair[1] >= pair[0], "sequence must be non-decreasing");
		}
	}

	#[test]
	fn infinite_tangent_makes_step_segments() {
		let keys = [key(0.0, 1.0, f64::INFINITY), key(1.0, 5.0, f64::INFINITY)];
		assert_eq!(evaluate(&keys, 0.25), 1.0);
		assert_eq!(evaluate(&keys, 0.999), 1.0);
		assert_eq!(evaluate(&keys, 1.0), 5.0);
	}

	#[test]
	fn single_keyframe_curve_is_constant() {
		let keys = [key(2.0, 7.5, 0.0)];
		assert_eq!(evaluate(&keys, -10.0), 7.5);
		assert_eq!(evaluate(&keys, 2.0), 7.5);
		assert_eq!(evaluate(&keys, 99.0), 7.5);
		assert_eq!(resample(&keys, 5), vec![7.5; 5]);
	}

	#[test]
	fn evaluation_clamps_outside_keyframe_range() {
		let keys = [key(1.0, 3.0, 0.0), key(2.0, 4.0, 0.0)];
		assert_eq!(evaluate(&keys, 0.0), 3.0);
		assert_eq!(evaluate(&keys, 5.0), 4.0);
	}

	fn curve_value() -> Value {
		let keyframe = |time: f64, value: f64| {
			Value::Data(DataValue {
				type_name: "Keyframe".into(),
				fields: vec![
					FieldValue { name: "time".into(), value: Value::Float(time) },
					FieldValue { name: "value".into(), value: Value::Float(value) },
					FieldValue { name: "inTangent".into(), value: Value::Float(1.0) },
					FieldValue { name: "outTangent".into(), value: Value::Float(1.0) },
				],
			})
		};
		let wrap = |member: &str| {
			Value::Enum(EnumValue {
				type_name: "WrapMode".into(),
				member: member.into(),
			})
		};

		Value::Data(DataValue {
			type_name: "AnimationCurve".into(),
			fields: vec![
				FieldValue { name: "preWrapMode".into(), value: wrap("ClampForever") },
				FieldValue { name: "postWrapMode".into(), value: wrap("Clamp") },
				FieldValue { name: "keys".into(), value: Value::List(vec![keyframe(0.0, 0.0), keyframe(10.0, 10.0)]) },
			],
		})
	}

	#[test]
	fn encoded_curve_carries_bounds_wrap_modes_and_samples() {
		let snapshot = Snapshot::from_objects_for_test(Vec::new());
		let out = serialize(&snapshot, &curve_value(), 5, &DumpOptions::default());

		assert_eq!(out["preWrapMode"], Json::from("ClampForever (WrapMode)"));
		assert_eq!(out["postWrapMode"], Json::from("Clamp (WrapMode)"));
		assert_eq!(out["minTime"], Json::from(0.0));
		assert_eq!(out["maxTime"], Json::from(10.0));

		let samples = out["samples"].as_str().expect("samples string");
		assert_eq!(samples.split(',').count(), CURVE_SAMPLES);
		assert!(samples.starts_with("0,"));
		assert!(samples.ends_with(",10"));
	}

	#[test]
	fn suppressed_curve_has_no_numeric_samples() {
		let snapshot = Snapshot::from_objects_for_test(Vec::new());
		let options = DumpOptions { evaluate_curves: false };
		let out = serialize(&snapshot, &curve_value(), 5, &options);

		assert_eq!(out["samples"], Json::from(SAMPLES_SUPPRESSED));
	}

	#[test]
	fn curve_without_keys_degrades_to_null() {
		let snapshot = Snapshot::from_objects_for_test(Vec::new());
		let value = Value::Data(DataValue {
			type_name: "AnimationCurve".into(),
			fields: Vec::new(),
		});
		assert_eq!(serialize(&snapshot, &value, 5, &DumpOptions::default()), Json::Null);
	}
}

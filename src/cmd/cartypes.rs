use std::path::PathBuf;

use serde_json::{Map, Value as Json};

use railscope::dump::{DumpOptions, serialize, write_report};
use railscope::scene::{DataValue, Result, Snapshot, Value};

use crate::cmd::util::{DUMP_DEPTH, car_types};

/// Car-type fields carried into the catalog dump, in output order.
const CAR_TYPE_FIELDS: &[&str] = &[
	"id",
	"bogieSuspensionMultiplier",
	"kind",
	"localizationKey",
	"mass",
	"requiredJobLicenses",
	"rollingResistanceMultiplier",
	"useDefaultWheelRotation",
	"wheelRadius",
	"wheelSlideFrictionMultiplier",
	"wheelslipFrictionMultiplier",
	"brakes",
	"damage",
];

#[derive(clap::Args)]
pub struct Args {
	/// Snapshot file to read.
	pub snapshot: PathBuf,
	/// Directory report files are written to.
	#[arg(long = "out", default_value = "dumps")]
	pub out_dir: PathBuf,
	/// Skip curve evaluation for a fast structural dump.
	#[arg(long = "skip-curves")]
	pub skip_curves: bool,
}

/// Dump the full car-type catalog.
pub fn run(args: Args) -> Result<()> {
	let snapshot = Snapshot::open(&args.snapshot)?;
	let options = DumpOptions { evaluate_curves: !args.skip_curves };

	let mut result = Vec::new();
	for car_type in car_types(&snapshot)? {
		result.push(car_type_json(&snapshot, car_type, &options));
	}

	write_report(&args.out_dir, "Resources", "carTypes", &Json::Array(result))?;
	Ok(())
}

fn car_type_json(snapshot: &Snapshot, car_type: &DataValue, options: &DumpOptions) -> Json {
	let mut map = Map::new();
	for name in CAR_TYPE_FIELDS {
		let value = car_type.field(name).unwrap_or(&Value::Null);
		map.insert((*name).to_owned(), serialize(snapshot, value, DUMP_DEPTH, options));
	}

	let liveries = car_type.field("liveries").and_then(Value::as_list).unwrap_or(&[]);
	map.insert(
		"liveries".to_owned(),
		Json::Array(liveries.iter().filter_map(Value::as_data).map(|livery| livery_json(snapshot, livery, options)).collect()),
	);

	Json::Object(map)
}

fn livery_json(snapshot: &Snapshot, livery: &DataValue, options: &DumpOptions) -> Json {
	let mut map = Map::new();
	for name in ["id", "isHidden", "localizationKey", "requiredLicense"] {
		let value = livery.field(name).unwrap_or(&Value::Null);
		map.insert(name.to_owned(), serialize(snapshot, value, 2, options));
	}
	map.insert("prefab".to_owned(), prefab_name(snapshot, livery, "prefab"));
	map.insert("interiorPrefab".to_owned(), prefab_name(snapshot, livery, "interiorPrefab"));
	Json::Object(map)
}

fn prefab_name(snapshot: &Snapshot, livery: &DataValue, name: &str) -> Json {
	match livery.field(name).and_then(Value::as_ref_id).and_then(|id| snapshot.get(id)) {
		Some(object) => Json::from(object.name.as_ref()),
		None => Json::Null,
	}
}

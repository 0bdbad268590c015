use std::path::PathBuf;

use serde_json::{Map, Value as Json};

use railscope::dump::{DumpOptions, serialize, write_report};
use railscope::scene::{Result, Snapshot, Value};

use crate::cmd::util::{DUMP_DEPTH, field_json, selected_car};

#[derive(clap::Args)]
pub struct Args {
	/// Snapshot file to read.
	pub snapshot: PathBuf,
	/// Car livery id (defaults to the player's car).
	pub car: Option<String>,
	/// Directory report files are written to.
	#[arg(long = "out", default_value = "dumps")]
	pub out_dir: PathBuf,
	/// Skip curve evaluation for a fast structural dump.
	#[arg(long = "skip-curves")]
	pub skip_curves: bool,
}

/// Dump the damage controller properties of the selected car.
pub fn run(args: Args) -> Result<()> {
	let snapshot = Snapshot::open(&args.snapshot)?;
	let car = selected_car(&snapshot, args.car.as_deref())?;
	let prefab = car.prefab(&snapshot)?;

	let Some(controller) = snapshot.components_of(prefab).find(|component| component.type_name.starts_with("DamageController")) else {
		log::warn!("car type {} prefab does not have a damage controller", car.name);
		return Ok(());
	};

	let options = DumpOptions { evaluate_curves: !args.skip_curves };

	let mut props = Map::new();
	props.insert("wheelsHP".to_owned(), hit_points(controller.field("wheels")));
	props.insert("speedToBrakeDamageCurve".to_owned(), field_json(&snapshot, controller, "speedToBrakeDamageCurve", DUMP_DEPTH, &options));
	if let Some(engine) = controller.field("engine") {
		props.insert("engineHP".to_owned(), hit_points(Some(engine)));
	}
	if let Some(body) = car.car_type.field("damage") {
		props.insert("bodyDamage".to_owned(), serialize(&snapshot, body, DUMP_DEPTH, &options));
	}

	write_report(&args.out_dir, &car.name, "damage", &Json::Object(props))?;
	Ok(())
}

fn hit_points(value: Option<&Value>) -> Json {
	match value.and_then(Value::as_data).and_then(|data| data.field("fullHitPoints")).and_then(Value::as_f64) {
		Some(points) => Json::from(points),
		None => {
			log::warn!("damage record has no fullHitPoints");
			Json::Null
		}
	}
}

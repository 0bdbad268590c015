use std::path::PathBuf;

use serde_json::{Map, Value as Json};

use railscope::dump::{DumpOptions, write_report};
use railscope::scene::{Result, Snapshot};

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

/// Dump the brake and traction curves of the selected loco.
pub fn run(args: Args) -> Result<()> {
	let snapshot = Snapshot::open(&args.snapshot)?;
	let car = selected_car(&snapshot, args.car.as_deref())?;
	let prefab = car.prefab(&snapshot)?;

	let Some(controller) = snapshot.components_of(prefab).find(|component| component.type_name.starts_with("LocoController")) else {
		log::warn!("car type {} prefab does not have a loco controller", car.name);
		return Ok(());
	};

	let options = DumpOptions { evaluate_curves: !args.skip_curves };

	let mut props = Map::new();
	props.insert("brakePowerCurve".to_owned(), field_json(&snapshot, controller, "brakePowerCurve", DUMP_DEPTH, &options));
	if controller.field("tractionTorqueCurve").is_some() {
		props.insert("tractionTorqueCurve".to_owned(), field_json(&snapshot, controller, "tractionTorqueCurve", DUMP_DEPTH, &options));
	}
	props.insert("drivingForce".to_owned(), field_json(&snapshot, controller, "drivingForce", DUMP_DEPTH, &options));

	write_report(&args.out_dir, &car.name, "loco_curves", &Json::Object(props))?;
	Ok(())
}

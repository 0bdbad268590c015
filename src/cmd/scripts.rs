use std::path::PathBuf;

use serde_json::Value as Json;

use railscope::dump::{COLLIDER_TYPES, DumpOptions, serialize_engine_object, write_report};
use railscope::scene::{Result, Snapshot};

use crate::cmd::util::{DUMP_DEPTH, selected_car};

/// Built-in engine component types that are not game scripts.
const ENGINE_TYPES: &[&str] = &["AudioSource", "Light", "MeshFilter", "MeshRenderer", "ParticleSystem", "Rigidbody", "Transform"];

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

/// Dump the top-level script components of the selected car's prefab.
pub fn run(args: Args) -> Result<()> {
	let snapshot = Snapshot::open(&args.snapshot)?;
	let car = selected_car(&snapshot, args.car.as_deref())?;
	let prefab = car.prefab(&snapshot)?;

	let options = DumpOptions { evaluate_curves: !args.skip_curves };
	let scripts: Vec<Json> = snapshot
		.components_of(prefab)
		.filter(|component| is_script(&component.type_name))
		.map(|component| serialize_engine_object(&snapshot, component, DUMP_DEPTH, &options))
		.collect();

	write_report(&args.out_dir, &car.name, "car_scripts", &Json::Array(scripts))?;
	Ok(())
}

fn is_script(type_name: &str) -> bool {
	!COLLIDER_TYPES.contains(&type_name) && !ENGINE_TYPES.contains(&type_name)
}

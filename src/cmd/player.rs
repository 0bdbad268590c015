use std::path::PathBuf;

use railscope::dump::{dump_structure, write_report};
use railscope::scene::{Result, SceneError, Snapshot, Value};

use crate::cmd::util::player_car;

#[derive(clap::Args)]
pub struct Args {
	/// Snapshot file to read.
	pub snapshot: PathBuf,
	/// Directory report files are written to.
	#[arg(long = "out", default_value = "dumps")]
	pub out_dir: PathBuf,
}

/// Print player state and dump the structure of the occupied car.
pub fn run(args: Args) -> Result<()> {
	let snapshot = Snapshot::open(&args.snapshot)?;
	let manager = snapshot.first_of_type("PlayerManager").ok_or(SceneError::SingletonNotFound { type_name: "PlayerManager" })?;

	println!("position: {}", vec3_text(manager.field("position")));
	println!("rotation: {}", vec3_text(manager.field("rotation")));
	println!("track: {}", manager.field("trackId").and_then(Value::as_str).unwrap_or("<unknown>"));

	let Some(car) = player_car(&snapshot)? else {
		println!("player is not currently on a car");
		return Ok(());
	};
	println!("car: {}", car.name);

	let structure = dump_structure(&snapshot, car.id);
	write_report(&args.out_dir, &car.name, "spawned", &structure)?;
	Ok(())
}

fn vec3_text(value: Option<&Value>) -> String {
	let component = |data: &railscope::scene::DataValue, name: &str| data.field(name).and_then(Value::as_f64);

	match value.and_then(Value::as_data) {
		Some(data) => match (component(data, "x"), component(data, "y"), component(data, "z")) {
			(Some(x), Some(y), Some(z)) => format!("{x},{y},{z}"),
			_ => "<malformed>".to_owned(),
		},
		None => "<unknown>".to_owned(),
	}
}

use std::path::PathBuf;

use railscope::dump::{dump_structure, write_report};
use railscope::scene::{Result, Snapshot};

use crate::cmd::util::selected_car;

#[derive(clap::Args)]
pub struct Args {
	/// Snapshot file to read.
	pub snapshot: PathBuf,
	/// Car livery id (defaults to the player's car).
	pub car: Option<String>,
	/// Directory report files are written to.
	#[arg(long = "out", default_value = "dumps")]
	pub out_dir: PathBuf,
}

/// Dump the structure of the selected car's prefab.
pub fn run(args: Args) -> Result<()> {
	let snapshot = Snapshot::open(&args.snapshot)?;
	let car = selected_car(&snapshot, args.car.as_deref())?;
	let prefab = car.prefab(&snapshot)?;

	let contents = dump_structure(&snapshot, prefab.id);
	write_report(&args.out_dir, &car.name, "prefab", &contents)?;
	Ok(())
}

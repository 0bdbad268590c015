use std::path::PathBuf;

use railscope::dump::{dump_collider_tree, write_report};
use railscope::scene::{Result, Snapshot};

use crate::cmd::util::selected_car;

#[derive(clap::Args)]
pub struct Args {
	/// Snapshot file to read.
	pub snapshot: PathBuf,
	/// Car livery id (defaults to the player's car).
	pub car: Option<String>,
	/// Dump the interior prefab's colliders instead.
	#[arg(long)]
	pub interior: bool,
	/// Directory report files are written to.
	#[arg(long = "out", default_value = "dumps")]
	pub out_dir: PathBuf,
}

/// Dump the collider tree of the selected car's prefab.
pub fn run(args: Args) -> Result<()> {
	let snapshot = Snapshot::open(&args.snapshot)?;
	let car = selected_car(&snapshot, args.car.as_deref())?;

	let (root, category) = if args.interior {
		let Some(interior) = car.object_field(&snapshot, "interiorPrefab") else {
			log::warn!("car type {} doesn't have an interior prefab assigned", car.name);
			return Ok(());
		};
		(interior, "interior_colliders")
	} else {
		(car.prefab(&snapshot)?, "colliders")
	};

	let Some(contents) = dump_collider_tree(&snapshot, root.id) else {
		log::warn!("no colliders found under {}", root.name);
		return Ok(());
	};

	write_report(&args.out_dir, &car.name, category, &contents)?;
	Ok(())
}

use std::path::PathBuf;

use railscope::dump::{DumpOptions, serialize_engine_object, write_report};
use railscope::scene::{Result, SceneError, Snapshot};

#[derive(clap::Args)]
pub struct Args {
	/// Snapshot file to read.
	pub snapshot: PathBuf,
	/// Display name of the object to dump.
	#[arg(long)]
	pub name: String,
	/// Recursion depth budget.
	#[arg(long, default_value_t = 10)]
	pub depth: i32,
	/// Directory report files are written to.
	#[arg(long = "out", default_value = "dumps")]
	pub out_dir: PathBuf,
	/// Skip curve evaluation for a fast structural dump.
	#[arg(long = "skip-curves")]
	pub skip_curves: bool,
}

/// Dump the first object with the given name through the generic serializer.
pub fn run(args: Args) -> Result<()> {
	let snapshot = Snapshot::open(&args.snapshot)?;
	let object = snapshot.find_by_name(&args.name).ok_or_else(|| SceneError::ObjectNotFound { name: args.name.clone() })?;

	let options = DumpOptions { evaluate_curves: !args.skip_curves };
	let document = serialize_engine_object(&snapshot, object, args.depth, &options);
	write_report(&args.out_dir, &args.name, "object", &document)?;
	Ok(())
}

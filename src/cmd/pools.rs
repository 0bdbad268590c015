use std::path::PathBuf;

use serde_json::{Map, Value as Json};

use railscope::dump::{DumpOptions, write_report};
use railscope::scene::{Result, SceneError, Snapshot};

use crate::cmd::util::{DUMP_DEPTH, field_json};

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

/// Dump the contents of the train component pool.
pub fn run(args: Args) -> Result<()> {
	let snapshot = Snapshot::open(&args.snapshot)?;
	let pool = snapshot.first_of_type("TrainComponentPool").ok_or(SceneError::SingletonNotFound { type_name: "TrainComponentPool" })?;

	let options = DumpOptions { evaluate_curves: !args.skip_curves };
	let mut output = Map::new();
	output.insert("audioPool".to_owned(), field_json(&snapshot, pool, "audioPoolReferences", DUMP_DEPTH, &options));

	write_report(&args.out_dir, "TrainComponentPool", "members", &Json::Object(output))?;
	Ok(())
}

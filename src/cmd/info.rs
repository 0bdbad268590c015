use std::collections::HashMap;
use std::path::PathBuf;

use railscope::scene::{Result, Snapshot};

#[derive(clap::Args)]
pub struct Args {
	/// Snapshot file to read.
	pub snapshot: PathBuf,
}

/// Print high-level snapshot statistics.
pub fn run(args: Args) -> Result<()> {
	let snapshot = Snapshot::open(&args.snapshot)?;

	println!("path: {}", args.snapshot.display());
	println!("compression: {}", snapshot.compression.as_str());
	println!("format_version: {}", snapshot.format_version);
	println!("producer: {}", snapshot.producer.as_deref().unwrap_or("<unknown>"));
	println!("object_count: {}", snapshot.object_count());
	println!("root_count: {}", snapshot.roots().len());
	println!("destroyed_count: {}", snapshot.objects().filter(|object| object.destroyed).count());

	let mut counts: HashMap<&str, u32> = HashMap::new();
	for object in snapshot.objects() {
		*counts.entry(object.type_name.as_ref()).or_insert(0) += 1;
	}

	let mut entries: Vec<_> = counts.into_iter().collect();
	entries.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(right.0)));

	println!("top_types:");
	for (type_name, count) in entries.into_iter().take(12) {
		println!("  {type_name}: {count}");
	}

	Ok(())
}

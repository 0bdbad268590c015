use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as Json;

use crate::scene::Result;

/// Compose the report file path for a subject/category pair.
pub fn report_path(out_dir: &Path, subject: &str, category: &str) -> PathBuf {
	out_dir.join(format!("{}_{category}.json", sanitize(subject)))
}

/// Render a document tree as indented UTF-8 JSON under the output
/// directory, creating parent directories as needed.
pub fn write_report(out_dir: &Path, subject: &str, category: &str, document: &Json) -> Result<PathBuf> {
	fs::create_dir_all(out_dir)?;

	let path = report_path(out_dir, subject, category);
	let mut text = serde_json::to_vec_pretty(document)?;
	text.push(b'\n');
	fs::write(&path, text)?;

	log::info!("wrote {}", path.display());
	Ok(path)
}

fn sanitize(subject: &str) -> String {
	subject
		.chars()
		.map(|ch| if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') { ch } else { '_' })
		.collect()
}

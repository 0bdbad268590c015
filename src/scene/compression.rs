use std::io::Read;

use crate::scene::{Result, SceneError};

const MAX_DECOMPRESSED_BYTES: usize = 512 * 1024 * 1024;
/// zstd frame magic used by compressed snapshots.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw JSON text.
	None,
	/// zstd-compressed JSON text.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw)?;
		if !looks_like_snapshot(&out) {
			return Err(SceneError::NotSnapshotAfterDecompress);
		}
		return Ok((Compression::Zstd, out));
	}

	if looks_like_snapshot(&raw) {
		return Ok((Compression::None, raw));
	}

	Err(SceneError::UnknownMagic { magic: first4(&raw) })
}

fn decode_zstd(raw: &[u8]) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(SceneError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

fn looks_like_snapshot(bytes: &[u8]) -> bool {
	bytes.iter().copied().find(|byte| !byte.is_ascii_whitespace()) == Some(b'{')
}

fn first4(bytes: &[u8]) -> [u8; 4] {
	let mut magic = [0_u8; 4];
	let take = bytes.len().min(4);
	magic[..take].copy_from_slice(&bytes[..take]);
	magic
}

#[cfg(test)]
mod tests {
	use super::{Compression, decode_bytes};
	use crate::scene::SceneError;

	#[test]
	fn raw_json_passes_through_untouched() {
		let raw = b"  {\"formatVersion\": 1}".to_vec();
		let (mode, bytes) = decode_bytes(raw.clone()).expect("raw json decodes");
		assert_eq!(mode, Compression::None);
		assert_eq!(bytes, raw);
	}

	#[test]
	fn zstd_frame_is_decompressed() {
		let text = b"{\"formatVersion\": 1, \"objects\": []}";
		let compressed = zstd::stream::encode_all(&text[..], 0).expect("zstd encode");
		let (mode, bytes) = decode_bytes(compressed).expect("zstd decodes");
		assert_eq!(mode, Compression::Zstd);
		assert_eq!(bytes, text);
	}

	#[test]
	fn unknown_leading_bytes_are_rejected() {
		let err = decode_bytes(b"<binary>".to_vec()).unwrap_err();
		assert!(matches!(err, SceneError::UnknownMagic { magic: [b'<', b'b', b'i', b'n'] }));
	}
}

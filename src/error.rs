use crate::io::IoError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TrimError>;

#[derive(Debug, Error)]
pub enum TrimError {
	#[error("short read: expected {expected} bytes, found {found}")]
	ShortRead { expected: u64, found: u64 },

	#[error("invalid {field} tag: expected {expected:?}, found {found:?}")]
	InvalidTag { field: &'static str, expected: String, found: String },

	#[error(
		"corrupt header: byte rate {byte_rate} (expected {expected_byte_rate}), block align {block_align} (expected {expected_block_align})"
	)]
	CorruptHeader {
		byte_rate: u32,
		expected_byte_rate: u64,
		block_align: u16,
		expected_block_align: u64,
	},

	#[error("invalid ratio {0}: must be greater than 0 and at most 1")]
	InvalidRatio(f32),

	#[error("conflicting options: {0}")]
	ConflictingOptions(&'static str),

	#[error("corrupt result: {0}")]
	CorruptResult(String),

	#[error("window of {len} bytes at offset {offset} exceeds payload of {size} bytes")]
	WindowOutOfRange { offset: u32, len: u32, size: u32 },

	#[error(transparent)]
	Io(#[from] IoError),
}

impl From<std::io::Error> for TrimError {
	fn from(err: std::io::Error) -> Self {
		TrimError::Io(err.into())
	}
}

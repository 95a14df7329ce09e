use super::{HEADER_SIZE, WaveHeader};
use crate::error::{Result, TrimError};
use crate::io::{MediaRead, ReadPrimitives};

/// Reads the first 44 bytes of `source` as a header. Consistency is not checked;
/// call [`WaveHeader::validate`] before trusting the fields.
pub fn parse<R: MediaRead>(mut source: R) -> Result<WaveHeader> {
	let mut buf = [0u8; HEADER_SIZE];
	let found = source.read_up_to(&mut buf)?;
	if found < HEADER_SIZE {
		return Err(TrimError::ShortRead { expected: HEADER_SIZE as u64, found: found as u64 });
	}
	Ok(WaveHeader::from_bytes(&buf))
}

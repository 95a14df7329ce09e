use super::WaveHeader;
use crate::core::AudioBuffer;
use crate::error::{Result, TrimError};
use crate::io::{ByteSink, WritePrimitives};

pub fn serialize<W: ByteSink>(header: &WaveHeader, mut sink: W) -> Result<()> {
	sink.write_all(&header.to_bytes())?;
	Ok(())
}

/// Writes `header` followed by the payload. A payload whose length disagrees with
/// `subchunk2_size` is refused before anything reaches the sink.
pub fn write_wave<W: ByteSink>(mut sink: W, header: &WaveHeader, buffer: &AudioBuffer) -> Result<()> {
	if buffer.len() as u64 != header.subchunk2_size as u64 {
		return Err(TrimError::CorruptResult(format!(
			"payload holds {} bytes but header declares {}",
			buffer.len(),
			header.subchunk2_size
		)));
	}

	serialize(header, &mut sink)?;
	sink.write_all(buffer.as_slice())?;
	sink.flush()?;
	Ok(())
}

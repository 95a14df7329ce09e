//! Payload truncation for canonical WAVE files.
//!
//! The engine never touches the filesystem and never logs. It reads from a
//! [`ByteSource`] already positioned at the first payload byte, or takes an
//! [`AudioBuffer`] by value. It returns a fresh header and buffer. The same inputs
//! always give byte-identical outputs.

mod options;

pub use options::{DEFAULT_RATIO, TrimOptions, TrimWindow, check_ratio};

use crate::container::WaveHeader;
use crate::core::AudioBuffer;
use crate::error::{Result, TrimError};
use crate::io::{ByteSource, MediaSeek, ReadPrimitives, SeekFrom};

/// `original_size * ratio` truncated toward zero. The product is taken in double
/// precision so every `u32` size is represented exactly.
pub fn compute_trimmed_size(original_size: u32, ratio: f32) -> u32 {
	((original_size as f64 * ratio as f64) as u32).min(original_size)
}

pub fn align_to_frame(size: u32, frame_size: u32) -> u32 {
	if frame_size == 0 {
		return size;
	}
	size - size % frame_size
}

/// Byte offset into the payload where the kept window begins.
pub fn window_start(original_size: u32, new_size: u32, window: TrimWindow) -> Result<u32> {
	match window {
		TrimWindow::Start => Ok(0),
		TrimWindow::End => Ok(original_size - new_size),
		TrimWindow::Offset(offset) => {
			if offset as u64 + new_size as u64 > original_size as u64 {
				return Err(TrimError::WindowOutOfRange {
					offset,
					len: new_size,
					size: original_size,
				});
			}
			Ok(offset)
		}
	}
}

/// Reads the kept window out of `source`, which must sit at the payload start and
/// still hold all `original_size` declared bytes.
pub fn select_window<S: ByteSource>(
	mut source: S,
	original_size: u32,
	new_size: u32,
	window: TrimWindow,
) -> Result<AudioBuffer> {
	let available = source.remaining()?;
	if available < original_size as u64 {
		return Err(TrimError::ShortRead { expected: original_size as u64, found: available });
	}

	let skip = window_start(original_size, new_size, window)?;
	if skip > 0 {
		source.seek(SeekFrom::Current(skip as i64))?;
	}

	let mut buffer = AudioBuffer::zeroed(new_size as usize);
	let found = source.read_up_to(buffer.as_mut_slice())?;
	if found < buffer.len() {
		return Err(TrimError::ShortRead { expected: new_size as u64, found: found as u64 });
	}
	Ok(buffer)
}

/// `original_size` must be the payload size captured before any field was rewritten.
pub fn update_header(header: &WaveHeader, original_size: u32, new_size: u32) -> WaveHeader {
	let removed = original_size - new_size;
	WaveHeader {
		chunk_size: header.chunk_size.saturating_sub(removed),
		subchunk2_size: new_size,
		..*header
	}
}

pub fn trim<S: ByteSource>(
	header: &WaveHeader,
	source: S,
	ratio: f32,
	from_end: bool,
) -> Result<(WaveHeader, AudioBuffer)> {
	let window = if from_end { TrimWindow::End } else { TrimWindow::Start };
	let options = TrimOptions { ratio, window, align_frames: false };
	TrimEngine::new(options)?.trim(header, source)
}

#[derive(Debug, Clone, Copy)]
pub struct TrimEngine {
	options: TrimOptions,
}

impl TrimEngine {
	/// Fails with `InvalidRatio` here, before any byte is read.
	pub fn new(options: TrimOptions) -> Result<Self> {
		options.validate()?;
		Ok(Self { options })
	}

	pub fn target_size(&self, header: &WaveHeader) -> u32 {
		let size = compute_trimmed_size(header.subchunk2_size, self.options.ratio);
		if self.options.align_frames { align_to_frame(size, header.frame_size()) } else { size }
	}

	pub fn trim<S: ByteSource>(
		&self,
		header: &WaveHeader,
		source: S,
	) -> Result<(WaveHeader, AudioBuffer)> {
		let original_size = header.subchunk2_size;
		let new_size = self.target_size(header);
		let buffer = select_window(source, original_size, new_size, self.options.window)?;
		finish(header, original_size, buffer)
	}

	/// Same as [`TrimEngine::trim`] for a payload already in memory. The buffer is
	/// consumed and its allocation reused for the result.
	pub fn trim_buffer(
		&self,
		header: &WaveHeader,
		buffer: AudioBuffer,
	) -> Result<(WaveHeader, AudioBuffer)> {
		let original_size = header.subchunk2_size;
		if (buffer.len() as u64) < original_size as u64 {
			return Err(TrimError::ShortRead {
				expected: original_size as u64,
				found: buffer.len() as u64,
			});
		}

		let new_size = self.target_size(header);
		let start = window_start(original_size, new_size, self.options.window)? as usize;

		let mut data = buffer.into_inner();
		data.truncate(start + new_size as usize);
		data.drain(..start);

		finish(header, original_size, AudioBuffer::new(data))
	}
}

fn finish(
	header: &WaveHeader,
	original_size: u32,
	buffer: AudioBuffer,
) -> Result<(WaveHeader, AudioBuffer)> {
	let new_size = buffer.len() as u32;
	let trimmed = update_header(header, original_size, new_size);
	check_result(header, &trimmed, original_size, &buffer)?;
	Ok((trimmed, buffer))
}

fn check_result(
	before: &WaveHeader,
	after: &WaveHeader,
	original_size: u32,
	buffer: &AudioBuffer,
) -> Result<()> {
	if !after.is_consistent() {
		return Err(TrimError::CorruptResult("trimmed header failed consistency check".into()));
	}
	if after.subchunk2_size as usize != buffer.len() {
		return Err(TrimError::CorruptResult(format!(
			"header declares {} bytes but payload holds {}",
			after.subchunk2_size,
			buffer.len()
		)));
	}
	let removed = original_size - after.subchunk2_size;
	if before.chunk_size < removed {
		return Err(TrimError::CorruptResult(format!(
			"chunk size {} is smaller than the {} bytes removed",
			before.chunk_size, removed
		)));
	}
	Ok(())
}

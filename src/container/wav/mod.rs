pub mod read;
pub mod write;

pub use read::parse;
pub use write::{serialize, write_wave};

use crate::error::{Result, TrimError};
use std::fmt;

pub const HEADER_SIZE: usize = 44;

pub const RIFF_TAG: [u8; 4] = *b"RIFF";
pub const WAVE_TAG: [u8; 4] = *b"WAVE";
pub const FMT_TAG: [u8; 4] = *b"fmt ";
pub const DATA_TAG: [u8; 4] = *b"data";

/// Bytes counted by `chunk_size` before the data payload starts:
/// "WAVE", the 24-byte "fmt " chunk and the 8-byte "data" chunk header.
pub const CANONICAL_CHUNK_OVERHEAD: u32 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
	Pcm,
	MuLaw,
	ALaw,
	IbmMuLaw,
	IbmALaw,
	IbmAdpcm,
	Other(u16),
}

impl From<u16> for AudioFormat {
	fn from(code: u16) -> Self {
		match code {
			1 => AudioFormat::Pcm,
			6 => AudioFormat::MuLaw,
			7 => AudioFormat::ALaw,
			257 => AudioFormat::IbmMuLaw,
			258 => AudioFormat::IbmALaw,
			259 => AudioFormat::IbmAdpcm,
			other => AudioFormat::Other(other),
		}
	}
}

impl From<AudioFormat> for u16 {
	fn from(format: AudioFormat) -> Self {
		match format {
			AudioFormat::Pcm => 1,
			AudioFormat::MuLaw => 6,
			AudioFormat::ALaw => 7,
			AudioFormat::IbmMuLaw => 257,
			AudioFormat::IbmALaw => 258,
			AudioFormat::IbmAdpcm => 259,
			AudioFormat::Other(code) => code,
		}
	}
}

impl fmt::Display for AudioFormat {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AudioFormat::Pcm => f.write_str("PCM"),
			AudioFormat::MuLaw => f.write_str("mu-law"),
			AudioFormat::ALaw => f.write_str("A-law"),
			AudioFormat::IbmMuLaw => f.write_str("IBM mu-law"),
			AudioFormat::IbmALaw => f.write_str("IBM A-law"),
			AudioFormat::IbmAdpcm => f.write_str("IBM ADPCM"),
			AudioFormat::Other(code) => write!(f, "unknown ({})", code),
		}
	}
}

/// The canonical 44-byte RIFF/WAVE header: a "RIFF" descriptor, one "fmt " chunk
/// and the header of the "data" chunk. Multi-byte fields are little-endian on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveHeader {
	pub chunk_id: [u8; 4],
	pub chunk_size: u32,
	pub format: [u8; 4],
	pub subchunk1_id: [u8; 4],
	pub subchunk1_size: u32,
	pub audio_format: u16,
	pub num_channels: u16,
	pub sample_rate: u32,
	pub byte_rate: u32,
	pub block_align: u16,
	pub bits_per_sample: u16,
	pub subchunk2_id: [u8; 4],
	pub subchunk2_size: u32,
}

impl WaveHeader {
	/// Builds a consistent PCM header for `data_size` bytes of audio.
	pub fn pcm(num_channels: u16, sample_rate: u32, bits_per_sample: u16, data_size: u32) -> Self {
		let bits = num_channels as u64 * bits_per_sample as u64;
		Self {
			chunk_id: RIFF_TAG,
			chunk_size: CANONICAL_CHUNK_OVERHEAD + data_size,
			format: WAVE_TAG,
			subchunk1_id: FMT_TAG,
			subchunk1_size: 16,
			audio_format: AudioFormat::Pcm.into(),
			num_channels,
			sample_rate,
			byte_rate: (sample_rate as u64 * bits / 8) as u32,
			block_align: (bits / 8) as u16,
			bits_per_sample,
			subchunk2_id: DATA_TAG,
			subchunk2_size: data_size,
		}
	}

	pub fn from_bytes(buf: &[u8; HEADER_SIZE]) -> Self {
		let tag = |at: usize| [buf[at], buf[at + 1], buf[at + 2], buf[at + 3]];
		let u16_at = |at: usize| u16::from_le_bytes([buf[at], buf[at + 1]]);
		let u32_at = |at: usize| u32::from_le_bytes(tag(at));

		Self {
			chunk_id: tag(0),
			chunk_size: u32_at(4),
			format: tag(8),
			subchunk1_id: tag(12),
			subchunk1_size: u32_at(16),
			audio_format: u16_at(20),
			num_channels: u16_at(22),
			sample_rate: u32_at(24),
			byte_rate: u32_at(28),
			block_align: u16_at(32),
			bits_per_sample: u16_at(34),
			subchunk2_id: tag(36),
			subchunk2_size: u32_at(40),
		}
	}

	pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
		let mut buf = [0u8; HEADER_SIZE];
		buf[0..4].copy_from_slice(&self.chunk_id);
		buf[4..8].copy_from_slice(&self.chunk_size.to_le_bytes());
		buf[8..12].copy_from_slice(&self.format);
		buf[12..16].copy_from_slice(&self.subchunk1_id);
		buf[16..20].copy_from_slice(&self.subchunk1_size.to_le_bytes());
		buf[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
		buf[22..24].copy_from_slice(&self.num_channels.to_le_bytes());
		buf[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
		buf[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
		buf[32..34].copy_from_slice(&self.block_align.to_le_bytes());
		buf[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
		buf[36..40].copy_from_slice(&self.subchunk2_id);
		buf[40..44].copy_from_slice(&self.subchunk2_size.to_le_bytes());
		buf
	}

	pub fn audio_format(&self) -> AudioFormat {
		AudioFormat::from(self.audio_format)
	}

	pub fn expected_block_align(&self) -> u64 {
		self.num_channels as u64 * self.bits_per_sample as u64 / 8
	}

	pub fn expected_byte_rate(&self) -> u64 {
		self.sample_rate as u64 * self.num_channels as u64 * self.bits_per_sample as u64 / 8
	}

	pub fn is_consistent(&self) -> bool {
		self.byte_rate as u64 == self.expected_byte_rate()
			&& self.block_align as u64 == self.expected_block_align()
	}

	/// Checks the four chunk tags, then the byte-rate and block-align relations.
	pub fn validate(&self) -> Result<()> {
		check_tag("RIFF", &self.chunk_id, &RIFF_TAG)?;
		check_tag("WAVE", &self.format, &WAVE_TAG)?;
		check_tag("fmt", &self.subchunk1_id, &FMT_TAG)?;
		check_tag("data", &self.subchunk2_id, &DATA_TAG)?;

		if !self.is_consistent() {
			return Err(TrimError::CorruptHeader {
				byte_rate: self.byte_rate,
				expected_byte_rate: self.expected_byte_rate(),
				block_align: self.block_align,
				expected_block_align: self.expected_block_align(),
			});
		}

		Ok(())
	}

	/// Bytes per sample frame, `num_channels * bits_per_sample / 8`.
	pub fn frame_size(&self) -> u32 {
		self.expected_block_align() as u32
	}

	pub fn file_size(&self) -> u64 {
		self.chunk_size as u64 + 8
	}

	pub fn duration_secs(&self) -> f64 {
		if self.byte_rate == 0 {
			return 0.0;
		}
		self.subchunk2_size as f64 / self.byte_rate as f64
	}
}

fn check_tag(field: &'static str, found: &[u8; 4], expected: &[u8; 4]) -> Result<()> {
	if found == expected {
		return Ok(());
	}
	Err(TrimError::InvalidTag {
		field,
		expected: String::from_utf8_lossy(expected).into_owned(),
		found: String::from_utf8_lossy(found).into_owned(),
	})
}

pub fn tag_str(tag: &[u8; 4]) -> String {
	String::from_utf8_lossy(tag).into_owned()
}

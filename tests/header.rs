mod common;

use wavtrim::container::wav::{self, HEADER_SIZE};
use wavtrim::io::Cursor;
use wavtrim::{AudioFormat, TrimError, WaveHeader};

#[test]
fn test_parse_canonical_stereo_header() {
	let data = common::create_stereo_wav(1000);
	let header = wav::parse(data.as_slice()).unwrap();

	assert_eq!(&header.chunk_id, b"RIFF");
	assert_eq!(header.chunk_size, 1036);
	assert_eq!(&header.format, b"WAVE");
	assert_eq!(&header.subchunk1_id, b"fmt ");
	assert_eq!(header.subchunk1_size, 16);
	assert_eq!(header.audio_format(), AudioFormat::Pcm);
	assert_eq!(header.num_channels, 2);
	assert_eq!(header.sample_rate, 44100);
	assert_eq!(header.byte_rate, 176400);
	assert_eq!(header.block_align, 4);
	assert_eq!(header.bits_per_sample, 16);
	assert_eq!(&header.subchunk2_id, b"data");
	assert_eq!(header.subchunk2_size, 1000);
	assert_eq!(header.file_size(), 1044);
	assert!(header.is_consistent());
	assert!(header.validate().is_ok());
}

#[test]
fn test_parse_leaves_source_at_payload_start() {
	let data = common::create_stereo_wav(16);
	let mut cursor = Cursor::new(data);
	wav::parse(&mut cursor).unwrap();
	assert_eq!(cursor.position(), HEADER_SIZE as u64);
}

#[test]
fn test_parse_short_input() {
	let data = common::create_stereo_wav(0);
	let result = wav::parse(&data[..43]);
	assert!(matches!(result, Err(TrimError::ShortRead { expected: 44, found: 43 })));

	let result = wav::parse(&[0u8; 0][..]);
	assert!(matches!(result, Err(TrimError::ShortRead { expected: 44, found: 0 })));
}

#[test]
fn test_serialize_then_parse_roundtrip() {
	let header = WaveHeader::pcm(2, 48000, 24, 6000);
	let mut out: Vec<u8> = Vec::new();
	wav::serialize(&header, &mut out).unwrap();

	assert_eq!(out.len(), HEADER_SIZE);
	assert_eq!(wav::parse(out.as_slice()).unwrap(), header);
}

#[test]
fn test_roundtrip_does_not_require_valid_fields() {
	let header = WaveHeader {
		chunk_id: *b"RIFX",
		chunk_size: 7,
		format: *b"AVI ",
		subchunk1_id: *b"junk",
		subchunk1_size: 40,
		audio_format: 259,
		num_channels: 0,
		sample_rate: 1,
		byte_rate: 99,
		block_align: 3,
		bits_per_sample: 5,
		subchunk2_id: *b"LIST",
		subchunk2_size: u32::MAX,
	};
	assert_eq!(WaveHeader::from_bytes(&header.to_bytes()), header);
}

#[test]
fn test_serialized_layout_is_little_endian() {
	let header = WaveHeader::pcm(2, 44100, 16, 1000);
	let bytes = header.to_bytes();

	assert_eq!(&bytes[0..4], b"RIFF");
	assert_eq!(&bytes[4..8], &1036u32.to_le_bytes());
	assert_eq!(&bytes[22..24], &[2, 0]);
	assert_eq!(&bytes[24..28], &44100u32.to_le_bytes());
	assert_eq!(&bytes[28..32], &176400u32.to_le_bytes());
	assert_eq!(&bytes[32..34], &[4, 0]);
	assert_eq!(&bytes[36..40], b"data");
	assert_eq!(&bytes[40..44], &1000u32.to_le_bytes());
}

#[test]
fn test_cd_quality_rates() {
	let header = WaveHeader::pcm(2, 44100, 16, 0);
	assert_eq!(header.expected_byte_rate(), 176400);
	assert_eq!(header.expected_block_align(), 4);
	assert!(header.is_consistent());
}

#[test]
fn test_byte_rate_off_by_any_amount_is_rejected() {
	for delta in [1i64, -1, 2, 4, -176400, 1000] {
		let mut header = WaveHeader::pcm(2, 44100, 16, 1000);
		header.byte_rate = (header.byte_rate as i64 + delta) as u32;
		assert!(!header.is_consistent(), "delta {} accepted", delta);
		assert!(matches!(
			header.validate(),
			Err(TrimError::CorruptHeader { expected_byte_rate: 176400, .. })
		));
	}
}

#[test]
fn test_block_align_mismatch_is_rejected() {
	let mut header = WaveHeader::pcm(1, 8000, 8, 100);
	header.block_align = 2;
	assert!(!header.is_consistent());
}

#[test]
fn test_consistency_truncates_odd_bit_depths() {
	// 12-bit mono: 8000 * 12 / 8 = 12000 bytes/s, 12 / 8 = 1 byte per block.
	let mut header = WaveHeader::pcm(1, 8000, 12, 0);
	assert_eq!(header.byte_rate, 12000);
	assert_eq!(header.block_align, 1);
	assert!(header.is_consistent());

	header.block_align = 2;
	assert!(!header.is_consistent());
}

#[test]
fn test_validate_checks_tags() {
	let mut header = WaveHeader::pcm(1, 8000, 8, 0);
	header.chunk_id = *b"RIFX";
	match header.validate() {
		Err(TrimError::InvalidTag { field, expected, found }) => {
			assert_eq!(field, "RIFF");
			assert_eq!(expected, "RIFF");
			assert_eq!(found, "RIFX");
		}
		other => panic!("unexpected result: {:?}", other),
	}

	let mut header = WaveHeader::pcm(1, 8000, 8, 0);
	header.subchunk2_id = *b"LIST";
	assert!(matches!(header.validate(), Err(TrimError::InvalidTag { field: "data", .. })));
}

#[test]
fn test_audio_format_codes() {
	assert_eq!(AudioFormat::from(1), AudioFormat::Pcm);
	assert_eq!(AudioFormat::from(6), AudioFormat::MuLaw);
	assert_eq!(AudioFormat::from(7), AudioFormat::ALaw);
	assert_eq!(AudioFormat::from(257), AudioFormat::IbmMuLaw);
	assert_eq!(AudioFormat::from(258), AudioFormat::IbmALaw);
	assert_eq!(AudioFormat::from(259), AudioFormat::IbmAdpcm);
	assert_eq!(AudioFormat::from(3), AudioFormat::Other(3));
	assert_eq!(u16::from(AudioFormat::IbmAdpcm), 259);
	assert_eq!(AudioFormat::MuLaw.to_string(), "mu-law");
}

#[test]
fn test_duration() {
	let header = WaveHeader::pcm(2, 44100, 16, 176400 * 3);
	assert!((header.duration_secs() - 3.0).abs() < 1e-9);

	let mut silent = header;
	silent.byte_rate = 0;
	assert_eq!(silent.duration_secs(), 0.0);
}

#![allow(dead_code)]

pub fn ramp(len: usize) -> Vec<u8> {
	(0..len).map(|i| (i % 251) as u8).collect()
}

pub fn create_wav(channels: u16, sample_rate: u32, bits_per_sample: u16, payload: &[u8]) -> Vec<u8> {
	let data_size = payload.len() as u32;
	let byte_rate = sample_rate * channels as u32 * bits_per_sample as u32 / 8;
	let block_align = channels * bits_per_sample / 8;

	let mut wav = Vec::new();

	wav.extend_from_slice(b"RIFF");
	wav.extend_from_slice(&(36 + data_size).to_le_bytes());
	wav.extend_from_slice(b"WAVE");

	wav.extend_from_slice(b"fmt ");
	wav.extend_from_slice(&16u32.to_le_bytes());
	wav.extend_from_slice(&1u16.to_le_bytes());
	wav.extend_from_slice(&channels.to_le_bytes());
	wav.extend_from_slice(&sample_rate.to_le_bytes());
	wav.extend_from_slice(&byte_rate.to_le_bytes());
	wav.extend_from_slice(&block_align.to_le_bytes());
	wav.extend_from_slice(&bits_per_sample.to_le_bytes());

	wav.extend_from_slice(b"data");
	wav.extend_from_slice(&data_size.to_le_bytes());

	wav.extend_from_slice(payload);
	wav
}

pub fn create_stereo_wav(payload_len: usize) -> Vec<u8> {
	create_wav(2, 44100, 16, &ramp(payload_len))
}

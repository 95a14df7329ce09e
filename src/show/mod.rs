use crate::container::WaveHeader;
use crate::container::wav::tag_str;
use prettytable::format::consts::FORMAT_NO_LINESEP_WITH_TITLE;
use prettytable::{Table, row};

pub fn header_table(file_len: u64, header: &WaveHeader) -> Table {
	let mut table = Table::new();
	table.set_format(*FORMAT_NO_LINESEP_WITH_TITLE);
	table.set_titles(row!["Header Info", "Value"]);

	table.add_row(row!["File size", format!("{} bytes", file_len)]);
	table.add_row(row!["RIFF header", tag_str(&header.chunk_id)]);
	table.add_row(row!["Chunk size", format!("{} bytes", header.chunk_size)]);
	table.add_row(row!["WAVE header", tag_str(&header.format)]);
	table.add_row(row!["FMT", tag_str(&header.subchunk1_id)]);
	table.add_row(row!["Subchunk1 size", format!("{} bytes", header.subchunk1_size)]);
	table.add_row(row!["Audio format", format!("{} ({})", header.audio_format, header.audio_format())]);
	table.add_row(row!["Channels", header.num_channels]);
	table.add_row(row!["Sample rate", format!("{} Hz", header.sample_rate)]);
	table.add_row(row!["Byte rate", format!("{} bytes/s", header.byte_rate)]);
	table.add_row(row!["Block align", header.block_align]);
	table.add_row(row!["Bits per sample", header.bits_per_sample]);
	table.add_row(row!["Subchunk2 ID", tag_str(&header.subchunk2_id)]);
	table.add_row(row!["Data size", format!("{} bytes", header.subchunk2_size)]);
	table.add_row(row!["Duration", format!("{:.3} s", header.duration_secs())]);

	table
}

pub fn print_header(file_len: u64, header: &WaveHeader) {
	header_table(file_len, header).printstd();
}

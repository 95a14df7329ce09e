use crate::error::Result;
use crate::trim::{DEFAULT_RATIO, TrimOptions};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "wavtrim")]
#[command(about = env!("CARGO_PKG_DESCRIPTION"), long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	#[arg(short, long, value_name = "FILE", help = "Input .wav file or glob pattern")]
	pub input: String,

	#[arg(
		short,
		long,
		value_name = "FILE",
		help = "Output file, or directory for glob input (default: trimmed_<input>)"
	)]
	pub output: Option<String>,

	#[arg(short, long, value_name = "RATIO", default_value_t = DEFAULT_RATIO, help = "Fraction of the audio data to keep")]
	pub ratio: f32,

	#[arg(short = 'e', long, help = "Keep the end of the audio instead of the start")]
	pub from_end: bool,

	#[arg(short, long, value_name = "OFFSET", help = "Keep the data starting at this byte offset")]
	pub seek: Option<u32>,

	#[arg(long, help = "Round the kept size down to whole sample frames")]
	pub frame_align: bool,

	#[arg(short, long, help = "Verbose output")]
	pub verbose: bool,
}

impl Args {
	pub fn parse() -> Self {
		<Self as clap::Parser>::parse()
	}

	pub fn trim_options(&self) -> Result<TrimOptions> {
		TrimOptions::from_flags(self.ratio, self.from_end, self.seek, self.frame_align)
	}
}

use crate::error::{Result, TrimError};

pub const DEFAULT_RATIO: f32 = 0.5;

/// Which part of the payload survives the trim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrimWindow {
	#[default]
	Start,
	End,
	/// Keep the bytes starting this far into the payload.
	Offset(u32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimOptions {
	pub ratio: f32,
	pub window: TrimWindow,
	pub align_frames: bool,
}

impl Default for TrimOptions {
	fn default() -> Self {
		Self { ratio: DEFAULT_RATIO, window: TrimWindow::Start, align_frames: false }
	}
}

impl TrimOptions {
	pub fn new(ratio: f32) -> Self {
		Self { ratio, ..Self::default() }
	}

	pub fn from_end(mut self) -> Self {
		self.window = TrimWindow::End;
		self
	}

	pub fn with_offset(mut self, offset: u32) -> Self {
		self.window = TrimWindow::Offset(offset);
		self
	}

	pub fn with_frame_alignment(mut self) -> Self {
		self.align_frames = true;
		self
	}

	/// Builds options from command-line style flags. Trimming from the end and
	/// seeking to an offset both choose the window, so only one may be given.
	pub fn from_flags(ratio: f32, from_end: bool, seek: Option<u32>, align_frames: bool) -> Result<Self> {
		let window = match (from_end, seek) {
			(true, Some(_)) => {
				return Err(TrimError::ConflictingOptions("specify only one of from-end and seek"));
			}
			(true, None) => TrimWindow::End,
			(false, Some(offset)) => TrimWindow::Offset(offset),
			(false, None) => TrimWindow::Start,
		};

		let options = Self { ratio, window, align_frames };
		options.validate()?;
		Ok(options)
	}

	pub fn validate(&self) -> Result<()> {
		check_ratio(self.ratio)
	}
}

// Written as a negated range test so NaN is rejected too.
pub fn check_ratio(ratio: f32) -> Result<()> {
	if !(ratio > 0.0 && ratio <= 1.0) {
		return Err(TrimError::InvalidRatio(ratio));
	}
	Ok(())
}

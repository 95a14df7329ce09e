use crate::io::IoResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekFrom {
	Start(u64),
	End(i64),
	Current(i64),
}

impl From<SeekFrom> for std::io::SeekFrom {
	#[inline]
	fn from(pos: SeekFrom) -> Self {
		match pos {
			SeekFrom::Start(n) => std::io::SeekFrom::Start(n),
			SeekFrom::End(n) => std::io::SeekFrom::End(n),
			SeekFrom::Current(n) => std::io::SeekFrom::Current(n),
		}
	}
}

pub trait MediaSeek {
	fn seek(&mut self, pos: SeekFrom) -> IoResult<u64>;

	#[inline]
	fn stream_position(&mut self) -> IoResult<u64> {
		self.seek(SeekFrom::Current(0))
	}

	fn stream_len(&mut self) -> IoResult<u64> {
		let current = self.stream_position()?;
		let end = self.seek(SeekFrom::End(0))?;
		if current != end {
			self.seek(SeekFrom::Start(current))?;
		}
		Ok(end)
	}

	/// Bytes left between the current position and the end of the stream.
	fn remaining(&mut self) -> IoResult<u64> {
		let current = self.stream_position()?;
		Ok(self.stream_len()?.saturating_sub(current))
	}
}

impl<S: MediaSeek + ?Sized> MediaSeek for &mut S {
	#[inline]
	fn seek(&mut self, pos: SeekFrom) -> IoResult<u64> {
		(**self).seek(pos)
	}
}

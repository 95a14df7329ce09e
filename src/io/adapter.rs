use crate::io::{IoError, IoResult, MediaRead, MediaSeek, MediaWrite, SeekFrom};

/// Bridges any `std::io` reader, writer or seeker into the media traits.
pub struct StdAdapter<T> {
	inner: T,
}

impl<T> StdAdapter<T> {
	#[inline]
	pub const fn new(inner: T) -> Self {
		Self { inner }
	}

	#[inline]
	pub fn into_inner(self) -> T {
		self.inner
	}
}

impl<T: std::io::Read> MediaRead for StdAdapter<T> {
	#[inline]
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		self.inner.read(buf).map_err(IoError::from)
	}
}

impl<T: std::io::Seek> MediaSeek for StdAdapter<T> {
	#[inline]
	fn seek(&mut self, pos: SeekFrom) -> IoResult<u64> {
		self.inner.seek(pos.into()).map_err(IoError::from)
	}
}

impl<T: std::io::Write> MediaWrite for StdAdapter<T> {
	#[inline]
	fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
		self.inner.write(buf).map_err(IoError::from)
	}

	#[inline]
	fn flush(&mut self) -> IoResult<()> {
		self.inner.flush().map_err(IoError::from)
	}
}

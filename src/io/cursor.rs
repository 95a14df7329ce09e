use crate::io::{IoError, IoResult, MediaRead, MediaSeek, MediaWrite, SeekFrom};

#[derive(Debug, Clone, Default)]
pub struct Cursor<T> {
	inner: T,
	pos: u64,
}

impl<T> Cursor<T> {
	#[inline]
	pub const fn new(inner: T) -> Self {
		Self { inner, pos: 0 }
	}

	#[inline]
	pub fn into_inner(self) -> T {
		self.inner
	}

	#[inline]
	pub const fn position(&self) -> u64 {
		self.pos
	}
}

impl<T: AsRef<[u8]>> Cursor<T> {
	fn remaining_slice(&self) -> &[u8] {
		let data = self.inner.as_ref();
		let start = core::cmp::min(self.pos, data.len() as u64) as usize;
		&data[start..]
	}
}

impl<T: AsRef<[u8]>> MediaRead for Cursor<T> {
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		let src = self.remaining_slice();
		let amt = core::cmp::min(src.len(), buf.len());
		buf[..amt].copy_from_slice(&src[..amt]);
		self.pos += amt as u64;
		Ok(amt)
	}
}

impl<T: AsRef<[u8]>> MediaSeek for Cursor<T> {
	fn seek(&mut self, pos: SeekFrom) -> IoResult<u64> {
		let (base, offset) = match pos {
			SeekFrom::Start(n) => {
				self.pos = n;
				return Ok(n);
			}
			SeekFrom::End(n) => (self.inner.as_ref().len() as u64, n),
			SeekFrom::Current(n) => (self.pos, n),
		};

		match base.checked_add_signed(offset) {
			Some(n) => {
				self.pos = n;
				Ok(n)
			}
			None => Err(IoError::invalid_input("invalid seek to a negative or overflowing position")),
		}
	}
}

impl MediaWrite for Cursor<Vec<u8>> {
	fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
		let pos = self.pos as usize;
		let end = pos + buf.len();
		if self.inner.len() < end {
			self.inner.resize(end, 0);
		}
		self.inner[pos..end].copy_from_slice(buf);
		self.pos = end as u64;
		Ok(buf.len())
	}

	#[inline]
	fn flush(&mut self) -> IoResult<()> {
		Ok(())
	}
}

use crate::io::{IoError, IoErrorKind, IoResult};

pub trait MediaRead {
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize>;
}

pub trait ReadPrimitives: MediaRead {
	/// Fills as much of `buf` as the stream allows and returns how many bytes landed.
	/// Unlike `read_exact`, running out of input is not an error here.
	fn read_up_to(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		let mut filled = 0;
		while filled < buf.len() {
			match self.read(&mut buf[filled..]) {
				Ok(0) => break,
				Ok(n) => filled += n,
				Err(e) if e.kind() == IoErrorKind::Interrupted => continue,
				Err(e) => return Err(e),
			}
		}
		Ok(filled)
	}

	fn read_exact(&mut self, buf: &mut [u8]) -> IoResult<()> {
		if self.read_up_to(buf)? < buf.len() {
			return Err(IoError::unexpected_eof());
		}
		Ok(())
	}
}

impl<T: MediaRead + ?Sized> ReadPrimitives for T {}

impl MediaRead for &[u8] {
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		let amt = core::cmp::min(self.len(), buf.len());
		let (a, b) = self.split_at(amt);
		buf[..amt].copy_from_slice(a);
		*self = b;
		Ok(amt)
	}
}

impl<R: MediaRead + ?Sized> MediaRead for &mut R {
	#[inline]
	fn read(&mut self, buf: &mut [u8]) -> IoResult<usize> {
		(**self).read(buf)
	}
}

use crate::io::{IoError, IoErrorKind, IoResult};

pub trait MediaWrite {
	fn write(&mut self, buf: &[u8]) -> IoResult<usize>;

	fn flush(&mut self) -> IoResult<()>;
}

pub trait WritePrimitives: MediaWrite {
	fn write_all(&mut self, mut buf: &[u8]) -> IoResult<()> {
		while !buf.is_empty() {
			match self.write(buf) {
				Ok(0) => return Err(IoError::write_zero()),
				Ok(n) => buf = &buf[n..],
				Err(e) if e.kind() == IoErrorKind::Interrupted => continue,
				Err(e) => return Err(e),
			}
		}
		Ok(())
	}
}

impl<T: MediaWrite + ?Sized> WritePrimitives for T {}

impl MediaWrite for Vec<u8> {
	#[inline]
	fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
		self.extend_from_slice(buf);
		Ok(buf.len())
	}

	#[inline]
	fn flush(&mut self) -> IoResult<()> {
		Ok(())
	}
}

impl<W: MediaWrite + ?Sized> MediaWrite for &mut W {
	#[inline]
	fn write(&mut self, buf: &[u8]) -> IoResult<usize> {
		(**self).write(buf)
	}

	#[inline]
	fn flush(&mut self) -> IoResult<()> {
		(**self).flush()
	}
}

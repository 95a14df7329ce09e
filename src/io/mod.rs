mod adapter;
mod cursor;
mod error;
mod reader;
mod seek;
mod writer;

pub use adapter::StdAdapter;
pub use cursor::Cursor;
pub use error::{IoError, IoErrorKind, IoResult};
pub use reader::{MediaRead, ReadPrimitives};
pub use seek::{MediaSeek, SeekFrom};
pub use writer::{MediaWrite, WritePrimitives};

/// A readable stream that can also reposition itself, such as an open file.
pub trait ByteSource: MediaRead + MediaSeek {}

impl<T: MediaRead + MediaSeek + ?Sized> ByteSource for T {}

pub trait ByteSink: MediaWrite {}

impl<T: MediaWrite + ?Sized> ByteSink for T {}

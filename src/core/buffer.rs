/// Owned audio payload bytes. Trimming consumes one buffer and hands back a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioBuffer {
	data: Vec<u8>,
}

impl AudioBuffer {
	pub fn new(data: Vec<u8>) -> Self {
		Self { data }
	}

	pub fn zeroed(len: usize) -> Self {
		Self { data: vec![0u8; len] }
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn as_slice(&self) -> &[u8] {
		&self.data
	}

	pub fn as_mut_slice(&mut self) -> &mut [u8] {
		&mut self.data
	}

	pub fn into_inner(self) -> Vec<u8> {
		self.data
	}
}

impl From<Vec<u8>> for AudioBuffer {
	fn from(data: Vec<u8>) -> Self {
		Self::new(data)
	}
}

impl AsRef<[u8]> for AudioBuffer {
	fn as_ref(&self) -> &[u8] {
		&self.data
	}
}

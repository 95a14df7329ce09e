mod buffer;

pub use buffer::AudioBuffer;

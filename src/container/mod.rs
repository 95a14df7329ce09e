pub mod wav;

pub use wav::{AudioFormat, HEADER_SIZE, WaveHeader};

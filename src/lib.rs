pub mod cli;
pub mod container;
pub mod core;
pub mod error;
pub mod io;
pub mod show;
pub mod trim;

pub use container::{AudioFormat, WaveHeader};
pub use crate::core::AudioBuffer;
pub use error::{Result, TrimError};
pub use trim::{TrimEngine, TrimOptions, TrimWindow};

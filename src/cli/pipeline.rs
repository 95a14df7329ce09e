use crate::container::{HEADER_SIZE, WaveHeader, wav};
use crate::core::AudioBuffer;
use crate::error::{Result, TrimError};
use crate::io::{IoError, IoErrorKind, MediaSeek, StdAdapter};
use crate::show;
use crate::trim::{TrimEngine, TrimOptions};
use log::{info, warn};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub type FileAdapter = StdAdapter<BufReader<File>>;

pub fn open_file(path: &str) -> Result<FileAdapter> {
	let file = File::open(path).map_err(|e| {
		IoError::new(IoErrorKind::from(e.kind()), format!("error opening wave file {}: {}", path, e))
	})?;
	Ok(StdAdapter::new(BufReader::new(file)))
}

/// `dir/song.wav` becomes `dir/trimmed_song.wav`.
pub fn default_output_path(input: &str) -> PathBuf {
	let path = Path::new(input);
	let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
	path.with_file_name(format!("trimmed_{}.wav", stem))
}

pub struct Pipeline {
	input_path: String,
	output_path: Option<String>,
	options: TrimOptions,
	verbose: bool,
}

impl Pipeline {
	pub fn new(
		input_path: String,
		output_path: Option<String>,
		options: TrimOptions,
		verbose: bool,
	) -> Self {
		Self { input_path, output_path, options, verbose }
	}

	pub fn output_path(&self) -> PathBuf {
		match &self.output_path {
			Some(path) => PathBuf::from(path),
			None => default_output_path(&self.input_path),
		}
	}

	pub fn run(&self) -> Result<PathBuf> {
		let engine = TrimEngine::new(self.options)?;
		let (header, buffer) = self.read_trimmed(&engine)?;

		let output_path = self.output_path();
		write_output(&output_path, &header, &buffer)?;
		info!("saved to file: {}", output_path.display());

		Ok(output_path)
	}

	fn read_trimmed(&self, engine: &TrimEngine) -> Result<(WaveHeader, AudioBuffer)> {
		let mut input = open_file(&self.input_path)?;
		info!("opened wave file {}", self.input_path);

		let file_len = input.stream_len()?;
		let header = wav::parse(&mut input)?;
		header.validate()?;
		info!("read {} header bytes", HEADER_SIZE);

		if self.verbose {
			show::print_header(file_len, &header);
		}

		let (trimmed, buffer) = engine.trim(&header, &mut input)?;
		info!("read {} of {} data bytes", buffer.len(), header.subchunk2_size);

		if self.verbose {
			show::print_header(HEADER_SIZE as u64 + trimmed.subchunk2_size as u64, &trimmed);
		}

		Ok((trimmed, buffer))
	}
}

// Writes into a temporary file next to `path` and renames it into place, so an
// existing output is left untouched unless the whole file was written.
fn write_output(path: &Path, header: &WaveHeader, buffer: &AudioBuffer) -> Result<()> {
	let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
	let mut temp = NamedTempFile::new_in(dir)?;

	let mut output = StdAdapter::new(BufWriter::new(temp.as_file_mut()));
	wav::write_wave(&mut output, header, buffer)?;
	drop(output);

	temp.persist(path).map_err(|e| e.error)?;
	Ok(())
}

pub struct BatchPipeline {
	input_pattern: String,
	output_dir: Option<String>,
	options: TrimOptions,
	verbose: bool,
}

impl BatchPipeline {
	pub fn new(
		input_pattern: String,
		output_dir: Option<String>,
		options: TrimOptions,
		verbose: bool,
	) -> Self {
		Self { input_pattern, output_dir, options, verbose }
	}

	/// Returns each input path paired with the file written for it.
	pub fn run(&self) -> Result<Vec<(String, PathBuf)>> {
		let files = self.expand_glob()?;

		if files.is_empty() {
			return Err(TrimError::Io(IoError::new(
				IoErrorKind::NotFound,
				format!("no files matching pattern: {}", self.input_pattern),
			)));
		}

		if let Some(dir) = &self.output_dir {
			fs::create_dir_all(dir)?;
		}

		let mut outputs = Vec::with_capacity(files.len());
		for input_path in files {
			let output_path = self.output_dir.as_ref().map(|dir| {
				let file_name = default_output_path(&input_path)
					.file_name()
					.map(|n| n.to_string_lossy().into_owned())
					.unwrap_or_else(|| "trimmed_output.wav".to_string());
				Path::new(dir).join(file_name).to_string_lossy().into_owned()
			});

			info!("processing: {}", input_path);
			let pipeline = Pipeline::new(input_path.clone(), output_path, self.options, self.verbose);
			outputs.push((input_path, pipeline.run()?));
		}

		Ok(outputs)
	}

	fn expand_glob(&self) -> Result<Vec<String>> {
		let mut files = Vec::new();

		if !is_batch_pattern(&self.input_pattern) {
			files.push(self.input_pattern.clone());
			return Ok(files);
		}

		let entries = glob::glob(&self.input_pattern).map_err(|e| {
			IoError::invalid_input(format!("invalid glob pattern: {}", e))
		})?;

		for entry in entries {
			match entry {
				Ok(path) => {
					if path.is_file() {
						files.push(path.to_string_lossy().to_string());
					}
				}
				Err(e) => warn!("failed to read entry: {}", e),
			}
		}

		Ok(files)
	}
}

pub fn is_batch_pattern(input: &str) -> bool {
	input.contains(['*', '?', '['])
}

pub fn is_directory(path: &str) -> bool {
	Path::new(path).is_dir()
}

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: StderrLogger = StderrLogger;

pub struct StderrLogger;

impl Log for StderrLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &Record) {
		if self.enabled(record.metadata()) {
			eprintln!("[{}] {}", record.level().as_str().to_lowercase(), record.args());
		}
	}

	fn flush(&self) {}
}

pub fn level_for(verbose: bool) -> LevelFilter {
	if verbose { LevelFilter::Info } else { LevelFilter::Warn }
}

/// Installs the stderr logger once per process.
pub fn init(verbose: bool) -> Result<(), SetLoggerError> {
	log::set_logger(&LOGGER).map(|()| log::set_max_level(level_for(verbose)))
}

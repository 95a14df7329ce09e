use std::path::PathBuf;
use wavtrim::cli::{Args, BatchPipeline, Pipeline, is_batch_pattern, is_directory, logger};

fn main() {
	let args = Args::parse();

	if let Err(e) = logger::init(args.verbose) {
		eprintln!("Warning: {}", e);
	}

	match run(&args) {
		Ok(outputs) => {
			for (input, output) in outputs {
				println!("ok: {} -> {}", input, output.display());
			}
		}
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	}
}

fn run(args: &Args) -> wavtrim::Result<Vec<(String, PathBuf)>> {
	let options = args.trim_options()?;

	let output_is_dir = args.output.as_deref().map(is_directory).unwrap_or(false);
	if is_batch_pattern(&args.input) || output_is_dir {
		let output_dir = args.output.clone().or_else(|| Some("out".to_string()));
		let batch = BatchPipeline::new(args.input.clone(), output_dir, options, args.verbose);
		return batch.run();
	}

	let pipeline = Pipeline::new(args.input.clone(), args.output.clone(), options, args.verbose);
	Ok(vec![(args.input.clone(), pipeline.run()?)])
}

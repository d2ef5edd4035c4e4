use std::fs::File;
use std::io::{BufReader, BufWriter};

use adts::AdtsDemuxer;
use clap::Parser;
use flv::FlvWriter;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

mod cli;
mod convert;
mod error;

use cli::CliArgs;
use error::AppError;

fn main() {
    if let Err(e) = bootstrap() {
        eprintln!("Error: {e}");
        error!(error = ?e, "Conversion failed");
        std::process::exit(1);
    }
}

fn bootstrap() -> Result<(), AppError> {
    let args = CliArgs::parse();

    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Initialization(e.to_string()))?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("flv"));
    if output == args.input {
        return Err(AppError::InvalidInput(format!(
            "output path {} would overwrite the input",
            output.display()
        )));
    }

    info!(
        input = %args.input.display(),
        output = %output.display(),
        "remuxing ADTS AAC to FLV"
    );

    let reader = BufReader::new(File::open(&args.input)?);
    let writer = BufWriter::new(File::create(&output)?);

    let mut demuxer = AdtsDemuxer::new(reader);
    let mut muxer = FlvWriter::new(writer);

    let summary = convert::convert(&mut demuxer, &mut muxer)?;

    info!(
        frames = summary.frames,
        duration_ms = summary.duration_ms,
        "conversion complete"
    );
    Ok(())
}

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "aacflv",
    version,
    about = "Remux an ADTS-framed AAC elementary stream into an audio-only FLV file"
)]
pub struct CliArgs {
    /// Input file containing concatenated ADTS frames
    pub input: PathBuf,

    /// Output path; defaults to the input path with an `flv` extension
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

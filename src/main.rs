mod bdf_reader;
mod header_writer;
mod line_reader;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use flexi_logger::Logger;

use crate::bdf_reader::bdfreader;
use crate::header_writer::write_header;

#[derive(Parser)]
#[command(version, about = "Converts a BDF bitmap font into an sdlfont-compatible C header.")]
struct Cli {
    /// Input BDF file
    #[arg(short, long, visible_alias = "in", value_name = "PATH")]
    input: PathBuf,

    /// Output header file
    #[arg(short, long, visible_alias = "out", value_name = "PATH")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let input = File::open(&args.input).with_context(|| format!("opening {}", args.input.display()))?;
    let font = bdfreader(BufReader::new(input)).with_context(|| format!("parsing {}", args.input.display()))?;
    log::info!("parsed {} glyphs from {}", font.glyphs.len(), args.input.display());

    let output = File::create(&args.output).with_context(|| format!("creating {}", args.output.display()))?;
    let mut output = BufWriter::new(output);
    write_header(&mut output, &font).with_context(|| format!("writing {}", args.output.display()))?;
    output.flush().with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Generated {} with {} glyphs (filtered to ASCII + Cyrillic).",
        args.output.display(),
        font.glyphs.len()
    );
    Ok(())
}

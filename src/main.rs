use std::fs::File;
use std::io::{self, BufWriter};

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use curriculum::args::Options;
use curriculum::export::{Summary, write_clips};
use curriculum::{input, parse};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    let opts = Options::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(opts.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let text = input::read_source(opts.input.as_deref())?;
    let clips = parse(&text);
    info!(count = clips.len(), "parsed curriculum");

    match &opts.output {
        Some(path) => {
            let file = File::create(path)
                .wrap_err_with(|| format!("failed to create {}", path.display()))?;
            write_clips(&mut BufWriter::new(file), &clips, opts.format)?;
        }
        None => write_clips(&mut io::stdout().lock(), &clips, opts.format)?,
    }

    if opts.summary {
        eprintln!("{}", Summary::of(&clips));
    }
    Ok(())
}

mod cli;

use std::io::Write;

use clap::Parser;
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Generate(#[from] inline::Error),
    #[error("failed to open output: {0}")]
    Output(#[from] clio::Error),
    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(err) = entry() {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}

fn entry() -> Result<(), Error> {
    let cli = cli::Cli::parse();
    let invocation = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .join(" ");

    let text = inline::generate(&invocation, &cli.package, cli.lang, &cli.files)?;

    // Only touch the destination once the whole text exists.
    let mut output = cli.output.create()?;
    output.write_all(text.as_bytes())?;
    output.finish()?;
    Ok(())
}

use clap::Parser;
use clio::OutputPath;
use inline::Target;

/// Generate a source file that embeds the given files as a lookup table.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output filename; sent to stdout if none given.
    #[arg(short, long, value_parser, default_value = "-")]
    pub output: OutputPath,
    /// Package (or module) name of the generated source.
    #[arg(short, long, default_value = "main")]
    pub package: String,
    /// Language of the generated source.
    #[arg(short, long, value_enum, default_value_t = Target::Go)]
    pub lang: Target,
    /// Files to embed. Each path is used verbatim as its lookup key.
    #[arg(required = true)]
    pub files: Vec<String>,
}

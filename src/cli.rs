use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input .scene / .json scene file
    pub input: PathBuf,
    /// Output directory
    pub output: PathBuf,
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ppmpress")]
#[command(about = "Lossy compressor for binary PPM images")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compress a PPM image into a 32-bit codeword stream
    Compress {
        /// Input PPM file; stdin when omitted
        input: Option<PathBuf>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Decompress a codeword stream back into a binary PPM
    Decompress {
        /// Input compressed file; stdin when omitted
        input: Option<PathBuf>,

        /// Output file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the root mean square difference between two PPM images
    Diff {
        first: PathBuf,
        second: PathBuf,
    },
}

mod algebra;
mod binary;
mod cli;
mod codec;
mod colors;
mod diff;
mod error;
mod grid;
mod ppm;
mod quantization;
mod transform;

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use cli::{Cli, Command};
use ppm::Ppm;

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Compress { input, output } => {
            let bytes = read_input(input.as_deref())?;
            let image = Ppm::decode(&bytes)?;
            info!(
                "read {}x{} PPM ({} bytes)",
                image.width(),
                image.height(),
                bytes.len()
            );

            let compressed = codec::encode::compress(image)?;
            info!("compressed to {} bytes", compressed.len());
            write_output(output.as_deref(), &compressed)
        }
        Command::Decompress { input, output } => {
            let bytes = read_input(input.as_deref())?;
            let image = codec::decode::decompress(&bytes)?;
            info!("decompressed to {}x{} PPM", image.width(), image.height());

            write_output(output.as_deref(), &image.encode())
        }
        Command::Diff { first, second } => {
            let first_image = Ppm::decode(&read_file(&first)?)?;
            let second_image = Ppm::decode(&read_file(&second)?)?;

            let rms = diff::rms_difference(&first_image, &second_image)?;
            println!("{rms:.4}");
            Ok(())
        }
    }
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut bytes = Vec::new();
            io::stdin()
                .read_to_end(&mut bytes)
                .context("could not read stdin")?;

            Ok(bytes)
        }
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("could not open input file {}", path.display()))
}

fn write_output(path: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match path {
        Some(path) => fs::write(path, bytes)
            .with_context(|| format!("could not write output file {}", path.display())),
        None => io::stdout()
            .write_all(bytes)
            .context("could not write to stdout"),
    }
}

use log::debug;

use crate::codec::{pack_cell, MAGIC};
use crate::colors::{float_to_component, rgb_to_float};
use crate::error::CodecError;
use crate::grid::Grid;
use crate::ppm::Ppm;
use crate::{quantization, transform};

/// Runs the forward pipeline and returns the compressed byte stream:
/// header, then one big-endian codeword per cell in row-major order.
/// Odd image dimensions are trimmed to even first.
pub fn compress(image: Ppm) -> Result<Vec<u8>, CodecError> {
    if image.width() < 2 || image.height() < 2 {
        return Err(CodecError::ImageTooSmall {
            width: image.width(),
            height: image.height(),
        });
    }

    let image = image.trimmed_to_even();
    debug!(
        "compressing {}x{} image, maxval {}",
        image.width(),
        image.height(),
        image.maxval
    );

    let floats = rgb_to_float(image);
    let components = float_to_component(floats);
    let blocks = transform::forward(components);
    let cells = quantization::quantize(blocks);
    let words = pack_words(cells)?;
    debug!("packed {} codewords", words.width() * words.height());

    Ok(serialize(&words))
}

fn pack_words(cells: Grid<quantization::QuantizedBlock>) -> Result<Grid<u64>, CodecError> {
    let mut words = Vec::with_capacity(cells.width() * cells.height());
    let mut failure = None;

    cells.for_each_cell(|_, _, cell| match pack_cell(cell) {
        Ok(word) => words.push(word),
        Err(error) => failure = Some(error),
    });

    match failure {
        Some(error) => Err(error),
        None => Ok(Grid::from_cells(cells.width(), cells.height(), words)),
    }
}

fn serialize(words: &Grid<u64>) -> Vec<u8> {
    let pixel_width = words.width() * 2;
    let pixel_height = words.height() * 2;
    let header = format!("{MAGIC}\n{pixel_width} {pixel_height}\n");

    let mut bytes = Vec::with_capacity(header.len() + words.width() * words.height() * 4);
    bytes.extend_from_slice(header.as_bytes());
    words.for_each_cell(|_, _, word| {
        bytes.extend_from_slice(&(*word as u32).to_be_bytes());
    });

    bytes
}

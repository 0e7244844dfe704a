use log::debug;

use crate::binary::byte_reader::ByteReader;
use crate::codec::{unpack_cell, MAGIC};
use crate::colors::{component_to_float, float_to_rgb};
use crate::error::CodecError;
use crate::grid::Grid;
use crate::ppm::Ppm;
use crate::{quantization, transform};

/// Parses the compressed stream and runs the inverse pipeline, producing
/// a maxval-255 image. Bytes after the final codeword are ignored.
pub fn decompress(bytes: &[u8]) -> Result<Ppm, CodecError> {
    let mut reader = ByteReader::new(bytes);
    let (cell_width, cell_height) = parse_header(&mut reader)?;
    debug!("decompressing a {cell_width}x{cell_height} cell grid");

    let expected = cell_width * cell_height;
    let mut words = Vec::with_capacity(expected);
    while words.len() < expected {
        match reader.read_u32_be() {
            Some(word) => words.push(word as u64),
            None => {
                return Err(CodecError::Truncated {
                    expected,
                    found: words.len(),
                });
            }
        }
    }

    let words = Grid::from_cells(cell_width, cell_height, words);
    let cells = words.map(|word| unpack_cell(*word));
    let blocks = quantization::dequantize(cells);
    let components = transform::inverse(blocks);
    let floats = component_to_float(components);

    Ok(float_to_rgb(floats))
}

/// Reads the two header lines and returns the **cell** grid dimensions.
/// The header advertises pixel dimensions, which must be even and at
/// least 2.
fn parse_header(reader: &mut ByteReader) -> Result<(usize, usize), CodecError> {
    let magic_line = reader.read_line().ok_or(CodecError::BadMagic)?;
    if magic_line != MAGIC.as_bytes() {
        return Err(CodecError::BadMagic);
    }

    let dimension_line = reader
        .read_line()
        .ok_or_else(|| CodecError::BadHeader("missing dimension line".to_string()))?;
    let dimension_line = std::str::from_utf8(dimension_line)
        .map_err(|_e| CodecError::BadHeader("dimension line is not valid utf8".to_string()))?;

    let (width_text, height_text) = dimension_line
        .split_once(' ')
        .ok_or_else(|| CodecError::BadHeader(format!("bad dimension line {dimension_line:?}")))?;
    let width: u32 = width_text
        .parse()
        .map_err(|_e| CodecError::BadHeader(format!("bad width {width_text:?}")))?;
    let height: u32 = height_text
        .parse()
        .map_err(|_e| CodecError::BadHeader(format!("bad height {height_text:?}")))?;

    if width < 2 || height < 2 {
        return Err(CodecError::BadDimensions {
            width,
            height,
            reason: "both dimensions must be at least 2",
        });
    }
    if width % 2 != 0 || height % 2 != 0 {
        return Err(CodecError::BadDimensions {
            width,
            height,
            reason: "both dimensions must be even",
        });
    }

    Ok((width as usize / 2, height as usize / 2))
}

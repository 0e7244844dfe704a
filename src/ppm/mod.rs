use thiserror::Error;

use crate::binary::byte_reader::ByteReader;
use crate::colors::Rgb;
use crate::grid::Grid;

#[derive(Error, Debug)]
#[error("invalid PPM: {0}")]
pub struct PpmParseError(pub String);

macro_rules! ppm_read_bytes {
    ($read_value:expr, $msg:expr) => {
        match $read_value {
            Some(value) => value,
            None => {
                return Err(PpmParseError(format!(
                    "PPM stream ended unexpectedly: {}",
                    $msg
                )));
            }
        }
    };
}

const PPM_SIGNATURE: &[u8] = b"P6";

/// A binary (P6) pixel map: one byte per sample, so maxval is capped at
/// 255.
#[derive(Debug)]
pub struct Ppm {
    pub maxval: u8,
    pub pixels: Grid<Rgb>,
}

impl Ppm {
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    pub fn decode(bytes: &[u8]) -> Result<Ppm, PpmParseError> {
        let mut reader = ByteReader::new(bytes);
        let signature = ppm_read_bytes!(reader.read_ppm_symbol(), "expected magic number");

        if signature != PPM_SIGNATURE {
            return Err(PpmParseError(
                "file does not look like a binary PPM (magic number missing)".to_string(),
            ));
        }

        let width = read_ascii_integer(&mut reader, "width")? as usize;
        let height = read_ascii_integer(&mut reader, "height")? as usize;
        let maxval = read_ascii_integer(&mut reader, "maxval")?;

        if maxval == 0 || maxval > 255 {
            return Err(PpmParseError(format!(
                "invalid maxval {maxval}, expected a value between 1 and 255"
            )));
        }

        // Exactly one whitespace byte separates the header from the
        // raster; eating more could swallow pixel data.
        ppm_read_bytes!(reader.read_byte(), "expected raster separator");

        let expected_raster_size = width * height * 3;
        let raster = ppm_read_bytes!(
            reader.read_bytes(expected_raster_size),
            format!(
                "expected {} raster bytes for a {}x{} image, only found {}",
                expected_raster_size,
                width,
                height,
                reader.number_of_bytes_left()
            )
        );

        let pixels = raster
            .chunks_exact(3)
            .map(|rgb_bytes| Rgb::new(rgb_bytes[0], rgb_bytes[1], rgb_bytes[2]))
            .collect();

        Ok(Ppm {
            maxval: maxval as u8,
            pixels: Grid::from_cells(width, height, pixels),
        })
    }

    pub fn encode(&self) -> Vec<u8> {
        let header = format!("P6\n{} {}\n{}\n", self.width(), self.height(), self.maxval);
        let mut bytes = Vec::with_capacity(header.len() + self.width() * self.height() * 3);

        bytes.extend_from_slice(header.as_bytes());
        for pixel in self.pixels.cells() {
            bytes.push(pixel.r);
            bytes.push(pixel.g);
            bytes.push(pixel.b);
        }

        bytes
    }

    /// Drops the last column and/or row when a dimension is odd.
    pub fn trimmed_to_even(self) -> Ppm {
        let width = self.width() & !1;
        let height = self.height() & !1;

        if width == self.width() && height == self.height() {
            return self;
        }

        Ppm {
            maxval: self.maxval,
            pixels: Grid::from_fn(width, height, |col, row| *self.pixels.get(col, row)),
        }
    }
}

fn read_ascii_integer(reader: &mut ByteReader, field_name: &str) -> Result<u32, PpmParseError> {
    let bytes = ppm_read_bytes!(
        reader.read_ppm_symbol(),
        format!("expected {}", field_name)
    );
    let number = String::from_utf8(bytes.to_vec())
        .map_err(|_e| PpmParseError(format!("{} is not valid utf8", field_name)))?
        .parse::<u32>()
        .map_err(|_e| PpmParseError(format!("{} is not a valid unsigned integer", field_name)))?;

    Ok(number)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray_image(width: usize, height: usize, level: u8) -> Ppm {
        Ppm {
            maxval: 255,
            pixels: Grid::from_fn(width, height, |_, _| Rgb::new(level, level, level)),
        }
    }

    #[test]
    fn decodes_a_minimal_image() {
        let bytes = b"P6\n2 1\n255\n\x01\x02\x03\xfa\xfb\xfc";
        let image = Ppm::decode(bytes).unwrap();

        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 1);
        assert_eq!(image.maxval, 255);
        assert_eq!(*image.pixels.get(0, 0), Rgb::new(1, 2, 3));
        assert_eq!(*image.pixels.get(1, 0), Rgb::new(0xfa, 0xfb, 0xfc));
    }

    #[test]
    fn header_comments_are_skipped() {
        let bytes = b"P6\n# made by hand\n1 1\n# maxval next\n255\n\x10\x20\x30";
        let image = Ppm::decode(bytes).unwrap();

        assert_eq!(*image.pixels.get(0, 0), Rgb::new(0x10, 0x20, 0x30));
    }

    #[test]
    fn rejects_bad_magic_and_bad_maxval() {
        assert!(Ppm::decode(b"P5\n1 1\n255\nxxx").is_err());
        assert!(Ppm::decode(b"P6\n1 1\n0\nxxx").is_err());
        assert!(Ppm::decode(b"P6\n1 1\n65535\nxxx").is_err());
    }

    #[test]
    fn rejects_truncated_raster() {
        let result = Ppm::decode(b"P6\n2 2\n255\n\x01\x02\x03");

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("raster"));
    }

    #[test]
    fn encode_then_decode_roundtrips() {
        let image = gray_image(4, 2, 77);
        let decoded = Ppm::decode(&image.encode()).unwrap();

        assert_eq!(decoded.maxval, 255);
        assert_eq!(decoded.pixels, image.pixels);
    }

    #[test]
    fn trim_drops_odd_edges() {
        let trimmed = gray_image(3, 5, 10).trimmed_to_even();

        assert_eq!(trimmed.width(), 2);
        assert_eq!(trimmed.height(), 4);
    }

    #[test]
    fn trim_keeps_even_dimensions_untouched() {
        let trimmed = gray_image(4, 4, 10).trimmed_to_even();

        assert_eq!(trimmed.width(), 4);
        assert_eq!(trimmed.height(), 4);
    }
}

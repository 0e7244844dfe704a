pub mod decode;
pub mod encode;

use crate::binary::bitpack;
use crate::error::CodecError;
use crate::quantization::QuantizedBlock;

//Structure
//
//ASCII header, two lines:
//  COMP40 Compressed image format 2
//  <width> <height>
//width and height are the pixel dimensions, 2x the cell grid.
//
//Then one 32-bit codeword per cell, most significant byte first, in
//row-major cell order. Codeword fields (bit 0 = least significant):
//  a  6 bits @ 26
//  b  6 bits @ 20
//  c  6 bits @ 14
//  d  6 bits @ 8
//  pb 4 bits @ 4
//  pr 4 bits @ 0

pub const MAGIC: &str = "COMP40 Compressed image format 2";

struct Field {
    width: u32,
    lsb: u32,
}

const PR_FIELD: Field = Field { width: 4, lsb: 0 };
const PB_FIELD: Field = Field { width: 4, lsb: 4 };
const D_FIELD: Field = Field { width: 6, lsb: 8 };
const C_FIELD: Field = Field { width: 6, lsb: 14 };
const B_FIELD: Field = Field { width: 6, lsb: 20 };
const A_FIELD: Field = Field { width: 6, lsb: 26 };

/// Packs one quantized cell into its 32-bit codeword. The quantizer keeps
/// every field in range, but an out-of-range value is still an error here
/// rather than a truncation.
fn pack_cell(cell: &QuantizedBlock) -> Result<u64, CodecError> {
    let mut word = 0u64;

    word = bitpack::set_unsigned(word, PR_FIELD.width, PR_FIELD.lsb, cell.pr_index as u64)?;
    word = bitpack::set_unsigned(word, PB_FIELD.width, PB_FIELD.lsb, cell.pb_index as u64)?;
    word = bitpack::set_signed(word, D_FIELD.width, D_FIELD.lsb, cell.d as i64)?;
    word = bitpack::set_signed(word, C_FIELD.width, C_FIELD.lsb, cell.c as i64)?;
    word = bitpack::set_signed(word, B_FIELD.width, B_FIELD.lsb, cell.b as i64)?;
    word = bitpack::set_unsigned(word, A_FIELD.width, A_FIELD.lsb, cell.a as u64)?;

    Ok(word)
}

fn unpack_cell(word: u64) -> QuantizedBlock {
    QuantizedBlock {
        pr_index: bitpack::get_unsigned(word, PR_FIELD.width, PR_FIELD.lsb) as u8,
        pb_index: bitpack::get_unsigned(word, PB_FIELD.width, PB_FIELD.lsb) as u8,
        d: bitpack::get_signed(word, D_FIELD.width, D_FIELD.lsb) as i8,
        c: bitpack::get_signed(word, C_FIELD.width, C_FIELD.lsb) as i8,
        b: bitpack::get_signed(word, B_FIELD.width, B_FIELD.lsb) as i8,
        a: bitpack::get_unsigned(word, A_FIELD.width, A_FIELD.lsb) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codeword_layout_is_fixed() {
        let cell = QuantizedBlock {
            pb_index: 0b1010,
            pr_index: 0b0101,
            a: 63,
            b: -1,
            c: 1,
            d: -31,
        };
        let word = pack_cell(&cell).unwrap();

        let expected: u64 = 0b0101
            | (0b1010 << 4)
            | (0b100001 << 8) // -31 in 6-bit two's complement
            | (0b000001 << 14)
            | (0b111111 << 20) // -1
            | (0b111111 << 26); // 63

        assert_eq!(word, expected);
        assert!(word < 1 << 32);
    }

    #[test]
    fn pack_then_unpack_is_identity() {
        let cell = QuantizedBlock {
            pb_index: 15,
            pr_index: 0,
            a: 40,
            b: 31,
            c: -31,
            d: 0,
        };

        assert_eq!(unpack_cell(pack_cell(&cell).unwrap()), cell);
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        let cell = QuantizedBlock {
            pb_index: 16, // needs 5 bits
            pr_index: 0,
            a: 0,
            b: 0,
            c: 0,
            d: 0,
        };

        assert!(pack_cell(&cell).is_err());
    }
}

//! Bit-field access on a u64 working word. The codec packs six quantized
//! values into the low 32 bits of one word per cell, but the operations
//! here are generic over any `width`/`lsb` with `width + lsb <= 64`.
//!
//! A value that does not fit its field is an error, never a silent
//! truncation. Field geometry violations, on the other hand, are
//! programmer errors and assert.

use crate::error::CodecError;

pub fn fits_unsigned(value: u64, width: u32) -> bool {
    assert!(width <= 64, "field width {width} exceeds 64 bits");

    width == 64 || value < (1u64 << width)
}

pub fn fits_signed(value: i64, width: u32) -> bool {
    assert!(width <= 64, "field width {width} exceeds 64 bits");

    if width == 64 {
        return true;
    }
    if width == 0 {
        return false;
    }

    let max = (1i64 << (width - 1)) - 1;
    let min = -(1i64 << (width - 1));

    (min..=max).contains(&value)
}

/// Extracts the `width`-bit field at `lsb` as an unsigned value.
pub fn get_unsigned(word: u64, width: u32, lsb: u32) -> u64 {
    check_field(width, lsb);

    if width == 0 {
        return 0;
    }

    (word & field_mask(width, lsb)) >> lsb
}

/// Extracts the `width`-bit field at `lsb`, sign-extending from bit
/// `width - 1`.
pub fn get_signed(word: u64, width: u32, lsb: u32) -> i64 {
    check_field(width, lsb);

    if width == 0 {
        return 0;
    }

    let left_aligned = word << (64 - width - lsb);

    (left_aligned as i64) >> (64 - width)
}

/// Returns a new word with the field at `lsb` replaced by `value`. All
/// bits outside `[lsb, lsb + width)` are preserved.
pub fn set_unsigned(word: u64, width: u32, lsb: u32, value: u64) -> Result<u64, CodecError> {
    check_field(width, lsb);

    if !fits_unsigned(value, width) {
        return Err(CodecError::UnsignedOverflow { value, width });
    }
    if width == 0 {
        return Ok(word);
    }

    let mask = field_mask(width, lsb);

    Ok((word & !mask) | (value << lsb))
}

/// Signed counterpart of [`set_unsigned`]; stores `value` in `width`-bit
/// two's complement.
pub fn set_signed(word: u64, width: u32, lsb: u32, value: i64) -> Result<u64, CodecError> {
    check_field(width, lsb);

    if !fits_signed(value, width) {
        return Err(CodecError::SignedOverflow { value, width });
    }

    let mask = field_mask(width, lsb);
    let field = (value as u64) & (mask >> lsb);

    Ok((word & !mask) | (field << lsb))
}

fn field_mask(width: u32, lsb: u32) -> u64 {
    if width == 64 {
        u64::MAX
    } else {
        ((1u64 << width) - 1) << lsb
    }
}

fn check_field(width: u32, lsb: u32) {
    assert!(width <= 64, "field width {width} exceeds 64 bits");
    assert!(
        lsb <= 64 - width,
        "field [{lsb}, {}) does not fit in a 64 bit word",
        lsb as u64 + width as u64
    );
}

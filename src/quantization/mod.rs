//! Maps the six floating-point fields of each cell to fixed-width integer
//! codes and back. Chroma goes through the 16-level table; `a` is scaled
//! to 6 unsigned bits; `b`, `c` and `d` are clamped to [-0.3, 0.3] and
//! scaled to 6 signed bits. Rounding is half-away-from-zero.

use crate::grid::Grid;
use crate::transform::Block;

pub mod chroma;

/// One cell with every field reduced to its wire-format integer code.
/// `pb_index`/`pr_index` fit 4 unsigned bits, `a` fits 6 unsigned bits,
/// `b`/`c`/`d` fit 6 signed bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizedBlock {
    pub pb_index: u8,
    pub pr_index: u8,
    pub a: u8,
    pub b: i8,
    pub c: i8,
    pub d: i8,
}

const A_SCALE: f32 = 63.0;
const COEFFICIENT_LIMIT: f32 = 0.3;
// Maps the clamped coefficient range onto [-31, 31]; -32 is never
// produced even though the 6-bit field could hold it.
const COEFFICIENT_SCALE: f32 = 31.0 / 0.3;

pub fn quantize(blocks: Grid<Block>) -> Grid<QuantizedBlock> {
    blocks.map(|block| QuantizedBlock {
        pb_index: chroma::index_of_chroma(block.pb_avg),
        pr_index: chroma::index_of_chroma(block.pr_avg),
        a: (block.a.clamp(0.0, 1.0) * A_SCALE).round() as u8,
        b: quantize_coefficient(block.b),
        c: quantize_coefficient(block.c),
        d: quantize_coefficient(block.d),
    })
}

pub fn dequantize(cells: Grid<QuantizedBlock>) -> Grid<Block> {
    cells.map(|cell| Block {
        pb_avg: chroma::chroma_of_index(cell.pb_index).clamp(-0.5, 0.5),
        pr_avg: chroma::chroma_of_index(cell.pr_index).clamp(-0.5, 0.5),
        a: cell.a as f32 / A_SCALE,
        b: dequantize_coefficient(cell.b),
        c: dequantize_coefficient(cell.c),
        d: dequantize_coefficient(cell.d),
    })
}

fn quantize_coefficient(value: f32) -> i8 {
    (value.clamp(-COEFFICIENT_LIMIT, COEFFICIENT_LIMIT) * COEFFICIENT_SCALE).round() as i8
}

fn dequantize_coefficient(code: i8) -> f32 {
    (code as f32 / COEFFICIENT_SCALE).clamp(-COEFFICIENT_LIMIT, COEFFICIENT_LIMIT)
}

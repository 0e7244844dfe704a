//! The 2x2 block transform. Each block of four component pixels becomes
//! one quarter-resolution cell: averaged chroma plus four luma
//! coefficients (a the average, b/c/d the vertical, horizontal and
//! diagonal edge energies). The inverse is the exact algebraic inverse of
//! the forward linear system.

use crate::colors::Component;
use crate::grid::Grid;

/// One quarter-resolution cell. `pb_avg`/`pr_avg` lie in [-0.5, 0.5],
/// `a` in [0, 1]; `b`, `c` and `d` are only guaranteed to land in
/// [-0.3, 0.3] after the quantizer clamps them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub pb_avg: f32,
    pub pr_avg: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
}

/// Consumes a full-resolution component grid (even dimensions) and
/// produces the quarter-resolution cell grid.
pub fn forward(components: Grid<Component>) -> Grid<Block> {
    assert!(
        components.width() % 2 == 0 && components.height() % 2 == 0,
        "block transform requires even dimensions, got {}x{}",
        components.width(),
        components.height()
    );

    Grid::from_fn(components.width() / 2, components.height() / 2, |col, row| {
        let col = col * 2;
        let row = row * 2;

        let p1 = components.get(col, row);
        let p2 = components.get(col + 1, row);
        let p3 = components.get(col, row + 1);
        let p4 = components.get(col + 1, row + 1);

        Block {
            pb_avg: ((p1.pb + p2.pb + p3.pb + p4.pb) / 4.0).clamp(-0.5, 0.5),
            pr_avg: ((p1.pr + p2.pr + p3.pr + p4.pr) / 4.0).clamp(-0.5, 0.5),
            a: (p4.y + p3.y + p2.y + p1.y) / 4.0,
            b: (p4.y + p3.y - p2.y - p1.y) / 4.0,
            c: (p4.y - p3.y + p2.y - p1.y) / 4.0,
            d: (p4.y - p3.y - p2.y + p1.y) / 4.0,
        }
    })
}

/// Expands every cell back into its 2x2 block of component pixels,
/// clamping luma to [0, 1] and chroma to [-0.5, 0.5].
pub fn inverse(blocks: Grid<Block>) -> Grid<Component> {
    Grid::from_fn(blocks.width() * 2, blocks.height() * 2, |col, row| {
        let block = blocks.get(col / 2, row / 2);

        let y = match (col % 2, row % 2) {
            (0, 0) => block.a - block.b - block.c + block.d,
            (1, 0) => block.a - block.b + block.c - block.d,
            (0, 1) => block.a + block.b - block.c - block.d,
            _ => block.a + block.b + block.c + block.d,
        };

        Component::clamped(y, block.pb_avg, block.pr_avg)
    })
}

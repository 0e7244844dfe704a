//! The fixed 16-level chroma quantization table. Levels are denser near
//! zero, where averaged chroma values cluster.

pub const CHROMA_LEVELS: [f32; 16] = [
    -0.35, -0.20, -0.15, -0.10, -0.077, -0.055, -0.033, -0.011, 0.011, 0.033, 0.055, 0.077, 0.10,
    0.15, 0.20, 0.35,
];

/// Maps a chroma value in [-0.5, 0.5] to the index of the nearest table
/// level. Ties pick the lower index.
pub fn index_of_chroma(value: f32) -> u8 {
    let mut best = 0;

    for (index, level) in CHROMA_LEVELS.iter().enumerate() {
        if (value - level).abs() < (value - CHROMA_LEVELS[best]).abs() {
            best = index;
        }
    }

    best as u8
}

pub fn chroma_of_index(index: u8) -> f32 {
    assert!(index < 16, "chroma index {index} out of 4-bit range");

    CHROMA_LEVELS[index as usize]
}

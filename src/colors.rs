use crate::algebra::{Matrix3, Vec3};
use crate::grid::Grid;
use crate::ppm::Ppm;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// An RGB pixel normalized to [0, 1] per channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl FloatRgb {
    pub fn from_samples(rgb: &Rgb, maxval: u8) -> Self {
        let maxval = maxval as f32;

        Self {
            r: rgb.r as f32 / maxval,
            g: rgb.g as f32 / maxval,
            b: rgb.b as f32 / maxval,
        }
    }
}

/// A pixel in Y/Pb/Pr component space: y in [0, 1], pb and pr in
/// [-0.5, 0.5]. Constructed clamped; re-clamped after every computation
/// that could leave range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    pub y: f32,
    pub pb: f32,
    pub pr: f32,
}

impl Component {
    pub fn clamped(y: f32, pb: f32, pr: f32) -> Self {
        Self {
            y: y.clamp(0.0, 1.0),
            pb: pb.clamp(-0.5, 0.5),
            pr: pr.clamp(-0.5, 0.5),
        }
    }
}

// Rows are the contributions of one input channel to the three outputs, so
// `input_vec * table` yields the converted pixel.
const RGB_TO_COMPONENT: Matrix3 = Matrix3::new(
    [0.299, -0.168736, 0.5],
    [0.587, -0.331264, -0.418688],
    [0.114, 0.5, -0.081312],
);

const COMPONENT_TO_RGB: Matrix3 = Matrix3::new(
    [1.0, 1.0, 1.0],
    [0.0, -0.344136, 1.772],
    [1.402, -0.714136, 0.0],
);

impl From<&FloatRgb> for Component {
    fn from(rgb: &FloatRgb) -> Self {
        let converted = Vec3::new(rgb.r, rgb.g, rgb.b) * RGB_TO_COMPONENT;

        Component::clamped(converted.0[0], converted.0[1], converted.0[2])
    }
}

impl From<&Component> for FloatRgb {
    fn from(comp: &Component) -> Self {
        let converted = Vec3::new(comp.y, comp.pb, comp.pr) * COMPONENT_TO_RGB;

        FloatRgb {
            r: converted.0[0].clamp(0.0, 1.0),
            g: converted.0[1].clamp(0.0, 1.0),
            b: converted.0[2].clamp(0.0, 1.0),
        }
    }
}

impl From<&FloatRgb> for Rgb {
    fn from(float_rgb: &FloatRgb) -> Self {
        Rgb {
            r: (float_rgb.r.clamp(0.0, 1.0) * DECOMPRESSED_MAXVAL as f32).round() as u8,
            g: (float_rgb.g.clamp(0.0, 1.0) * DECOMPRESSED_MAXVAL as f32).round() as u8,
            b: (float_rgb.b.clamp(0.0, 1.0) * DECOMPRESSED_MAXVAL as f32).round() as u8,
        }
    }
}

/// Decompressed images always use this sample range.
pub const DECOMPRESSED_MAXVAL: u8 = 255;

pub fn rgb_to_float(image: Ppm) -> Grid<FloatRgb> {
    let maxval = image.maxval;

    image.pixels.map(|rgb| FloatRgb::from_samples(rgb, maxval))
}

pub fn float_to_component(floats: Grid<FloatRgb>) -> Grid<Component> {
    floats.map(|pixel| Component::from(pixel))
}

pub fn component_to_float(components: Grid<Component>) -> Grid<FloatRgb> {
    components.map(|pixel| FloatRgb::from(pixel))
}

pub fn float_to_rgb(floats: Grid<FloatRgb>) -> Ppm {
    Ppm {
        maxval: DECOMPRESSED_MAXVAL,
        pixels: floats.map(|pixel| Rgb::from(pixel)),
    }
}

//! Measures how lossy a compress/decompress cycle was: the root mean
//! square difference between two images, normalized per image maxval.

use crate::error::CodecError;
use crate::ppm::Ppm;

/// Compares the overlapping region of two images. The compressor trims
/// odd edges, so a 1-pixel size difference per axis is tolerated;
/// anything larger is an error.
pub fn rms_difference(first: &Ppm, second: &Ppm) -> Result<f64, CodecError> {
    if first.width().abs_diff(second.width()) > 1 || first.height().abs_diff(second.height()) > 1 {
        return Err(CodecError::DiffSizeMismatch(
            first.width(),
            first.height(),
            second.width(),
            second.height(),
        ));
    }

    let width = first.width().min(second.width());
    let height = first.height().min(second.height());
    if width == 0 || height == 0 {
        return Ok(0.0);
    }

    let first_maxval = first.maxval as f64;
    let second_maxval = second.maxval as f64;
    let mut sum = 0.0;

    for row in 0..height {
        for col in 0..width {
            let a = first.pixels.get(col, row);
            let b = second.pixels.get(col, row);

            sum += square(a.r as f64 / first_maxval - b.r as f64 / second_maxval);
            sum += square(a.g as f64 / first_maxval - b.g as f64 / second_maxval);
            sum += square(a.b as f64 / first_maxval - b.b as f64 / second_maxval);
        }
    }

    Ok((sum / (3.0 * width as f64 * height as f64)).sqrt())
}

fn square(x: f64) -> f64 {
    x * x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Rgb;
    use crate::grid::Grid;
    use approx::assert_abs_diff_eq;

    fn solid_image(width: usize, height: usize, pixel: Rgb) -> Ppm {
        Ppm {
            maxval: 255,
            pixels: Grid::from_fn(width, height, |_, _| pixel),
        }
    }

    #[test]
    fn identical_images_have_zero_difference() {
        let image = solid_image(4, 4, Rgb::new(12, 34, 56));
        let copy = solid_image(4, 4, Rgb::new(12, 34, 56));

        assert_eq!(rms_difference(&image, &copy).unwrap(), 0.0);
    }

    #[test]
    fn uniform_offset_has_that_rms() {
        let dark = solid_image(2, 2, Rgb::new(0, 0, 0));
        let light = solid_image(2, 2, Rgb::new(51, 51, 51));

        // Every channel differs by exactly 0.2.
        assert_abs_diff_eq!(rms_difference(&dark, &light).unwrap(), 0.2, epsilon = 1e-9);
    }

    #[test]
    fn one_pixel_size_difference_is_tolerated() {
        let full = solid_image(5, 4, Rgb::new(7, 7, 7));
        let trimmed = solid_image(4, 4, Rgb::new(7, 7, 7));

        assert_eq!(rms_difference(&full, &trimmed).unwrap(), 0.0);
    }

    #[test]
    fn larger_size_differences_are_rejected() {
        let big = solid_image(8, 8, Rgb::new(0, 0, 0));
        let small = solid_image(4, 8, Rgb::new(0, 0, 0));

        assert!(matches!(
            rms_difference(&big, &small),
            Err(CodecError::DiffSizeMismatch(..))
        ));
    }

    #[test]
    fn different_maxvals_are_normalized() {
        let a = Ppm {
            maxval: 100,
            pixels: Grid::from_fn(2, 2, |_, _| Rgb::new(50, 50, 50)),
        };
        let b = solid_image(2, 2, Rgb::new(128, 128, 128));

        // 0.5 vs 128/255, a difference of ~0.00196 per channel.
        assert!(rms_difference(&a, &b).unwrap() < 0.002);
    }
}

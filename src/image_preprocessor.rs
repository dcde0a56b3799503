use crate::error::ClassifyError;
use image::{imageops, DynamicImage, ImageError, RgbImage};
use tract_onnx::prelude::tract_ndarray::Array4;

/// A single-item NHWC batch, every element in `[-1.0, 1.0]`.
#[derive(Debug, Clone, PartialEq)]
pub struct PreprocessedTensor {
    data: Array4<f32>,
}

impl PreprocessedTensor {
    pub fn shape(&self) -> [usize; 4] {
        let dims = self.data.dim();
        [dims.0, dims.1, dims.2, dims.3]
    }

    pub fn as_array(&self) -> &Array4<f32> {
        &self.data
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePreprocessor {
    width: u32,
    height: u32,
}

impl ImagePreprocessor {
    pub fn new((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }

    pub fn transform(&self, image_bytes: &[u8]) -> Result<PreprocessedTensor, ClassifyError> {
        let image = image::load_from_memory(image_bytes).map_err(decode_error)?;
        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        let fitted = fit_center_crop(&rgb, self.width, self.height);

        Ok(image_to_tensor(&fitted))
    }
}

fn decode_error(error: ImageError) -> ClassifyError {
    match error {
        ImageError::Unsupported(e) => ClassifyError::UnsupportedFormat(e.to_string()),
        other => ClassifyError::Decode(other.to_string()),
    }
}

/// Largest centered crop with the target aspect ratio, in source pixels,
/// as `(x, y, width, height)`.
///
/// The offset is floored to a whole pixel. When the leftover margin is odd the
/// crop sits half a source pixel left of (or above) the exact center, which is
/// at most half an output pixel after downscaling.
fn center_crop_box(src_width: u32, src_height: u32, width: u32, height: u32) -> (u32, u32, u32, u32) {
    let target_ratio = width as f64 / height as f64;
    let (crop_width, crop_height) =
        if (src_width as f64 / src_height as f64) > target_ratio {
            let w = (src_height as f64 * target_ratio).round() as u32;
            (w.clamp(1, src_width), src_height)
        } else {
            let h = (src_width as f64 / target_ratio).round() as u32;
            (src_width, h.clamp(1, src_height))
        };

    let x = (src_width - crop_width) / 2;
    let y = (src_height - crop_height) / 2;

    (x, y, crop_width, crop_height)
}

/// Crops first, then resamples. `DynamicImage::resize_to_fill` does the
/// reverse and produces different pixels.
pub fn fit_center_crop(image: &DynamicImage, width: u32, height: u32) -> RgbImage {
    let (x, y, crop_width, crop_height) =
        center_crop_box(image.width(), image.height(), width, height);

    image
        .crop_imm(x, y, crop_width, crop_height)
        .resize_exact(width, height, imageops::FilterType::Lanczos3)
        .to_rgb8()
}

fn image_to_tensor(rgb: &RgbImage) -> PreprocessedTensor {
    let (width, height) = rgb.dimensions();

    let data = Array4::from_shape_fn(
        (1, height as usize, width as usize, 3),
        |(_, y, x, c)| {
            let pixel = rgb.get_pixel(x as u32, y as u32);
            pixel[c] as f32 / 127.5 - 1.0
        },
    );

    PreprocessedTensor { data }
}

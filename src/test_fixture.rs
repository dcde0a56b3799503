use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb, RgbImage};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

pub const LABELS: &str = "0 hose\n1 pullover\n2 jacken\n3 sonstiges\n";

pub fn encode_png(image: &DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

pub fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
    let image: RgbImage = ImageBuffer::from_pixel(width, height, Rgb(color));
    DynamicImage::ImageRgb8(image)
}

/// Red, green and blue vertical thirds.
pub fn three_band_rgb(width: u32, height: u32) -> DynamicImage {
    let image: RgbImage = ImageBuffer::from_fn(width, height, |x, _| match x * 3 / width {
        0 => Rgb([255, 0, 0]),
        1 => Rgb([0, 255, 0]),
        _ => Rgb([0, 0, 255]),
    });
    DynamicImage::ImageRgb8(image)
}

/// High-frequency pattern where every resampling filter gives different pixels.
pub fn noise_rgb(width: u32, height: u32) -> DynamicImage {
    let image: RgbImage = ImageBuffer::from_fn(width, height, |x, y| {
        let v = x * 73 + y * 151 + (x * y) % 7 * 31;
        Rgb([(v % 256) as u8, ((v * 3 + 40) % 256) as u8, ((v * 7 + 90) % 256) as u8])
    });
    DynamicImage::ImageRgb8(image)
}

pub fn write_file(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content).unwrap();
    path
}

use raster_image::{RasterImage, Rgb};

/// Deterministic image whose channels cover most of the 0..=255 range.
pub fn gradient(width: i64, height: i64) -> RasterImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut img = RasterImage::new(width, height).expect("valid dimensions");
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / width) as u8;
            let g = (y * 255 / height) as u8;
            let b = ((x * 7 + y * 13) % 256) as u8;
            img.set_pixel(x, y, Rgb::new(r, g, b)).expect("in bounds");
        }
    }
    img
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

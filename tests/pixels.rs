mod common;

use common::fixtures::{gradient, init_logging};
use raster_image::{
    BrightnessFactor, DiagnosticsSink, Filter, LogSink, RasterError, RasterImage, Rgb, Settings,
};

#[test]
fn copy_is_isolated_from_source() {
    let a = gradient(6, 4);
    let mut b = RasterImage::copy_from(&a);
    assert_eq!(a, b);

    let original = a.get_pixel(2, 3).unwrap();
    b.set_pixel(2, 3, Rgb::new(1, 2, 3)).unwrap();
    assert_eq!(a.get_pixel(2, 3).unwrap(), original);
    assert_ne!(a, b);

    b.darken();
    assert_eq!(a.get_pixel(0, 0).unwrap(), gradient(6, 4).get_pixel(0, 0).unwrap());
}

#[test]
fn set_then_get_round_trips() {
    let mut img = RasterImage::new(7, 5).unwrap();
    for y in 0..5 {
        for x in 0..7 {
            let c = Rgb::new(x as u8 * 30, y as u8 * 50, 255 - x as u8);
            img.set_pixel(x, y, c).unwrap();
            assert_eq!(img.get_pixel(x, y).unwrap(), c);
        }
    }
}

#[test]
fn access_at_the_edges_is_checked() {
    let mut img = gradient(3, 2);
    let snapshot = img.clone();
    assert_eq!(
        img.get_pixel(3, 0),
        Err(RasterError::OutOfBounds {
            x: 3,
            y: 0,
            width: 3,
            height: 2
        })
    );
    assert!(img.set_pixel(0, 2, Rgb::WHITE).is_err());
    assert!(img.set_pixel(-1, 1, Rgb::WHITE).is_err());
    assert_eq!(img, snapshot);
    assert!(img.get_pixel(2, 1).is_ok());
}

#[test]
fn construction_rejects_bad_dimensions() {
    assert!(matches!(
        RasterImage::new(0, 10),
        Err(RasterError::InvalidDimension { .. })
    ));
    assert!(matches!(
        RasterImage::new(10, -1),
        Err(RasterError::InvalidDimension { .. })
    ));
}

#[test]
fn darken_and_brighten_are_monotonic() {
    let before = gradient(16, 16);

    let mut darker = before.clone();
    darker.darken();
    let mut brighter = before.clone();
    brighter.brighten();

    for ((b, d), l) in before
        .pixels()
        .iter()
        .zip(darker.pixels())
        .zip(brighter.pixels())
    {
        assert!(d.r <= b.r && d.g <= b.g && d.b <= b.b);
        assert!(l.r >= b.r && l.g >= b.g && l.b >= b.b);
    }
}

#[test]
fn repeated_filters_converge_to_the_extremes() {
    let mut white = gradient(8, 8);
    let mut black = white.clone();
    for _ in 0..40 {
        white.brighten();
        black.darken();
    }
    // Zero channels stay zero unless the whole pixel is black.
    assert!(white
        .pixels()
        .iter()
        .all(|p| [p.r, p.g, p.b].iter().all(|&c| c == 0 || c == 255)));
    assert!(black.pixels().iter().all(|&p| p == Rgb::BLACK));

    black.brighten();
    assert!(black.pixels().iter().all(|&p| p == Rgb::new(3, 3, 3)));
}

#[test]
fn threshold_reports_sum_and_brightens() {
    init_logging();
    let mut img = RasterImage::new(1, 1).unwrap();
    img.set_pixel(0, 0, Rgb::new(10, 20, 30)).unwrap();

    let mut sums = Vec::new();
    img.apply_threshold_with(BrightnessFactor::default(), &mut |_x: u32, _y: u32, sum: u16| {
        sums.push(sum)
    });

    assert_eq!(sums, vec![60]);
    assert_eq!(img.get_pixel(0, 0).unwrap(), Rgb::new(10, 20, 30).brighter());
    assert_eq!(img.get_pixel(0, 0).unwrap(), Rgb::new(14, 28, 42));
    assert_ne!(img.get_pixel(0, 0).unwrap(), Rgb::new(20, 20, 20));
}

#[test]
fn threshold_result_does_not_depend_on_sink() {
    init_logging();
    let mut silent = gradient(10, 6);
    let mut logged = silent.clone();
    let mut brightened = silent.clone();

    silent.apply_threshold();
    logged.apply_threshold_with(BrightnessFactor::default(), &mut LogSink);
    brightened.brighten();

    assert_eq!(silent, logged);
    assert_eq!(silent, brightened);
}

struct Histogram([u32; 766]);

impl DiagnosticsSink for Histogram {
    fn greyscale(&mut self, _x: u32, _y: u32, sum: u16) {
        self.0[sum as usize] += 1;
    }
}

#[test]
fn filters_dispatch_by_name() {
    let settings = Settings::from_json(r#"{ "brightness-factor": 0.8 }"#).unwrap();
    let mut img = gradient(4, 4);
    let mut expected = img.clone();
    let mut histogram = Histogram([0; 766]);

    for name in ["darken", "threshold", "brighten"] {
        let filter: Filter = name.parse().unwrap();
        img.apply(filter, &settings, &mut histogram);
    }
    expected.darken_by(settings.brightness_factor);
    expected.brighten_by(settings.brightness_factor);
    expected.brighten_by(settings.brightness_factor);

    assert_eq!(img, expected);
    assert_eq!(histogram.0.iter().sum::<u32>(), 16);
}

#[test]
fn bytes_view_matches_pixels() {
    let img = gradient(5, 3);
    let bytes = img.as_bytes();
    assert_eq!(bytes.len(), 5 * 3 * 3);
    let px = img.get_pixel(4, 2).unwrap();
    let i = (2 * 5 + 4) * 3;
    assert_eq!(&bytes[i..i + 3], &[px.r, px.g, px.b]);

    let rebuilt = RasterImage::from_rgb_bytes(5, 3, bytes).unwrap();
    assert_eq!(rebuilt, img);
    assert_eq!(img.rows().count(), 3);
}

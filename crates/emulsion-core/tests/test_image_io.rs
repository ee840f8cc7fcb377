#[allow(dead_code)]
mod common;

use tempfile::TempDir;

use emulsion_core::error::EmulsionError;
use emulsion_core::io::image_io::{load_image, save_image};

use common::{assert_images_close, gradient_image};

#[test]
fn png_round_trip_preserves_pixels_to_16_bit_precision() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roundtrip.png");

    let original = gradient_image(20, 30);
    save_image(&original, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded.width(), 30);
    assert_eq!(loaded.height(), 20);
    assert_images_close(&loaded, &original, 1.0 / 65535.0 + 1e-6);
}

#[test]
fn jpeg_output_is_lossy_but_close() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.jpg");

    let original = gradient_image(32, 32);
    save_image(&original, &path).unwrap();
    let loaded = load_image(&path).unwrap();

    assert_eq!(loaded.width(), 32);
    assert_images_close(&loaded, &original, 0.05);
}

#[test]
fn out_of_gamut_values_clamp_on_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("clamped.png");

    let mut image = common::flat_image(4, 4, [1.5, -0.2, 0.5]);
    image.red[[0, 0]] = 2.0;
    save_image(&image, &path).unwrap();

    let loaded = load_image(&path).unwrap();
    assert!(loaded.red.iter().all(|&v| (0.0..=1.0).contains(&v)));
    assert!((loaded.green[[0, 0]] - 0.0).abs() < 1e-6);
}

#[test]
fn loading_a_missing_file_is_an_error() {
    let result = load_image(std::path::Path::new("/nonexistent/missing.png"));
    assert!(matches!(
        result,
        Err(EmulsionError::Io(_) | EmulsionError::ImageError(_))
    ));
}

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;

use retile::{is_valid, ordering, rearrange_image, Dimensions, Error, InvalidArrangementError};

fn checkerboard(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, (x ^ y) as u8, 255])
    }))
}

#[test]
fn test_png_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");

    let im = checkerboard(12, 9);
    let tile = Dimensions::new(4, 3);
    let order = [8, 0, 7, 1, 6, 2, 5, 3, 4];

    let out = rearrange_image(&im, tile, &order).unwrap();
    out.save(&path).unwrap();

    let loaded = image::open(&path).unwrap();
    assert_eq!(loaded.color(), im.color());
    assert_eq!(loaded.dimensions(), (12, 9));

    let back = rearrange_image(&loaded, tile, &ordering::inverse(&order).unwrap()).unwrap();
    assert_eq!(back.as_bytes(), im.as_bytes());
}

#[test]
fn test_quadrant_swap() {
    let im = checkerboard(4, 4);
    let out = rearrange_image(&im, Dimensions::new(2, 2), &[3, 2, 1, 0]).unwrap();

    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(out.get_pixel(x, y), im.get_pixel(x + 2, y + 2));
            assert_eq!(out.get_pixel(x + 2, y + 2), im.get_pixel(x, y));
            assert_eq!(out.get_pixel(x + 2, y), im.get_pixel(x, y + 2));
        }
    }
}

#[test]
fn test_random_orderings() {
    let mut random = Xoshiro256StarStar::seed_from_u64(1);
    let im = checkerboard(30, 20);

    for (w, h) in [(1, 1), (5, 4), (10, 10), (30, 20), (6, 5)] {
        let tile = Dimensions::new(w, h);
        let n = (30 / w) * (20 / h);
        let order = ordering::shuffled(n, &mut random);
        assert!(is_valid(Dimensions::new(30, 20), tile, &order));

        let out = rearrange_image(&im, tile, &order).unwrap();
        assert_eq!(out.dimensions(), im.dimensions());
        assert_eq!(out.color(), im.color());

        let back = rearrange_image(&out, tile, &ordering::inverse(&order).unwrap()).unwrap();
        assert_eq!(back.as_bytes(), im.as_bytes());
    }
}

#[test]
fn test_identity_is_unchanged() {
    let im = DynamicImage::ImageLumaA8(image::GrayAlphaImage::from_fn(8, 6, |x, y| {
        image::LumaA([(x * 8 + y) as u8, 200])
    }));
    let out = rearrange_image(&im, Dimensions::new(2, 3), &ordering::identity(8)).unwrap();

    assert_eq!(out.as_bytes(), im.as_bytes());
}

#[test]
fn test_short_ordering_is_rejected() {
    let im = checkerboard(4, 4);
    let err = rearrange_image(&im, Dimensions::new(2, 2), &[0, 1]).unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidArrangement(InvalidArrangementError)
    ));
    assert_eq!(
        err.to_string(),
        "The tile size or ordering are not valid for the given image"
    );
}

//! Shared fixtures for unit tests.

use crate::face::{ExtractError, FaceExtractor, FaceLocation};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::{ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

/// Photo colour the fake extractor sees no face in.
pub const NO_FACE: [u8; 3] = [0, 0, 0];
/// Photo colour with a face that cannot be encoded.
pub const NO_ENCODING: [u8; 3] = [0, 255, 0];
/// Photo colour with two faces: the first encodes to 127 values, the second
/// to a valid vector close to a red channel of 230.
pub const BAD_FIRST_FACE: [u8; 3] = [0, 0, 255];

/// PNG bytes of an 8x8 image filled with `rgb`.
pub fn png(rgb: [u8; 3]) -> Vec<u8> {
    let image = RgbImage::from_pixel(8, 8, Rgb(rgb));
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

pub fn encoded_png(rgb: [u8; 3]) -> String {
    STANDARD.encode(png(rgb))
}

/// Deterministic extractor keyed on the top-left pixel.
///
/// Black has no face and pure green has a face that cannot be encoded. Pure
/// blue is [`BAD_FIRST_FACE`]. Anything else encodes to 128 copies of
/// `red / 255`, so two photos are the same person when their red channels
/// differ by at most 13.
pub struct FakeExtractor;

#[async_trait]
impl FaceExtractor for FakeExtractor {
    async fn face_locations(&self, image: &RgbImage) -> Result<Vec<FaceLocation>, ExtractError> {
        let (width, height) = image.dimensions();
        match image.get_pixel(0, 0).0 {
            NO_FACE => Ok(Vec::new()),
            BAD_FIRST_FACE => Ok(vec![
                FaceLocation(0, width / 2, height, 0),
                FaceLocation(0, width, height, width / 2),
            ]),
            _ => Ok(vec![FaceLocation(0, width, height, 0)]),
        }
    }

    async fn face_encodings(
        &self,
        image: &RgbImage,
        locations: &[FaceLocation],
    ) -> Result<Vec<Vec<f64>>, ExtractError> {
        let pixel = image.get_pixel(0, 0).0;
        if pixel == NO_ENCODING {
            return Ok(Vec::new());
        }
        if pixel == BAD_FIRST_FACE {
            return Ok(vec![vec![0.0; 127], vec![230.0 / 255.0; 128]]);
        }
        let value = pixel[0] as f64 / 255.0;
        Ok(locations.iter().map(|_| vec![value; 128]).collect())
    }
}

//! Face detection and encoding.
//!
//! The service only sees [`FaceExtractor`]; the vision backend behind it is
//! free to change. Images are decoded and normalized to 8-bit RGB here, before
//! any extractor sees them.

pub mod remote;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::RgbImage;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use remote::RemoteExtractor;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("request to face service failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("face service returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Face bounding box in pixel coordinates, `(top, right, bottom, left)` order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceLocation(pub u32, pub u32, pub u32, pub u32);

/// Detects faces and turns them into numeric descriptors.
#[async_trait]
pub trait FaceExtractor: Send + Sync {
    /// Bounding boxes of every face found in `image`.
    async fn face_locations(&self, image: &RgbImage) -> Result<Vec<FaceLocation>, ExtractError>;

    /// One descriptor per location, in the same order. Backends may return
    /// fewer vectors than locations when a region cannot be encoded.
    async fn face_encodings(
        &self,
        image: &RgbImage,
        locations: &[FaceLocation],
    ) -> Result<Vec<Vec<f64>>, ExtractError>;
}

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("unreadable image: {0}")]
    Image(#[from] image::ImageError),
}

/// Decodes a base64 photo into an RGB pixel buffer.
pub fn decode_image(encoded: &str) -> Result<RgbImage, DecodeError> {
    let bytes = STANDARD.decode(encoded.trim())?;
    let image = image::load_from_memory(&bytes)?;
    Ok(image.to_rgb8())
}

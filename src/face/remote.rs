use super::{ExtractError, FaceExtractor, FaceLocation};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct ImagePayload<'a> {
    width: u32,
    height: u32,
    /// Row-major RGB8 pixels, base64.
    pixels: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    locations: Option<&'a [FaceLocation]>,
}

#[derive(Deserialize)]
struct LocationsResponse {
    locations: Vec<FaceLocation>,
}

#[derive(Deserialize)]
struct EncodingsResponse {
    encodings: Vec<Vec<f64>>,
}

/// Extractor backed by an HTTP face-encoding sidecar.
#[derive(Clone)]
pub struct RemoteExtractor {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteExtractor {
    pub fn new(base_url: &str, timeout_millis: u64) -> Result<Self, ExtractError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(timeout_millis))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        payload: &ImagePayload<'_>,
    ) -> Result<T, ExtractError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(url = %url, width = payload.width, height = payload.height, "Calling face service");

        let response = self.client.post(&url).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ExtractError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

fn payload<'a>(image: &RgbImage, locations: Option<&'a [FaceLocation]>) -> ImagePayload<'a> {
    ImagePayload {
        width: image.width(),
        height: image.height(),
        pixels: STANDARD.encode(image.as_raw()),
        locations,
    }
}

#[async_trait]
impl FaceExtractor for RemoteExtractor {
    async fn face_locations(&self, image: &RgbImage) -> Result<Vec<FaceLocation>, ExtractError> {
        let response: LocationsResponse = self
            .post("face_locations", &payload(image, None))
            .await?;
        Ok(response.locations)
    }

    async fn face_encodings(
        &self,
        image: &RgbImage,
        locations: &[FaceLocation],
    ) -> Result<Vec<Vec<f64>>, ExtractError> {
        let response: EncodingsResponse = self
            .post("face_encodings", &payload(image, Some(locations)))
            .await?;
        Ok(response.encodings)
    }
}

//! Client for the opaque OCR service (image in, text out).

use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RemoteError, Result};
use crate::models::config::RemoteConfig;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OcrRequest {
    image_base64: String,
}

#[derive(Deserialize)]
struct OcrResponse {
    text: String,
}

#[derive(Deserialize)]
struct ServiceError {
    error: String,
}

/// HTTP client for the OCR service.
pub struct OcrClient {
    http: reqwest::Client,
    url: String,
}

impl OcrClient {
    /// Build a client from the remote configuration.
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(RemoteError::Http)?;

        Ok(Self {
            http,
            url: config.ocr_url.clone(),
        })
    }

    /// Send an image and return the extracted text.
    pub async fn recognize(&self, image: &[u8]) -> Result<String> {
        let payload = OcrRequest {
            image_base64: BASE64.encode(image),
        };
        debug!(bytes = image.len(), url = %self.url, "sending image to OCR service");

        let response = self
            .http
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(RemoteError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(RemoteError::Http)?;

        if !status.is_success() {
            let message = serde_json::from_str::<ServiceError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(RemoteError::Service {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let ocr: OcrResponse = serde_json::from_str(&body)
            .map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;

        debug!(chars = ocr.text.len(), "OCR service returned text");
        Ok(ocr.text)
    }
}

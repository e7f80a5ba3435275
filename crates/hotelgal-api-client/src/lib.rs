//! HTTP client for the remote hotel gallery service.
//!
//! Provides a minimal reqwest-backed client with generic GET/DELETE/multipart
//! helpers and implements [`GalleryService`] on top of them. The CLI uses
//! this client directly; the session layer only sees the trait.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use hotelgal_core::{GalleryError, GalleryService, Hotel, ImageRecord, PendingFile};

/// HTTP client for the gallery API.
#[derive(Clone, Debug)]
pub struct GalleryClient {
    client: Client,
    base_url: String,
}

impl GalleryClient {
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create client from environment: GALLERY_API_URL (or API_URL), default
    /// `http://localhost:3000`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("GALLERY_API_URL")
            .or_else(|_| std::env::var("API_URL"))
            .unwrap_or_else(|_| "http://localhost:3000".to_string());

        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET request with optional query parameters. Deserializes JSON response.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.build_url(path);
        let mut request = self.client.get(&url);

        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "API request failed with status {}: {}",
                status,
                error_text
            ));
        }

        let body: T = response
            .json()
            .await
            .context("Failed to parse response as JSON")?;

        Ok(body)
    }

    /// POST multipart form. The response body is a success marker the caller
    /// does not need; only the status is checked.
    async fn post_multipart(&self, path: &str, form: reqwest::multipart::Form) -> Result<()> {
        let url = self.build_url(path);
        let request = self.client.post(&url).multipart(form);

        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "API request failed with status {}: {}",
                status,
                error_text
            ));
        }

        Ok(())
    }

    /// DELETE request. Returns Ok(()) on success.
    async fn delete(&self, path: &str) -> Result<()> {
        let url = self.build_url(path);
        let request = self.client.delete(&url);

        let response = request.send().await.context("Failed to send request")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(anyhow::anyhow!(
                "API request failed with status {}: {}",
                status,
                error_text
            ));
        }

        Ok(())
    }
}

#[async_trait]
impl GalleryService for GalleryClient {
    async fn list_hotels(&self) -> Result<Vec<Hotel>, GalleryError> {
        self.get_json("/hotels", &[])
            .await
            .map_err(|err| GalleryError::EntityList(format!("{err:#}")))
    }

    async fn list_images(&self, hotel_id: &str) -> Result<Vec<ImageRecord>, GalleryError> {
        self.get_json("/gals/all", &[("hotelId", hotel_id.to_string())])
            .await
            .map_err(|err| GalleryError::ImageList {
                hotel_id: hotel_id.to_string(),
                message: format!("{err:#}"),
            })
    }

    async fn upload_images(
        &self,
        hotel_id: &str,
        files: Vec<PendingFile>,
    ) -> Result<(), GalleryError> {
        // Same shape the web frontend posts: repeated `images` parts plus a
        // `hotelId` text field.
        let mut form = reqwest::multipart::Form::new();
        for file in files {
            form = form.part(
                "images",
                reqwest::multipart::Part::bytes(file.bytes.to_vec()).file_name(file.name),
            );
        }
        form = form.text("hotelId", hotel_id.to_string());

        tracing::info!(hotel_id, "uploading image batch");
        self.post_multipart("/gals/upload-images", form)
            .await
            .map_err(|err| GalleryError::Upload {
                hotel_id: hotel_id.to_string(),
                message: format!("{err:#}"),
            })
    }

    async fn delete_image(&self, image_id: &str) -> Result<(), GalleryError> {
        tracing::info!(image_id, "deleting image");
        self.delete(&format!("/gals/delete/{}", image_id))
            .await
            .map_err(|err| GalleryError::Delete {
                image_id: image_id.to_string(),
                message: format!("{err:#}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_base_and_path() {
        let client = GalleryClient::new("http://localhost:3000/".to_string()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(
            client.build_url("/gals/delete/abc"),
            "http://localhost:3000/gals/delete/abc"
        );
    }
}

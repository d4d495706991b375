//! HTTP client for the external ML layout service. The service is a black
//! box: we forward the payload and surface whatever it returns. Failures map
//! straight to a 500 envelope, no retries.

use crate::error::ApiError;
use crate::service::dispatch::LayoutEngine;
use crate::types::layout::{LayoutOutcome, PredictReply};
use serde_json::{Value, json};
use url::Url;

#[derive(Clone)]
pub struct LayoutApi {
    client: reqwest::Client,
    base_url: Url,
}

impl LayoutApi {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Validation(format!("bad layout service url: {e}")))
    }

    /// Forward a batch of items for position prediction.
    pub async fn predict_batch(
        &self,
        items: &[Value],
        room_type: &str,
        floor_data: Option<&Value>,
    ) -> Result<PredictReply, ApiError> {
        let url = self.endpoint("predict_batch")?;
        let body = json!({
            "items": items,
            "room_type": room_type,
            "floor_data": floor_data,
        });
        let resp = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }

    async fn auto_place_inner(
        &self,
        room_width: f64,
        room_height: f64,
    ) -> Result<LayoutOutcome, ApiError> {
        let url = self.endpoint("auto_place")?;
        let body = json!({
            "room_width": room_width,
            "room_height": room_height,
        });
        let resp = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(resp.json().await?)
    }
}

impl LayoutEngine for LayoutApi {
    async fn auto_place(
        &self,
        room_width: f64,
        room_height: f64,
    ) -> Result<LayoutOutcome, ApiError> {
        self.auto_place_inner(room_width, room_height).await
    }
}

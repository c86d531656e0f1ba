//! HTTP client implementation for the traineeapp REST API.
//!
//! This module provides a reqwest-based implementation of the
//! [`TraineeApi`](crate::TraineeApi) trait. Idempotent GETs are retried
//! through [`RetryPolicy`](crate::retry::RetryPolicy); mutations are sent
//! exactly once.

use crate::retry::RetryPolicy;
use crate::{
    Customer, CustomerPage, NewTraining, TraineeApi, TraineeError, TrainingPage, TrainingRecord,
};
use async_trait::async_trait;
use reqwest::Method;

/// Client for the traineeapp API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestTraineeClient {
    base_url: String,
    client: reqwest::Client,
    retry: RetryPolicy,
}

impl ReqwestTraineeClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the API (e.g., "https://traineeapp.azurewebsites.net")
    pub fn new(base_url: &str) -> Self {
        Self::with_retry(base_url, RetryPolicy::default())
    }

    pub fn with_retry(base_url: &str, retry: RetryPolicy) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            retry,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and expect a JSON response.
    async fn execute_json<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        method: &'static str,
    ) -> Result<T, TraineeError> {
        let resp = self.send(request, method).await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(self.error_from_response(resp).await);
        }
        // Read the body as text first so a shape mismatch reports a snippet
        // of what the API actually returned.
        let text = resp.text().await?;
        serde_json::from_str::<T>(&text).map_err(|e| {
            let body_snippet: String = text.chars().take(512).collect();
            TraineeError::Decode(format!("{} - body: {}", e, body_snippet))
        })
    }

    /// Send a request with no expected response body.
    async fn execute_empty(
        &self,
        request: reqwest::RequestBuilder,
        method: &'static str,
    ) -> Result<(), TraineeError> {
        let resp = self.send(request, method).await?;
        if !resp.status().is_success() {
            return Err(self.error_from_response(resp).await);
        }
        Ok(())
    }

    async fn send(
        &self,
        request: reqwest::RequestBuilder,
        method: &'static str,
    ) -> Result<reqwest::Response, TraineeError> {
        metrics::counter!("traineeapp_requests_total", "method" => method).increment(1);
        let resp = request.send().await;
        if resp.is_err() {
            metrics::counter!("traineeapp_request_failures_total", "method" => method)
                .increment(1);
        }
        Ok(resp?)
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> TraineeError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();
        metrics::counter!("traineeapp_request_failures_total", "status" => status.to_string())
            .increment(1);
        TraineeError::from_status(status, body_snippet)
    }

    /// Retrying GET returning JSON.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: String,
    ) -> Result<T, TraineeError> {
        tracing::debug!(%url, "GET");
        self.retry
            .retry_async(
                || self.execute_json(self.client.request(Method::GET, url.as_str()), "GET"),
                TraineeError::is_retryable,
            )
            .await
    }
}

#[async_trait]
impl TraineeApi for ReqwestTraineeClient {
    async fn get_customers(&self) -> Result<Vec<Customer>, TraineeError> {
        let page: CustomerPage = self.get_json(self.api_url("/api/customers")).await?;
        Ok(page.content)
    }

    async fn get_customer(&self, customer_id: u64) -> Result<Customer, TraineeError> {
        self.get_json(self.api_url(&format!("/api/customers/{}", customer_id)))
            .await
    }

    async fn create_customer(&self, customer: &Customer) -> Result<Customer, TraineeError> {
        let url = self.api_url("/api/customers");
        tracing::debug!(%url, "POST customer");
        self.execute_json(self.client.post(&url).json(customer), "POST")
            .await
    }

    async fn update_customer(
        &self,
        customer_id: u64,
        customer: &Customer,
    ) -> Result<Customer, TraineeError> {
        let url = self.api_url(&format!("/api/customers/{}", customer_id));
        tracing::debug!(%url, "PUT customer");
        self.execute_json(self.client.put(&url).json(customer), "PUT")
            .await
    }

    async fn delete_customer(&self, customer_id: u64) -> Result<(), TraineeError> {
        let url = self.api_url(&format!("/api/customers/{}", customer_id));
        tracing::debug!(%url, "DELETE customer");
        self.execute_empty(self.client.delete(&url), "DELETE").await
    }

    async fn get_trainings(&self) -> Result<Vec<TrainingRecord>, TraineeError> {
        self.get_json(self.api_url("/gettrainings")).await
    }

    async fn get_customer_trainings(
        &self,
        customer_id: u64,
    ) -> Result<Vec<TrainingRecord>, TraineeError> {
        let url = self.api_url(&format!("/api/customers/{}/trainings", customer_id));
        let page: TrainingPage = self.get_json(url).await?;
        Ok(page.content)
    }

    async fn create_training(
        &self,
        training: &NewTraining,
    ) -> Result<TrainingRecord, TraineeError> {
        let date = crate::normalize_training_date(&training.date).ok_or_else(|| {
            TraineeError::InvalidInput(format!("invalid training date: {}", training.date))
        })?;
        let body = NewTraining {
            date,
            ..training.clone()
        };
        let url = self.api_url("/api/trainings");
        tracing::debug!(%url, activity = %body.activity, "POST training");
        self.execute_json(self.client.post(&url).json(&body), "POST")
            .await
    }

    async fn delete_training(&self, training_id: u64) -> Result<(), TraineeError> {
        let url = self.api_url(&format!("/api/trainings/{}", training_id));
        tracing::debug!(%url, "DELETE training");
        self.execute_empty(self.client.delete(&url), "DELETE").await
    }

    async fn reset_database(&self) -> Result<(), TraineeError> {
        let url = self.api_url("/reset");
        tracing::warn!(%url, "resetting remote database");
        self.execute_empty(self.client.post(&url), "POST").await
    }

    fn customer_uri(&self, customer_id: u64) -> String {
        self.api_url(&format!("/api/customers/{}", customer_id))
    }
}

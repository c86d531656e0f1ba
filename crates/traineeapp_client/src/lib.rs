//! Typed client for the Personal Trainer ("traineeapp") REST API.
//!
//! The API serves customers as a HAL-style page (`{"content": [...]}`) in
//! which a customer's numeric id only exists inside its `self` link, and
//! trainings as a flat array with the owning customer embedded. The
//! [`TraineeApi`] trait is the seam consumers program against;
//! [`http_client::ReqwestTraineeClient`] is the reqwest-backed implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod http_client;
pub mod retry;

#[derive(Debug, Error)]
pub enum TraineeError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("authentication rejected: {0}")]
    Auth(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("api error (status {status}): {body}")]
    Api { status: u16, body: String },
    #[error("decode error: {0}")]
    Decode(String),
    #[error("configuration error: {0}")]
    Config(String),
}

impl TraineeError {
    /// Map a non-2xx status and a (truncated) body snippet to an error.
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => TraineeError::Auth(body),
            404 => TraineeError::NotFound(body),
            400 | 422 => TraineeError::InvalidInput(body),
            _ => TraineeError::Api { status, body },
        }
    }

    /// Whether a retry of an idempotent request may succeed. Transport
    /// failures and server-side errors qualify; anything the caller got
    /// wrong (4xx) does not.
    pub fn is_retryable(&self) -> bool {
        match self {
            TraineeError::Http(_) => true,
            TraineeError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// One entry of a HAL `links` array.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Customer {
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub streetaddress: String,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing)]
    pub links: Vec<Link>,
}

impl Customer {
    /// Numeric id, recovered from the last path segment of the `self` link.
    /// The API does not serve the id as a field.
    pub fn id(&self) -> Option<u64> {
        self.links
            .iter()
            .find(|l| l.rel == "self")
            .and_then(|l| l.href.trim_end_matches('/').rsplit('/').next())
            .and_then(|s| s.parse().ok())
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}

/// HAL page wrapper for customer collections.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct CustomerPage {
    #[serde(default)]
    pub content: Vec<Customer>,
}

/// HAL page wrapper for a customer's trainings.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct TrainingPage {
    #[serde(default)]
    pub content: Vec<TrainingRecord>,
}

fn unknown_activity() -> String {
    "unknown".to_string()
}

/// One logged training session as served by `/gettrainings`.
///
/// Missing-field policy: a record without `duration` deserializes as 0 and a
/// record without `activity` gets the sentinel label `"unknown"`. The API
/// does not guard these fields and neither do we; a negative `duration` is
/// carried as-is.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TrainingRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub duration: i64,
    #[serde(default = "unknown_activity")]
    pub activity: String,
    #[serde(default)]
    pub customer: Option<Customer>,
}

/// POST body for `/api/trainings`. `customer` is the owning customer's
/// resource URI, not an embedded object.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NewTraining {
    pub date: String,
    pub duration: i64,
    pub activity: String,
    pub customer: String,
}

/// Normalize a training date: a bare `YYYY-MM-DD` gets a midnight time,
/// RFC3339 and naive `YYYY-MM-DDTHH:MM:SS` inputs keep their time.
pub fn normalize_training_date(s: &str) -> Option<String> {
    if chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
        return Some(format!("{}T00:00:00", s));
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local().format("%Y-%m-%dT%H:%M:%S").to_string());
    }
    if let Ok(ndt) = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(ndt.format("%Y-%m-%dT%H:%M:%S").to_string());
    }
    None
}

#[async_trait]
pub trait TraineeApi: Send + Sync + 'static {
    async fn get_customers(&self) -> Result<Vec<Customer>, TraineeError>;
    async fn get_customer(&self, customer_id: u64) -> Result<Customer, TraineeError>;
    async fn create_customer(&self, customer: &Customer) -> Result<Customer, TraineeError>;
    async fn update_customer(
        &self,
        customer_id: u64,
        customer: &Customer,
    ) -> Result<Customer, TraineeError>;
    async fn delete_customer(&self, customer_id: u64) -> Result<(), TraineeError>;
    async fn get_trainings(&self) -> Result<Vec<TrainingRecord>, TraineeError>;
    async fn get_customer_trainings(
        &self,
        customer_id: u64,
    ) -> Result<Vec<TrainingRecord>, TraineeError>;
    async fn create_training(&self, training: &NewTraining)
    -> Result<TrainingRecord, TraineeError>;
    async fn delete_training(&self, training_id: u64) -> Result<(), TraineeError>;
    /// Reset the demo database to its seeded state.
    async fn reset_database(&self) -> Result<(), TraineeError>;
    /// Resource URI for a customer, as expected in [`NewTraining::customer`].
    fn customer_uri(&self, customer_id: u64) -> String;
}

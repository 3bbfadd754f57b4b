//! Signing service client.
//!
//! Key generation, transaction signing and submission are delegated to an
//! external microservice. This module only forwards request bodies and
//! passes its JSON answers back unchanged.
//!
//! # Endpoints
//!
//! - `GET  /api/create-keypair`
//! - `POST /api/create-payment`
//! - `POST /api/submit-transaction`
//! - `POST /api/create-trustline`

use std::time::Duration;

use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    error::AppError,
    models::{payment::SendPaymentRequest, trustline::TrustlineRequest},
};

const SERVICE_NAME: &str = "Signing service";

/// Outcome of `create-payment` as far as this service needs to inspect it.
#[derive(Debug, Deserialize)]
struct CreatePaymentOutcome {
    #[serde(default)]
    success: bool,

    #[serde(rename = "signedXDR")]
    signed_xdr: Option<String>,

    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SigningClient {
    http: Client,
    base_url: String,
}

impl SigningClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, AppError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Ask the signing service for a fresh keypair.
    pub async fn create_keypair(&self) -> Result<Value, AppError> {
        let url = self.endpoint("create-keypair");
        let response = self.http.get(&url).send().await?;
        Ok(ensure_success(&url, response).await?.json().await?)
    }

    /// Build and sign a payment transaction. Returns the raw service answer.
    pub async fn create_payment(&self, request: &SendPaymentRequest) -> Result<Value, AppError> {
        let url = self.endpoint("create-payment");
        let response = self.http.post(&url).json(request).send().await?;
        Ok(ensure_success(&url, response).await?.json().await?)
    }

    /// Submit a signed transaction envelope (base64 XDR) to the network.
    pub async fn submit_transaction(&self, signed_xdr: &str) -> Result<Value, AppError> {
        let url = self.endpoint("submit-transaction");
        let response = self
            .http
            .post(&url)
            .json(&json!({ "signedXDR": signed_xdr }))
            .send()
            .await?;
        Ok(ensure_success(&url, response).await?.json().await?)
    }

    pub async fn create_trustline(&self, request: &TrustlineRequest) -> Result<Value, AppError> {
        let url = self.endpoint("create-trustline");
        let response = self.http.post(&url).json(request).send().await?;
        Ok(ensure_success(&url, response).await?.json().await?)
    }

    /// Create, sign and submit a payment in two calls.
    ///
    /// # Process
    ///
    /// 1. `create-payment` returns a signed envelope
    /// 2. `submit-transaction` sends it to the network
    ///
    /// The submission answer is returned as-is.
    ///
    /// # Errors
    ///
    /// - `SigningRejected`: step 1 reported `success: false` or no envelope
    /// - `Upstream` / `Http`: either call failed at the transport level
    pub async fn send_payment(&self, request: &SendPaymentRequest) -> Result<Value, AppError> {
        let created = self.create_payment(request).await?;
        let signed_xdr = signed_envelope(created)?;

        tracing::info!(
            destination = %request.destination_address,
            asset = %request.asset_code,
            "Submitting signed payment"
        );

        self.submit_transaction(&signed_xdr).await
    }

    fn endpoint(&self, name: &str) -> String {
        format!("{}/api/{}", self.base_url, name)
    }
}

/// Extract the signed envelope from a `create-payment` answer.
fn signed_envelope(created: Value) -> Result<String, AppError> {
    let outcome: CreatePaymentOutcome = serde_json::from_value(created).map_err(|e| {
        AppError::SigningRejected(format!("Unexpected create-payment response: {e}"))
    })?;

    match outcome {
        CreatePaymentOutcome {
            success: true,
            signed_xdr: Some(xdr),
            ..
        } if !xdr.is_empty() => Ok(xdr),
        CreatePaymentOutcome { error, .. } => Err(AppError::SigningRejected(
            error.unwrap_or_else(|| "Failed to create payment".to_string()),
        )),
    }
}

async fn ensure_success(url: &str, response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::error!(url, status = status.as_u16(), body = %body, "Signing service request failed");

    Err(AppError::Upstream {
        service: SERVICE_NAME,
        status: status.as_u16(),
        message: if body.is_empty() {
            format!("HTTP error! status: {}", status.as_u16())
        } else {
            body
        },
    })
}

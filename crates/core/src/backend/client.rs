use crate::backend::error::BackendError;
use crate::backend::types::{AnalysisOutcome, SimulationRequest, SimulationResponse};
use crate::config::Settings;
use crate::domain::company::{Company, CompanyProfile};
use crate::domain::metrics::{FinancialSnapshot, Modifiers};
use anyhow::Context;
use std::time::Duration;

/// Shown in place of a critique whenever the simulation call fails.
pub const CRITIQUE_FALLBACK: &str = "Failed to get AI critique.";

/// Upload limits advertised to the user. The extension list is enforced
/// here before any bytes hit the wire; the size limit is advisory and left
/// to the backend to enforce.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["csv", "xls", "xlsx"];
pub const SOFT_SIZE_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// Seam over the FinPulse backend so orchestration can be exercised
/// without a network.
#[async_trait::async_trait]
pub trait AdvisorBackend: Send + Sync {
    async fn create_company(&self, profile: &CompanyProfile) -> Result<Company, BackendError>;

    async fn upload_financials(
        &self,
        company_id: i64,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<AnalysisOutcome, BackendError>;

    async fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResponse, BackendError>;

    async fn health(&self) -> Result<serde_json::Value, BackendError>;
}

#[derive(Debug, Clone)]
pub struct HttpBackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpBackendClient {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let base_url = settings.require_backend_base_url()?.to_string();

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .context("failed to build backend http client")?;

        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        res: reqwest::Response,
    ) -> Result<T, BackendError> {
        let status = res.status();
        let text = res.text().await.map_err(|e| BackendError::Network {
            detail: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(BackendError::Server {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| BackendError::Client {
            detail: format!("failed to decode backend response: {e}"),
        })
    }
}

#[async_trait::async_trait]
impl AdvisorBackend for HttpBackendClient {
    async fn create_company(&self, profile: &CompanyProfile) -> Result<Company, BackendError> {
        let res = self
            .http
            .post(self.url("/companies/"))
            .json(profile)
            .send()
            .await
            .map_err(send_error)?;
        Self::decode(res).await
    }

    async fn upload_financials(
        &self,
        company_id: i64,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<AnalysisOutcome, BackendError> {
        let extension = validated_extension(filename, bytes.len())?;

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(mime_for(&extension))
            .map_err(|e| BackendError::Client {
                detail: format!("invalid upload part: {e}"),
            })?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let res = self
            .http
            .post(self.url(&format!("/upload/{company_id}")))
            .multipart(form)
            .send()
            .await
            .map_err(send_error)?;
        Self::decode(res).await
    }

    async fn simulate(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResponse, BackendError> {
        let res = self
            .http
            .post(self.url("/simulate"))
            .json(request)
            .send()
            .await
            .map_err(send_error)?;
        Self::decode(res).await
    }

    async fn health(&self) -> Result<serde_json::Value, BackendError> {
        let res = self
            .http
            .get(self.url("/"))
            .send()
            .await
            .map_err(send_error)?;
        Self::decode(res).await
    }
}

/// Degrade-to-placeholder policy for the simulator: callers always get a
/// critique string to display, never an error.
pub async fn critique_or_fallback(
    backend: &dyn AdvisorBackend,
    baseline: &FinancialSnapshot,
    modifiers: &Modifiers,
    company_info: &CompanyProfile,
) -> String {
    let request = SimulationRequest {
        base_metrics: *baseline,
        modifiers: *modifiers,
        company_info: company_info.clone(),
    };

    match backend.simulate(&request).await {
        Ok(response) => response.ai_analysis,
        Err(err) => {
            tracing::warn!(error = %err, "simulation request failed; substituting placeholder critique");
            CRITIQUE_FALLBACK.to_string()
        }
    }
}

fn send_error(e: reqwest::Error) -> BackendError {
    if e.is_builder() {
        BackendError::Client {
            detail: e.to_string(),
        }
    } else {
        BackendError::Network {
            detail: e.to_string(),
        }
    }
}

fn validated_extension(filename: &str, size: usize) -> Result<String, BackendError> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    let Some(extension) = extension.filter(|e| ACCEPTED_EXTENSIONS.contains(&e.as_str())) else {
        return Err(BackendError::Client {
            detail: format!("unsupported file type for {filename}: expected csv, xls or xlsx"),
        });
    };

    if size > SOFT_SIZE_LIMIT_BYTES {
        tracing::warn!(
            filename,
            size,
            limit = SOFT_SIZE_LIMIT_BYTES,
            "upload exceeds the advertised 10 MB soft limit; sending anyway"
        );
    }

    Ok(extension)
}

fn mime_for(extension: &str) -> &'static str {
    match extension {
        "csv" => "text/csv",
        "xls" => "application/vnd.ms-excel",
        _ => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    }
}

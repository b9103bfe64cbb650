//! HTTP client for the analysis service.
//!
//! Every call goes straight to the network: no caching, no retries.

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::TransportError;
use crate::model::{AnalysisBatch, FinancialRecord};

/// A dataset picked by the user, read into memory for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetFile {
    pub name: String,
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl DatasetFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: None,
            bytes,
        }
    }

    /// Read a browser `File` into memory.
    pub async fn read(file: web_sys::File) -> Result<Self, String> {
        use js_sys::{ArrayBuffer, Uint8Array};
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let array_buffer: ArrayBuffer = JsFuture::from(file.array_buffer())
            .await
            .map_err(|e| format!("Failed to read file: {:?}", e))?
            .dyn_into()
            .map_err(|_| "Failed to convert to ArrayBuffer".to_string())?;

        let mime = file.type_();
        Ok(Self {
            name: file.name(),
            mime_type: (!mime.is_empty()).then_some(mime),
            bytes: Uint8Array::new(&array_buffer).to_vec(),
        })
    }
}

/// Operations the dashboard needs from the analysis service.
#[allow(async_fn_in_trait)]
pub trait AnalysisService {
    /// Upload a dataset and get back its analysis.
    async fn submit_dataset(&self, file: DatasetFile) -> Result<AnalysisBatch, TransportError>;

    /// All analyses, in the order the service returns them (oldest first).
    async fn list_history(&self) -> Result<Vec<AnalysisBatch>, TransportError>;

    /// Financial records for one batch, in service order.
    async fn list_records(&self, batch_id: &str) -> Result<Vec<FinancialRecord>, TransportError>;
}

/// [`AnalysisService`] backed by the real HTTP API.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpAnalysisClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn upload_url(&self) -> String {
        self.config.endpoint("upload")
    }

    pub fn history_url(&self) -> String {
        self.config.endpoint("analysis")
    }

    pub fn records_url(&self, batch_id: &str) -> String {
        self.config
            .endpoint(&format!("batch/{}/records", urlencoding::encode(batch_id)))
    }

    fn map_err(&self, err: reqwest::Error) -> TransportError {
        TransportError::from_reqwest(err, self.config.timeout)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, TransportError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| self.map_err(e))?;
        self.read_json(url, response).await
    }

    async fn read_json<T: DeserializeOwned>(
        &self,
        url: &str,
        response: reqwest::Response,
    ) -> Result<T, TransportError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("{} returned {}", url, status);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|e| self.map_err(e))
    }
}

impl AnalysisService for HttpAnalysisClient {
    async fn submit_dataset(&self, file: DatasetFile) -> Result<AnalysisBatch, TransportError> {
        let url = self.upload_url();
        info!("Uploading {} ({} bytes)", file.name, file.bytes.len());

        let mut part = reqwest::multipart::Part::bytes(file.bytes).file_name(file.name);
        if let Some(mime) = file.mime_type.as_deref() {
            part = part.mime_str(mime).map_err(|e| self.map_err(e))?;
        }
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| self.map_err(e))?;

        let batch: AnalysisBatch = self.read_json(&url, response).await?;
        info!("Upload analysed as batch {} ({})", batch.id, batch.risk_level.label());
        Ok(batch)
    }

    async fn list_history(&self) -> Result<Vec<AnalysisBatch>, TransportError> {
        let history: Vec<AnalysisBatch> = self.get_json(&self.history_url()).await?;
        debug!("Fetched {} analyses", history.len());
        Ok(history)
    }

    async fn list_records(&self, batch_id: &str) -> Result<Vec<FinancialRecord>, TransportError> {
        let records: Vec<FinancialRecord> = self.get_json(&self.records_url(batch_id)).await?;
        debug!("Fetched {} records for batch {}", records.len(), batch_id);
        Ok(records)
    }
}

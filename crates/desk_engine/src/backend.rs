use std::path::PathBuf;
use std::time::Duration;

use desk_logging::{desk_debug, desk_info};
use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Response, Url};

use crate::types::{ReportEnvelope, UploadResponse};
use crate::{DocumentPayload, FailureKind, FileId, TransportError, UploadSource, UploadedFile};

#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_document_bytes: u64,
    pub output_dir: PathBuf,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            // Report synthesis on the backend is slow.
            request_timeout: Duration::from_secs(120),
            max_document_bytes: 50 * 1024 * 1024,
            output_dir: PathBuf::from("reports"),
        }
    }
}

/// The ingestion/report backend.
#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    /// `POST /upload/` with one `files` part per source.
    async fn upload(&self, files: &[UploadSource]) -> Result<Vec<UploadedFile>, TransportError>;

    /// `GET /report/?file_ids=..`; returns the `report` object.
    async fn fetch_report(&self, file_ids: &[FileId]) -> Result<serde_json::Value, TransportError>;

    /// `GET /report/pdf?file_ids=..`; returns the document bytes.
    async fn fetch_document(&self, file_ids: &[FileId]) -> Result<DocumentPayload, TransportError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: EngineSettings,
    client: reqwest::Client,
}

impl ReqwestBackend {
    pub fn new(settings: EngineSettings) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| TransportError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Resolves `path` against the base URL and appends one `file_ids` pair per id.
    fn endpoint(&self, path: &str, file_ids: &[FileId]) -> Result<Url, TransportError> {
        let mut base = self.settings.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let mut url = Url::parse(&base)
            .and_then(|base| base.join(path))
            .map_err(|err| TransportError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if !file_ids.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for id in file_ids {
                pairs.append_pair("file_ids", &id.to_string());
            }
        }
        Ok(url)
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn upload(&self, files: &[UploadSource]) -> Result<Vec<UploadedFile>, TransportError> {
        let url = self.endpoint("upload/", &[])?;
        let mut form = Form::new();
        for file in files {
            let bytes = tokio::fs::read(&file.path).await.map_err(|err| {
                TransportError::new(FailureKind::Io, format!("{}: {err}", file.path.display()))
            })?;
            let part = Part::bytes(bytes)
                .file_name(file.file_name.clone())
                .mime_str(&file.mime)
                .map_err(|err| TransportError::new(FailureKind::Io, err.to_string()))?;
            form = form.part("files", part);
        }

        desk_info!("POST {} with {} file(s)", url, files.len());
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let body = success_body(response).await?;
        let parsed: UploadResponse = serde_json::from_slice(&body)
            .map_err(|err| TransportError::new(FailureKind::Decode, err.to_string()))?;
        Ok(parsed.files)
    }

    async fn fetch_report(&self, file_ids: &[FileId]) -> Result<serde_json::Value, TransportError> {
        let url = self.endpoint("report/", file_ids)?;
        desk_info!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let body = success_body(response).await?;
        let envelope: ReportEnvelope = serde_json::from_slice(&body)
            .map_err(|err| TransportError::new(FailureKind::Decode, err.to_string()))?;
        Ok(envelope.report)
    }

    async fn fetch_document(&self, file_ids: &[FileId]) -> Result<DocumentPayload, TransportError> {
        let url = self.endpoint("report/pdf", file_ids)?;
        desk_info!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;
        let response = check_status(response)?;

        let max_bytes = self.settings.max_document_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(TransportError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "document too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(TransportError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "document too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        desk_debug!("Received {} byte document ({:?})", bytes.len(), content_type);

        Ok(DocumentPayload {
            bytes,
            content_type,
        })
    }
}

fn check_status(response: Response) -> Result<Response, TransportError> {
    let status = response.status();
    if !status.is_success() {
        return Err(TransportError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }
    Ok(response)
}

async fn success_body(response: Response) -> Result<Vec<u8>, TransportError> {
    let response = check_status(response)?;
    let body = response.bytes().await.map_err(map_reqwest_error)?;
    Ok(body.to_vec())
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(FailureKind::Timeout, err.to_string());
    }
    TransportError::new(FailureKind::Network, err.to_string())
}

//! HTTP client for the Grok Imagine video generation API.

use crate::error::{GrokVideoError, Result};
use crate::types::{
    AspectRatio, JobOutcome, JobStatus, JobStatusResponse, Resolution, SubmitResponse,
    VideoGenerationRequest,
};
use serde::Serialize;
use std::time::{Duration, Instant};

const DEFAULT_BASE_URL: &str = "https://api.x.ai/v1";
const MODEL: &str = "grok-imagine-video";

/// Builder for [`GrokVideoClient`].
#[derive(Debug, Clone)]
pub struct GrokVideoClientBuilder {
    api_key: Option<String>,
    base_url: String,
    poll_interval: Duration,
    max_wait: Duration,
}

impl Default for GrokVideoClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            poll_interval: Duration::from_secs(10),
            max_wait: Duration::from_secs(300), // 5 minutes for video
        }
    }
}

impl GrokVideoClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key. Falls back to the `XAI_API_KEY` env var.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Overrides the API base URL. Mainly useful for pointing the client
    /// at a test server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the delay between status checks.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Sets the maximum time to wait for a terminal status.
    pub fn max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// Builds the client, resolving the API key.
    ///
    /// Fails with [`GrokVideoError::Auth`] when no key was given and
    /// `XAI_API_KEY` is not set — before any network call is made.
    pub fn build(self) -> Result<GrokVideoClient> {
        let api_key = self
            .api_key
            .or_else(|| std::env::var("XAI_API_KEY").ok())
            .ok_or_else(|| {
                GrokVideoError::Auth("XAI_API_KEY not set and no API key provided".into())
            })?;

        Ok(GrokVideoClient {
            client: reqwest::Client::new(),
            api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
            poll_interval: self.poll_interval,
            max_wait: self.max_wait,
        })
    }
}

/// Client for the Grok Imagine video generation API.
///
/// Holds the credential, endpoint base, and poll timing as explicit
/// configuration; nothing is read from ambient process state after
/// [`build`](GrokVideoClientBuilder::build).
pub struct GrokVideoClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    poll_interval: Duration,
    max_wait: Duration,
}

impl GrokVideoClient {
    /// Creates a new [`GrokVideoClientBuilder`].
    pub fn builder() -> GrokVideoClientBuilder {
        GrokVideoClientBuilder::new()
    }

    fn submit_url(&self) -> String {
        format!("{}/videos/generations", self.base_url)
    }

    /// Status endpoint for one job. The provider's contract for this path
    /// was uncertain at authoring time, so the shape lives in one place.
    fn status_url(&self, request_id: &str) -> String {
        format!("{}/videos/{}", self.base_url, request_id)
    }

    /// Submits a generation request, returning the parsed submission body.
    ///
    /// Exactly one POST is issued. Any HTTP status outside {200, 202} is
    /// logged and reported as [`GrokVideoError::Api`]; there are no
    /// retries.
    pub async fn submit(&self, request: &VideoGenerationRequest) -> Result<SubmitResponse> {
        let body = SubmitBody::from_request(request);

        let response = self
            .client
            .post(self.submit_url())
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status != 200 && status != 202 {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status, body = %body, "video submission rejected");
            return Err(GrokVideoError::Api { status, body });
        }

        let submitted: SubmitResponse = response.json().await?;
        tracing::info!(request_id = %submitted.request_id, "submitted video generation request");
        Ok(submitted)
    }

    /// Polls the status endpoint until the job reaches a terminal status.
    ///
    /// Sleeps for the configured poll interval between checks and gives up
    /// with [`GrokVideoError::Timeout`] once the maximum wait has elapsed.
    /// A provider `failed` status is a normal [`JobOutcome`], not an
    /// error; unrecognized status strings are treated as non-terminal.
    pub async fn wait_for_result(&self, request_id: &str) -> Result<JobOutcome> {
        let url = self.status_url(request_id);
        let start = Instant::now();

        loop {
            if start.elapsed() >= self.max_wait {
                tracing::warn!(
                    request_id = %request_id,
                    max_wait_secs = self.max_wait.as_secs(),
                    "gave up waiting for a terminal status"
                );
                return Err(GrokVideoError::Timeout(self.max_wait));
            }

            let response = self
                .client
                .get(&url)
                .header("Authorization", format!("Bearer {}", self.api_key))
                .send()
                .await?;

            let status = response.status().as_u16();
            if status != 200 && status != 202 {
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(request_id = %request_id, status, body = %body, "status poll rejected");
                return Err(GrokVideoError::Api { status, body });
            }

            let payload: JobStatusResponse = response.json().await?;

            match JobStatus::parse(&payload.status) {
                JobStatus::Completed => {
                    tracing::info!(
                        request_id = %request_id,
                        url = ?payload.url,
                        "video generation completed"
                    );
                    return Ok(JobOutcome::Completed(payload));
                }
                JobStatus::Failed => {
                    tracing::warn!(
                        request_id = %request_id,
                        error = ?payload.error,
                        "video generation failed"
                    );
                    return Ok(JobOutcome::Failed(payload));
                }
                JobStatus::Processing | JobStatus::Other(_) => {
                    tracing::debug!(
                        request_id = %request_id,
                        status = %payload.status,
                        elapsed_secs = start.elapsed().as_secs(),
                        "waiting for video generation"
                    );
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }
    }

    /// Submits a request and polls it to resolution.
    pub async fn generate(&self, request: &VideoGenerationRequest) -> Result<JobOutcome> {
        let submitted = self.submit(request).await?;
        self.wait_for_result(&submitted.request_id).await
    }
}

// Outgoing wire body.
#[derive(Debug, Serialize)]
struct SubmitBody {
    model: &'static str,
    prompt: String,
    duration: u32,
    aspect_ratio: AspectRatio,
    resolution: Resolution,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<ImageRef>,
}

#[derive(Debug, Serialize)]
struct ImageRef {
    url: String,
}

impl SubmitBody {
    fn from_request(req: &VideoGenerationRequest) -> Self {
        Self {
            model: MODEL,
            prompt: req.prompt.clone(),
            duration: req.duration_secs,
            aspect_ratio: req.aspect_ratio,
            resolution: req.resolution,
            image: req
                .image_url
                .as_ref()
                .map(|url| ImageRef { url: url.clone() }),
        }
    }
}

//! Core types for video generation requests and job status.

use serde::{Deserialize, Serialize};

/// Aspect ratios accepted by the video endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 16:9 landscape (widescreen).
    #[serde(rename = "16:9")]
    Landscape,
    /// 9:16 portrait (tall). The default for this client.
    #[default]
    #[serde(rename = "9:16")]
    Portrait,
    /// 1:1 square.
    #[serde(rename = "1:1")]
    Square,
}

impl AspectRatio {
    /// Returns the aspect ratio as the wire string (e.g., "9:16").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Landscape => "16:9",
            Self::Portrait => "9:16",
            Self::Square => "1:1",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Output resolutions accepted by the video endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Resolution {
    /// 480p.
    #[serde(rename = "480p")]
    P480,
    /// 720p. The default for this client.
    #[default]
    #[serde(rename = "720p")]
    P720,
    /// 1080p.
    #[serde(rename = "1080p")]
    P1080,
}

impl Resolution {
    /// Returns the resolution as the wire string (e.g., "720p").
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::P480 => "480p",
            Self::P720 => "720p",
            Self::P1080 => "1080p",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request to generate a video. Immutable once submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoGenerationRequest {
    /// The text prompt describing the desired video.
    pub prompt: String,
    /// Video duration in seconds.
    pub duration_secs: u32,
    /// Aspect ratio of the output.
    pub aspect_ratio: AspectRatio,
    /// Output resolution.
    pub resolution: Resolution,
    /// Source image URL (image-to-video).
    pub image_url: Option<String>,
}

impl VideoGenerationRequest {
    /// Creates a request with the fixed default parameters: a 5 second
    /// 9:16 clip at 720p, no reference image.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            duration_secs: 5,
            aspect_ratio: AspectRatio::default(),
            resolution: Resolution::default(),
            image_url: None,
        }
    }

    /// Sets the video duration in seconds.
    pub fn with_duration(mut self, secs: u32) -> Self {
        self.duration_secs = secs;
        self
    }

    /// Sets the aspect ratio.
    pub fn with_aspect_ratio(mut self, ratio: AspectRatio) -> Self {
        self.aspect_ratio = ratio;
        self
    }

    /// Sets the output resolution.
    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets a source image URL for image-to-video generation.
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// Provider-reported job state, parsed from the status field of a poll
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobStatus {
    /// Still being generated; keep polling.
    Processing,
    /// Finished; the payload carries the result URL.
    Completed,
    /// Ended in failure; the payload carries the provider's error.
    Failed,
    /// A status string this client does not recognize. Treated as
    /// non-terminal, like [`JobStatus::Processing`].
    Other(String),
}

impl JobStatus {
    /// Classifies a raw status string from a poll response.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "processing" => Self::Processing,
            "completed" => Self::Completed,
            "failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }

    /// True for statuses after which no further change is expected.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Body returned by a successful submission call.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    /// Opaque identifier for the in-flight generation job. The sole key
    /// used to query status; no client-side validation of its format.
    pub request_id: String,
}

/// Body returned by the status endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct JobStatusResponse {
    /// Raw status string as reported by the provider.
    pub status: String,
    /// Result URL, present once the job has completed.
    #[serde(default)]
    pub url: Option<String>,
    /// Provider error payload, present when the job has failed.
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Terminal result of a poll loop: the job resolved, one way or the other.
///
/// Transport failures, rejected HTTP statuses, and the poll deadline are
/// *not* outcomes; they surface as [`GrokVideoError`](crate::GrokVideoError).
#[derive(Debug, Clone)]
pub enum JobOutcome {
    /// The provider finished the job; the payload carries the result URL.
    Completed(JobStatusResponse),
    /// The provider gave up on the job; the payload carries its error.
    Failed(JobStatusResponse),
}

impl JobOutcome {
    /// True when the job completed successfully.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }

    /// The result URL, when the job completed and the provider sent one.
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Completed(resp) => resp.url.as_deref(),
            Self::Failed(_) => None,
        }
    }

    /// The provider's error payload, when the job failed.
    pub fn error(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Completed(_) => None,
            Self::Failed(resp) => resp.error.as_ref(),
        }
    }

    /// Consumes the outcome, returning the raw response payload.
    pub fn into_response(self) -> JobStatusResponse {
        match self {
            Self::Completed(resp) | Self::Failed(resp) => resp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio_as_str() {
        assert_eq!(AspectRatio::Landscape.as_str(), "16:9");
        assert_eq!(AspectRatio::Portrait.as_str(), "9:16");
        assert_eq!(AspectRatio::Square.as_str(), "1:1");
    }

    #[test]
    fn test_aspect_ratio_serializes_to_wire_string() {
        let json = serde_json::to_value(AspectRatio::Portrait).unwrap();
        assert_eq!(json, "9:16");
    }

    #[test]
    fn test_resolution_as_str() {
        assert_eq!(Resolution::P480.as_str(), "480p");
        assert_eq!(Resolution::P720.as_str(), "720p");
        assert_eq!(Resolution::P1080.as_str(), "1080p");
    }

    #[test]
    fn test_resolution_serializes_to_wire_string() {
        let json = serde_json::to_value(Resolution::P720).unwrap();
        assert_eq!(json, "720p");
    }

    #[test]
    fn test_request_defaults() {
        let req = VideoGenerationRequest::new("A cat");
        assert_eq!(req.prompt, "A cat");
        assert_eq!(req.duration_secs, 5);
        assert_eq!(req.aspect_ratio, AspectRatio::Portrait);
        assert_eq!(req.resolution, Resolution::P720);
        assert!(req.image_url.is_none());
    }

    #[test]
    fn test_request_builder_setters() {
        let req = VideoGenerationRequest::new("A cat")
            .with_duration(10)
            .with_aspect_ratio(AspectRatio::Landscape)
            .with_resolution(Resolution::P1080)
            .with_image_url("https://example.com/photo.jpg");

        assert_eq!(req.duration_secs, 10);
        assert_eq!(req.aspect_ratio, AspectRatio::Landscape);
        assert_eq!(req.resolution, Resolution::P1080);
        assert_eq!(req.image_url.as_deref(), Some("https://example.com/photo.jpg"));
    }

    #[test]
    fn test_job_status_parse() {
        assert_eq!(JobStatus::parse("processing"), JobStatus::Processing);
        assert_eq!(JobStatus::parse("completed"), JobStatus::Completed);
        assert_eq!(JobStatus::parse("failed"), JobStatus::Failed);
        assert_eq!(
            JobStatus::parse("queued"),
            JobStatus::Other("queued".into())
        );
    }

    #[test]
    fn test_job_status_terminality() {
        assert!(JobStatus::Completed.is_terminal());
        assert!(JobStatus::Failed.is_terminal());
        assert!(!JobStatus::Processing.is_terminal());
        assert!(!JobStatus::Other("queued".into()).is_terminal());
    }

    #[test]
    fn test_submit_response_deserialization() {
        let json = r#"{"request_id": "job-1"}"#;
        let resp: SubmitResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.request_id, "job-1");
    }

    #[test]
    fn test_status_response_completed() {
        let json = r#"{"status": "completed", "url": "https://example.com/video.mp4"}"#;
        let resp: JobStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, "completed");
        assert_eq!(resp.url.as_deref(), Some("https://example.com/video.mp4"));
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_status_response_failed_carries_error_payload() {
        let json = r#"{"status": "failed", "error": {"code": "moderation", "message": "blocked"}}"#;
        let resp: JobStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, "failed");
        assert_eq!(resp.error.as_ref().unwrap()["message"], "blocked");
    }

    #[test]
    fn test_status_response_processing_has_no_result_fields() {
        let json = r#"{"status": "processing"}"#;
        let resp: JobStatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, "processing");
        assert!(resp.url.is_none());
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_outcome_accessors() {
        let completed = JobOutcome::Completed(JobStatusResponse {
            status: "completed".into(),
            url: Some("https://example.com/video.mp4".into()),
            error: None,
        });
        assert!(completed.is_completed());
        assert_eq!(completed.url(), Some("https://example.com/video.mp4"));
        assert!(completed.error().is_none());

        let failed = JobOutcome::Failed(JobStatusResponse {
            status: "failed".into(),
            url: None,
            error: Some(serde_json::json!({"message": "blocked"})),
        });
        assert!(!failed.is_completed());
        assert!(failed.url().is_none());
        assert_eq!(failed.error().unwrap()["message"], "blocked");
    }

    #[test]
    fn test_outcome_into_response() {
        let failed = JobOutcome::Failed(JobStatusResponse {
            status: "failed".into(),
            url: None,
            error: None,
        });
        assert_eq!(failed.into_response().status, "failed");
    }
}

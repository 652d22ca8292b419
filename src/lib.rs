#![warn(missing_docs)]
//! Client for the xAI Grok Imagine video generation API.
//!
//! Submits a generation request (optionally with a reference image), then
//! polls the status endpoint until the job completes, fails, or a
//! wall-clock deadline elapses. One job at a time; all progress is
//! reported as `tracing` log lines.
//!
//! # Quick Start
//!
//! ```no_run
//! use grok_video::{GrokVideoClient, VideoGenerationRequest};
//!
//! #[tokio::main]
//! async fn main() -> grok_video::Result<()> {
//!     let client = GrokVideoClient::builder().build()?;
//!     let request = VideoGenerationRequest::new("A cat playing with a ball");
//!     let outcome = client.generate(&request).await?;
//!     match outcome.url() {
//!         Some(url) => println!("video ready: {url}"),
//!         None => println!("generation failed: {:?}", outcome.error()),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! The API key comes from the builder or the `XAI_API_KEY` environment
//! variable. Generation parameters default to a 5 second 9:16 clip at
//! 720p. A provider-reported failure is a normal [`JobOutcome::Failed`]
//! carrying the provider's error payload; [`GrokVideoError`] is reserved
//! for credential, transport, HTTP, and timeout failures.

mod client;
mod error;
mod types;

pub use client::{GrokVideoClient, GrokVideoClientBuilder};
pub use error::{GrokVideoError, Result};
pub use types::{
    AspectRatio, JobOutcome, JobStatus, JobStatusResponse, Resolution, SubmitResponse,
    VideoGenerationRequest,
};

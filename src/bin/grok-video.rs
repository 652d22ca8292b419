//! CLI for manually exercising the Grok Imagine video generation API.

use clap::{Args, Parser, Subcommand};
use grok_video::{GrokVideoClient, JobOutcome, VideoGenerationRequest};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Prompt for the text-to-video smoke scenario.
const SMOKE_TEXT_PROMPT: &str = "A young woman with curly hair waves at the camera \
and smiles warmly. She is sitting on a cozy couch. Soft natural lighting.";

/// Prompt for the image-to-video smoke scenario.
const SMOKE_IMAGE_PROMPT: &str =
    "The woman slowly smiles and waves at the camera. Gentle movement, natural and warm.";

/// Public reference image for the image-to-video smoke scenario.
const SMOKE_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400";

#[derive(Parser)]
#[command(name = "grok-video")]
#[command(about = "Exercise the xAI Grok Imagine video generation API")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a prompt and poll until the video resolves
    Generate(GenerateArgs),

    /// Poll an already-submitted job until it resolves
    Wait(WaitArgs),

    /// Run the canned smoke scenarios against the live API
    Smoke(SmokeArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// The text prompt describing the video
    prompt: String,

    /// Reference image URL (image-to-video)
    #[arg(long)]
    image_url: Option<String>,

    #[command(flatten)]
    poll: PollArgs,
}

#[derive(Args)]
struct WaitArgs {
    /// Job identifier returned by a previous submission
    request_id: String,

    #[command(flatten)]
    poll: PollArgs,
}

#[derive(Args)]
struct SmokeArgs {
    /// Also run the image-to-video scenario
    #[arg(long)]
    image: bool,

    #[command(flatten)]
    poll: PollArgs,
}

#[derive(Args)]
struct PollArgs {
    /// Maximum seconds to wait for a terminal status
    #[arg(long, default_value_t = 300)]
    max_wait: u64,

    /// Seconds between status checks
    #[arg(long, default_value_t = 10)]
    poll_interval: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env.local takes precedence; dotenvy never overrides existing vars.
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grok_video=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate(args).await,
        Commands::Wait(args) => wait(args).await,
        Commands::Smoke(args) => smoke(args).await,
    }
}

fn resolve_api_key() -> anyhow::Result<String> {
    std::env::var("XAI_API_KEY").map_err(|_| {
        anyhow::anyhow!("XAI_API_KEY not set; add it to .env.local or the environment")
    })
}

fn build_client(api_key: String, poll: &PollArgs) -> anyhow::Result<GrokVideoClient> {
    let client = GrokVideoClient::builder()
        .api_key(api_key)
        .max_wait(Duration::from_secs(poll.max_wait))
        .poll_interval(Duration::from_secs(poll.poll_interval))
        .build()?;
    Ok(client)
}

/// Masks a credential for display: first 10 and last 4 characters.
fn mask_key(key: &str) -> String {
    if key.len() <= 14 || !key.is_ascii() {
        return "*".repeat(key.chars().count());
    }
    format!("{}...{}", &key[..10], &key[key.len() - 4..])
}

async fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let client = build_client(resolve_api_key()?, &args.poll)?;

    let mut request = VideoGenerationRequest::new(&args.prompt);
    if let Some(url) = args.image_url {
        request = request.with_image_url(url);
    }

    let outcome = client.generate(&request).await?;
    report_outcome(&outcome)
}

async fn wait(args: WaitArgs) -> anyhow::Result<()> {
    let client = build_client(resolve_api_key()?, &args.poll)?;
    let outcome = client.wait_for_result(&args.request_id).await?;
    report_outcome(&outcome)
}

async fn smoke(args: SmokeArgs) -> anyhow::Result<()> {
    let api_key = resolve_api_key()?;
    println!("API key: {}", mask_key(&api_key));

    let client = build_client(api_key, &args.poll)?;
    let total = if args.image { 2 } else { 1 };

    println!("\n[1/{total}] text-to-video");
    let request = VideoGenerationRequest::new(SMOKE_TEXT_PROMPT);
    report_outcome(&client.generate(&request).await?)?;

    if args.image {
        println!("\n[2/{total}] image-to-video");
        let request =
            VideoGenerationRequest::new(SMOKE_IMAGE_PROMPT).with_image_url(SMOKE_IMAGE_URL);
        report_outcome(&client.generate(&request).await?)?;
    }

    Ok(())
}

fn report_outcome(outcome: &JobOutcome) -> anyhow::Result<()> {
    match outcome {
        JobOutcome::Completed(resp) => {
            match resp.url.as_deref() {
                Some(url) => println!("Video ready: {url}"),
                None => println!("Video completed, but the response carried no URL"),
            }
            Ok(())
        }
        JobOutcome::Failed(resp) => {
            let detail = resp
                .error
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "no error detail in response".into());
            anyhow::bail!("video generation failed: {detail}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_key_shows_first_ten_and_last_four() {
        assert_eq!(mask_key("xai-0123456789abcdefghij"), "xai-012345...ghij");
    }

    #[test]
    fn test_mask_key_hides_short_keys_entirely() {
        assert_eq!(mask_key("xai-short"), "*********");
    }

    #[test]
    fn test_mask_key_hides_non_ascii_keys_entirely() {
        assert_eq!(mask_key("clé-secrète-0123456789"), "*".repeat(22));
    }
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use insight_pulse::{
    openai::OpenAIClient, tracing::init_tracing_subscriber, AnalyzeOptions,
    InsightsProcessorBuilder,
};
use yt_source::{CaptionClient, YtDlpDownloader};

#[derive(Parser)]
#[command(name = "insight-pulse", about = "YouTube video insights pipeline")]
struct Cli {
    /// OpenAI API key
    #[arg(long, env = "OPENAI_API_KEY")]
    openai_key: String,

    /// Path to yt-dlp cookies file
    #[arg(long, env = "YTDLP_COOKIES_PATH")]
    cookies_path: Option<PathBuf>,

    /// Working directory for downloaded audio
    #[arg(long, default_value = "/var/tmp/insight-pulse")]
    workdir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Produce the full set of insights for a YouTube video
    Analyze {
        url: String,
        /// Custom instruction for the summary
        #[arg(long)]
        instruction: Option<String>,
    },
    /// Transcribe a YouTube video and print the transcription
    Transcribe { url: String },
    /// Produce the full set of insights for a local audio file
    AnalyzeFile {
        file: PathBuf,
        /// Custom instruction for the summary
        #[arg(long)]
        instruction: Option<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let _guard = sentry::init((
        std::env::var("SENTRY_DSN").unwrap_or_default(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: Some("production".into()),
            ..Default::default()
        },
    ));

    let cli = Cli::parse();
    init_tracing_subscriber()?;

    let openai = OpenAIClient::new(&cli.openai_key);
    let processor = InsightsProcessorBuilder::new()
        .caption_source(CaptionClient::new()?)
        .audio_downloader(YtDlpDownloader::new(&cli.workdir, cli.cookies_path.clone())?)
        .transcriber(openai.clone())
        .generator(openai)
        .build();

    match cli.command {
        Command::Analyze { url, instruction } => {
            let options = AnalyzeOptions {
                custom_instruction: instruction,
            };
            let insights = processor.analyze_url(&url, &options).await?;
            println!("{}", serde_json::to_string_pretty(&insights)?);
        }
        Command::Transcribe { url } => {
            let transcription = processor.transcribe_url(&url).await?;
            println!("{}", serde_json::to_string_pretty(&transcription)?);
        }
        Command::AnalyzeFile { file, instruction } => {
            let options = AnalyzeOptions {
                custom_instruction: instruction,
            };
            let insights = processor.analyze_file(&file, &options).await?;
            println!("{}", serde_json::to_string_pretty(&insights)?);
        }
    }

    Ok(())
}

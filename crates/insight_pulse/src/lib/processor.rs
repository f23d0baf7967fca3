pub mod builder;

use std::path::Path;

use yt_source::{AudioDownloader, CaptionSource};

use crate::{
    error::Error,
    flows::{
        build_action_plan, extract_action_items, generate_summary, highlight_transcription,
        transcribe_file, transcribe_upload, transcribe_youtube, SummaryInput, TranscriptionOutput,
        PLAN_FALLBACK, SUMMARY_FALLBACK,
    },
    Generator, Transcriber, VideoInsights,
};

/// Per-request knobs for the derived flows.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Extra instruction threaded into the summary prompt.
    pub custom_instruction: Option<String>,
}

/// The end-to-end insights pipeline: resolve a transcription, then run
/// each derived flow against it in program order.
#[derive(Debug)]
pub struct InsightsProcessor<C, A, T, G>
where
    C: CaptionSource + Send + Sync + 'static,
    A: AudioDownloader + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    G: Generator + Send + Sync + 'static,
{
    caption_source: C,
    audio_downloader: A,
    transcriber: T,
    generator: G,
}

impl<C, A, T, G> InsightsProcessor<C, A, T, G>
where
    C: CaptionSource + Send + Sync + 'static,
    A: AudioDownloader + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    G: Generator + Send + Sync + 'static,
{
    /// Produces the full set of insights for a YouTube URL.
    #[tracing::instrument(skip(self, options))]
    pub async fn analyze_url(
        &self,
        youtube_url: &str,
        options: &AnalyzeOptions,
    ) -> Result<VideoInsights, Error> {
        let output = self.transcribe_url(youtube_url).await?;
        Ok(self.derive_insights(output.transcription, options).await)
    }

    /// Produces the full set of insights for an uploaded audio payload
    /// given as a base64 data URI.
    #[tracing::instrument(skip_all)]
    pub async fn analyze_audio(
        &self,
        audio_data_uri: &str,
        options: &AnalyzeOptions,
    ) -> Result<VideoInsights, Error> {
        let output = transcribe_upload(&self.transcriber, audio_data_uri).await?;
        Ok(self.derive_insights(output.transcription, options).await)
    }

    /// Produces the full set of insights for an audio file on the
    /// local filesystem.
    #[tracing::instrument(skip(self, options))]
    pub async fn analyze_file(
        &self,
        path: &Path,
        options: &AnalyzeOptions,
    ) -> Result<VideoInsights, Error> {
        let output = transcribe_file(&self.transcriber, path).await?;
        Ok(self.derive_insights(output.transcription, options).await)
    }

    /// Resolves just the transcription for a YouTube URL.
    #[tracing::instrument(skip(self))]
    pub async fn transcribe_url(&self, youtube_url: &str) -> Result<TranscriptionOutput, Error> {
        transcribe_youtube(
            &self.caption_source,
            &self.audio_downloader,
            &self.transcriber,
            youtube_url,
        )
        .await
    }

    /// Runs the derived flows against a transcription. Each flow
    /// depends only on the transcription and carries its own fallback,
    /// so a failure in one never affects the others. Flows are skipped
    /// entirely when the transcription is empty.
    #[tracing::instrument(skip_all)]
    async fn derive_insights(
        &self,
        transcription: String,
        options: &AnalyzeOptions,
    ) -> VideoInsights {
        if transcription.trim().is_empty() {
            tracing::warn!("Transcription is empty, skipping derived flows");
            return VideoInsights {
                transcription,
                summary: SUMMARY_FALLBACK.to_string(),
                actionable_items: Vec::new(),
                actionable_plan: PLAN_FALLBACK.to_string(),
                segments: Vec::new(),
            };
        }

        let summary = generate_summary(
            &self.generator,
            &SummaryInput {
                transcription: transcription.clone(),
                custom_instruction: options.custom_instruction.clone(),
            },
        )
        .await;
        let action_items = extract_action_items(&self.generator, &transcription).await;
        let plan = build_action_plan(&self.generator, &transcription).await;
        let highlights = highlight_transcription(&self.generator, &transcription).await;

        VideoInsights {
            transcription,
            summary: summary.summary,
            actionable_items: action_items.actionable_items,
            actionable_plan: plan.actionable_plan,
            segments: highlights.segments,
        }
    }
}

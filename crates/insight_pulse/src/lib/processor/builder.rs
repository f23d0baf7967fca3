use yt_source::{AudioDownloader, CaptionSource};

use crate::{Generator, InsightsProcessor, Transcriber};

pub struct InsightsProcessorBuilder<C = (), A = (), T = (), G = ()> {
    caption_source: C,
    audio_downloader: A,
    transcriber: T,
    generator: G,
}

impl InsightsProcessorBuilder {
    pub fn new() -> Self {
        Self {
            caption_source: (),
            audio_downloader: (),
            transcriber: (),
            generator: (),
        }
    }
}

impl Default for InsightsProcessorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C, A, T, G> InsightsProcessorBuilder<C, A, T, G> {
    pub fn caption_source<C2: CaptionSource + Send + Sync + 'static>(
        self,
        caption_source: C2,
    ) -> InsightsProcessorBuilder<C2, A, T, G> {
        InsightsProcessorBuilder {
            caption_source,
            audio_downloader: self.audio_downloader,
            transcriber: self.transcriber,
            generator: self.generator,
        }
    }

    pub fn audio_downloader<A2: AudioDownloader + Send + Sync + 'static>(
        self,
        audio_downloader: A2,
    ) -> InsightsProcessorBuilder<C, A2, T, G> {
        InsightsProcessorBuilder {
            caption_source: self.caption_source,
            audio_downloader,
            transcriber: self.transcriber,
            generator: self.generator,
        }
    }

    pub fn transcriber<T2: Transcriber + Send + Sync + 'static>(
        self,
        transcriber: T2,
    ) -> InsightsProcessorBuilder<C, A, T2, G> {
        InsightsProcessorBuilder {
            caption_source: self.caption_source,
            audio_downloader: self.audio_downloader,
            transcriber,
            generator: self.generator,
        }
    }

    pub fn generator<G2: Generator + Send + Sync + 'static>(
        self,
        generator: G2,
    ) -> InsightsProcessorBuilder<C, A, T, G2> {
        InsightsProcessorBuilder {
            caption_source: self.caption_source,
            audio_downloader: self.audio_downloader,
            transcriber: self.transcriber,
            generator,
        }
    }
}

impl<C, A, T, G> InsightsProcessorBuilder<C, A, T, G>
where
    C: CaptionSource + Send + Sync + 'static,
    A: AudioDownloader + Send + Sync + 'static,
    T: Transcriber + Send + Sync + 'static,
    G: Generator + Send + Sync + 'static,
{
    pub fn build(self) -> InsightsProcessor<C, A, T, G> {
        InsightsProcessor {
            caption_source: self.caption_source,
            audio_downloader: self.audio_downloader,
            transcriber: self.transcriber,
            generator: self.generator,
        }
    }
}

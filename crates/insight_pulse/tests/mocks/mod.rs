pub mod audio_downloader;
pub mod caption_source;
pub mod generator;
pub mod transcriber;

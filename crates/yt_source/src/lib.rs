//! # YouTube Source Module
//!
//! This module wraps the external YouTube collaborators the insights
//! pipeline depends on: caption transcript lookup and audio download,
//! both keyed by video ID, plus video-ID extraction from the URL shapes
//! users actually paste.
//!
//! Both collaborators honor a null-on-failure contract: a missing
//! transcript or a failed download surfaces as `None`, never as an
//! error the caller has to unwind from.

mod captions;
mod data_uri;
mod downloader;
mod url;

pub use captions::{CaptionClient, CaptionSource};
pub use data_uri::{mime_for_extension, DataUri, DataUriError};
pub use downloader::{AudioDownloader, YtDlpDownloader};
pub use url::{extract_video_id, is_valid_video_id};

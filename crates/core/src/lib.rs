//! Detects near-black letterbox/pillarbox bars at frame edges and repairs
//! affected frames by substituting the most recent bar-free frame, while
//! recording every detection in a structured log.
//!
//! Layout follows a ports-and-adapters split: each feature directory holds a
//! `domain` module (traits and pure types) and, where needed, an
//! `infrastructure` module (ffmpeg, image, serde_json implementations).

pub mod detection;
pub mod pipeline;
pub mod report;
pub mod shared;
pub mod video;

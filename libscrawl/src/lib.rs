//! # Lib Scrawl (libscrawl)
//!
//! This library provides the building blocks for streamed freehand drawing applications.
//! It includes the drawing event model and its newline-delimited JSON wire codec, the
//! normalized coordinate mapping, the stroke continuity tracker, and the renderer that
//! replays a stream of events onto a pluggable canvas surface.
//! It also provides the single-session TCP server and client connection plumbing.

pub mod client;
pub mod codec;
pub mod coords;
pub mod event;
pub mod geometry;
pub mod render;
pub mod server;
pub mod stroke;

pub use serde_json;
pub use tokio;

#[derive(Debug, thiserror::Error)]
pub enum ScrawlError {
    IoError(#[from] std::io::Error),
    EncodeError(#[from] serde_json::Error),
}

impl std::fmt::Display for ScrawlError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScrawlError::IoError(err) => write!(f, "IO error: {}", err),
            ScrawlError::EncodeError(err) => write!(f, "Encode error: {}", err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrawlError>;

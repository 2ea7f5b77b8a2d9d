// Copyright 2024-2025 Cornell University
// released under BSD 3-Clause License
// author: Kevin Laeufer <laeufer@cornell.edu>

mod document;
pub mod pad;
pub mod preview;
mod render;
pub mod simple;
mod token;

/// Cargo.toml version of this library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width of the label column used by [`render`].
pub const DEFAULT_LABEL_WIDTH: usize = 10;
/// Placed between the label column and the wave.
pub const DEFAULT_SEPARATOR: &str = ": ";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde1", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderOptions {
    /// Signal names shorter than this are padded with spaces. Longer names are never truncated.
    pub label_width: usize,
    /// Text between the label column and the rendered wave.
    pub separator: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WavetextError {
    #[error("no waveform file selected")]
    NoInput,
    #[error("failed to parse waveform JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid waveform document: {0}")]
    Shape(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WavetextError>;

pub use document::{parse_document, parse_document_slice, Signal, WaveformDocument};
pub use render::{render, render_signal, render_with_options};
pub use token::{glyph, Token, UNKNOWN_GLYPH};

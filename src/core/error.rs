//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

/// Precise configuration faults.
#[derive(Debug)]
pub enum ConfigError {
    CanvasTooSmall {
        want_w: u32,
        want_h: u32,
        got_w: u32,
        got_h: u32,
    },
    ZeroTickStep,
    InvalidLineWidth(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::CanvasTooSmall {
                want_w,
                want_h,
                got_w,
                got_h,
            } => write!(
                f,
                "canvas too small: need ≥{want_w}×{want_h} px, got {got_w}×{got_h} px"
            ),
            ConfigError::ZeroTickStep => f.write_str("y tick step must be non-zero"),
            ConfigError::InvalidLineWidth(w) => write!(f, "line width {w} must be > 0"),
        }
    }
}
impl Error for ConfigError {}

/// Read or decoding failure while counting, with the 1-based line it hit.
#[derive(Debug)]
pub struct ScanError {
    pub line: usize,
    pub source: io::Error,
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "read error on line {}: {}", self.line, self.source)
    }
}
impl Error for ScanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum GraphError {
    /// Wrong invocation; carries the rendered usage text.
    Usage(String),
    Io(io::Error),
    Scan(ScanError),
    Config(ConfigError),
    /// The table handed to the renderer has no entries.
    EmptyData,
    /// The line series could not be built.
    Render(String),
    Encode(image::ImageError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::Usage(u) => f.write_str(u.trim_end()),
            GraphError::Io(e) => write!(f, "{e}"),
            GraphError::Scan(e) => write!(f, "{e}"),
            GraphError::Config(e) => write!(f, "{e}"),
            GraphError::EmptyData => f.write_str("cannot graph as data is empty"),
            GraphError::Render(msg) => write!(f, "cannot build line series: {msg}"),
            GraphError::Encode(e) => write!(f, "PNG encoding failed: {e}"),
        }
    }
}
impl Error for GraphError {}

// automatic conversions
impl From<io::Error> for GraphError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ScanError> for GraphError {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}
impl From<ConfigError> for GraphError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<image::ImageError> for GraphError {
    fn from(e: image::ImageError) -> Self {
        Self::Encode(e)
    }
}

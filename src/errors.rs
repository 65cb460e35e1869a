use std::fmt::Display;
use std::path::PathBuf;
use timsrust::TimsRustError;

#[derive(Debug)]
pub enum MzTraceError {
    AxisError(AxisError),
    ResamplingError(ResamplingError),
    ScanReadError(ScanReadError),
    RenderError(String),
    ConfigError(String),
    Other(String),
}

pub type Result<T> = std::result::Result<T, MzTraceError>;

impl Display for MzTraceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for MzTraceError {}

impl MzTraceError {
    pub fn custom(msg: impl Display) -> Self {
        Self::Other(msg.to_string())
    }

    pub fn render(msg: impl Display) -> Self {
        Self::RenderError(msg.to_string())
    }

    pub fn config(msg: impl Display) -> Self {
        Self::ConfigError(msg.to_string())
    }
}

/// Failures building or searching the m/z axis.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisError {
    InvalidRange {
        mz_min: f64,
        mz_max: f64,
        resolution: f64,
    },
    EmptyAxis,
}

/// Failures turning one raw scan into an axis-aligned one.
#[derive(Debug, Clone, PartialEq)]
pub enum ResamplingError {
    InsufficientData { num_points: usize },
    LengthMismatch { mz_len: usize, intensity_len: usize },
    UnsortedMz { index: usize },
}

#[derive(Debug)]
pub enum ScanReadError {
    Io(std::io::Error),
    MzData { path: PathBuf, message: String },
    TimsRust(TimsRustError), // TimsRustError is not Clone, so neither is this.
    MissingArrays { path: PathBuf, scan_index: usize },
}

impl From<AxisError> for MzTraceError {
    fn from(e: AxisError) -> Self {
        MzTraceError::AxisError(e)
    }
}

impl From<ResamplingError> for MzTraceError {
    fn from(e: ResamplingError) -> Self {
        MzTraceError::ResamplingError(e)
    }
}

impl From<ScanReadError> for MzTraceError {
    fn from(e: ScanReadError) -> Self {
        MzTraceError::ScanReadError(e)
    }
}

impl From<std::io::Error> for ScanReadError {
    fn from(e: std::io::Error) -> Self {
        ScanReadError::Io(e)
    }
}

impl From<TimsRustError> for ScanReadError {
    fn from(e: TimsRustError) -> Self {
        ScanReadError::TimsRust(e)
    }
}

impl From<std::io::Error> for MzTraceError {
    fn from(e: std::io::Error) -> Self {
        MzTraceError::ScanReadError(ScanReadError::Io(e))
    }
}

impl From<TimsRustError> for MzTraceError {
    fn from(e: TimsRustError) -> Self {
        MzTraceError::ScanReadError(ScanReadError::TimsRust(e))
    }
}

impl From<serde_json::Error> for MzTraceError {
    fn from(e: serde_json::Error) -> Self {
        MzTraceError::ConfigError(e.to_string())
    }
}

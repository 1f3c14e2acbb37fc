use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProbeError {
    #[error("screen capture unavailable: {0}")]
    CaptureUnavailable(String),

    #[error("invalid pixel buffer: {0}")]
    InvalidBuffer(String),

    #[error("invalid zoom configuration: {0}")]
    InvalidZoom(String),

    #[error("global input hook unavailable: {0}")]
    HookUnavailable(String),
}

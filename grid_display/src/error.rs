// error.rs - Render error types

use thiserror::Error;

/// Errors that can occur while setting up or running the render pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No graphics context could be acquired. Fatal; there is no fallback.
    #[error("rendering context unavailable")]
    RenderContextUnavailable,

    /// Shader compilation failed.
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),

    /// Program linking failed.
    #[error("program link failed: {0}")]
    ProgramLink(String),

    /// A program, buffer or vertex array could not be allocated.
    #[error("GPU resource allocation failed: {0}")]
    ResourceAllocation(String),

    /// The linked program has no attribute with this name.
    #[error("missing vertex attribute `{0}`")]
    MissingAttribute(&'static str),

    /// The linked program has no uniform with this name.
    #[error("missing uniform `{0}`")]
    MissingUniform(&'static str),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

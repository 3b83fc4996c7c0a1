use lumen_core::SceneError;
use thiserror::Error;

/// Errors reported by the renderer.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Camera::setup() must be called after configuring and before rendering")]
    NotSetUp,

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}

pub type RenderResult<T> = Result<T, RenderError>;

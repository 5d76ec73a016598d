use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("host UI unavailable")]
    UiUnavailable,

    #[error("presentation failed: {0}")]
    Presentation(String),
}

//! Error types for the campaigns creator application.
//! Consolidates errors from the pipeline components behind one enum so the
//! entry point can propagate any failure with context.
#[derive(Debug, thiserror::Error)]
pub enum CreatorError {
    #[error("Invalid address in configuration: {0}")]
    InvalidAddress(String),

    #[error("Invalid chain id in configuration: {0}")]
    InvalidChainId(String),

    #[error("Builder error: {0}")]
    Builder(#[from] campaigns_pipeline::BuilderError),

    #[error("Resolver error: {0}")]
    Resolver(#[from] campaigns_pipeline::ResolverError),

    #[error("Submission error: {0}")]
    Submission(#[from] campaigns_pipeline::SubmissionError),
}

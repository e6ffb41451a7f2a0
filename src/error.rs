use thiserror::Error;

/// Errors that can occur while decoding the JSON wire formats.
#[derive(Error, Debug, Clone)]
pub enum ParseError {
    #[error("Failed to parse workflow JSON: {0}")]
    InvalidWorkflowJson(String),

    #[error("Failed to parse capability status JSON: {0}")]
    InvalidStatusJson(String),
}

/// Errors that can occur when converting a custom editor format into a Shinsa `WorkflowDefinition`.
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Invalid workflow data: {0}")]
    InvalidDefinition(String),
}

use thiserror::Error;

/// Errors raised by the canvas surface.
#[derive(Error, Debug)]
pub enum CanvasError {
    /// The surface has not been sized yet, so there is no buffer to encode.
    #[error("canvas has not been initialized")]
    NotInitialized,
    #[error("failed to encode canvas: {0}")]
    Encode(#[from] image::ImageError),
}

/// Everything that can go wrong between pressing Solve and receiving an answer.
///
/// All variants are folded into the same `Error` result by the orchestrator;
/// the split only matters for the wording shown to the user.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("solver responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("unexpected response from solver: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl SolveError {
    /// Human readable description of the failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => {
                "Could not reach the solver. Check that it is running and try again.".to_owned()
            }
            Self::Status { status, .. } => {
                format!("The solver rejected the drawing (status {status}). Try again.")
            }
            Self::MalformedResponse(_) => {
                "The solver sent back something we could not read.".to_owned()
            }
        }
    }
}

/// Errors that can occur while starting the application.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to start request runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to set up solve client: {0}")]
    Client(#[from] SolveError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_mentions_status() {
        let err = SolveError::Status {
            status: 500,
            body: "boom".to_owned(),
        };
        assert!(err.user_message().contains("500"));
        assert_eq!(err.to_string(), "solver responded with status 500: boom");
    }

    #[test]
    fn test_client_setup_failure_is_an_app_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(SolveError::from(parse_err));
        assert!(matches!(err, AppError::Client(SolveError::MalformedResponse(_))));
        assert!(err.to_string().starts_with("failed to set up solve client"));
    }

    #[test]
    fn test_malformed_response_is_readable() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SolveError::from(parse_err);
        assert!(!err.user_message().is_empty());
        assert!(err.to_string().starts_with("unexpected response from solver"));
    }
}

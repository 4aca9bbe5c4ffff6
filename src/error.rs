use std::fmt;

use crate::gemini::transport::TransportError;

/// Which client operation produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Generate,
    Refine,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Generate => "generation",
            Operation::Refine => "refinement",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            Operation::Generate => "Failed to generate logo from Gemini API.",
            Operation::Refine => "Failed to refine logo from Gemini API.",
        }
    }

    fn missing_image_message(&self) -> &'static str {
        match self {
            Operation::Generate => "Invalid response from Gemini API: No image data found.",
            Operation::Refine => "Invalid response from Gemini API: No refined image data found.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LogoError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The remote call itself failed. `source` is kept for diagnostics only.
    #[error("{}", .operation.failure_message())]
    Upstream {
        operation: Operation,
        #[source]
        source: TransportError,
    },

    #[error("{}", .operation.missing_image_message())]
    NoImageData { operation: Operation },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LogoError {
    pub fn operation(&self) -> Option<Operation> {
        match self {
            LogoError::Upstream { operation, .. } | LogoError::NoImageData { operation } => {
                Some(*operation)
            }
            _ => None,
        }
    }

    /// Message safe to show an end user.
    ///
    /// Upstream failures and empty responses read the same here; they stay
    /// distinguishable through the variant and the logs.
    pub fn user_message(&self) -> String {
        match self {
            LogoError::Upstream { operation, .. } | LogoError::NoImageData { operation } => {
                match operation {
                    Operation::Generate => {
                        "Something went wrong while generating the logo. Please try again later."
                            .to_string()
                    }
                    Operation::Refine => {
                        "Something went wrong while refining the logo. Please try again later."
                            .to_string()
                    }
                }
            }
            LogoError::InvalidInput(msg) => msg.clone(),
            LogoError::Configuration(msg) => format!("Configuration error: {}", msg),
            LogoError::Io(e) => format!("File error: {}", e),
        }
    }
}

pub type Result<T> = std::result::Result<T, LogoError>;

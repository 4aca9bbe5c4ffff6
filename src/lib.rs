//! Generate a business logo with the Gemini image model and refine it from
//! free-text feedback.

pub mod config;
pub mod error;
pub mod gemini;
pub mod logger;
pub mod models;
pub mod prompt;

pub use config::GeminiConfig;
pub use error::{LogoError, Operation, Result};
pub use gemini::{ContentTransport, GeminiClient, HttpTransport, LogoClient, TransportError};
pub use models::{GenerationRequest, ImagePayload, RefinementRequest};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{LogoError, Result};

/// A generated image as returned by the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePayload {
    bytes: String, // Base64 encoded
    mime_type: String,
}

impl ImagePayload {
    pub fn new(bytes: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes: bytes.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Encodes raw image bytes, e.g. a logo loaded back from disk.
    pub fn from_raw(raw: &[u8], mime_type: impl Into<String>) -> Self {
        Self::new(STANDARD.encode(raw), mime_type)
    }

    pub fn bytes(&self) -> &str {
        &self.bytes
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(&self.bytes)
            .map_err(|e| LogoError::InvalidInput(format!("image data is not valid base64: {}", e)))
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.bytes)
    }

    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" | "image/jpg" => "jpeg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            "image/svg+xml" => "svg",
            _ => "bin",
        }
    }
}

/// A validated request for an initial logo.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub description: String,
}

impl GenerationRequest {
    pub fn new(description: impl Into<String>) -> Result<Self> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(LogoError::InvalidInput(
                "Please enter a description of the business for the logo.".into(),
            ));
        }
        Ok(Self { description })
    }
}

/// A validated request to rework a previously generated logo.
#[derive(Debug, Clone)]
pub struct RefinementRequest {
    pub prior_image: ImagePayload,
    pub feedback: String,
}

impl RefinementRequest {
    pub fn new(prior_image: ImagePayload, feedback: impl Into<String>) -> Result<Self> {
        let feedback = feedback.into();
        if prior_image.bytes().is_empty() || feedback.trim().is_empty() {
            return Err(LogoError::InvalidInput(
                "There is no logo to refine or no feedback was entered.".into(),
            ));
        }
        Ok(Self {
            prior_image,
            feedback,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_uri() {
        let payload = ImagePayload::new("QUJD", "image/png");
        assert_eq!(payload.to_data_uri(), "data:image/png;base64,QUJD");
        assert_eq!(payload.file_extension(), "png");
    }

    #[test]
    fn test_decode() {
        let payload = ImagePayload::from_raw(b"ABC", "image/png");
        assert_eq!(payload.bytes(), "QUJD");
        assert_eq!(payload.decode().unwrap(), b"ABC");

        let broken = ImagePayload::new("not base64!", "image/png");
        assert!(matches!(broken.decode(), Err(LogoError::InvalidInput(_))));
    }

    #[test]
    fn test_request_validation() {
        assert!(GenerationRequest::new("CodeAndBrew").is_ok());
        assert!(matches!(
            GenerationRequest::new("   \n"),
            Err(LogoError::InvalidInput(_))
        ));

        let prior = ImagePayload::new("QUJD", "image/png");
        assert!(RefinementRequest::new(prior.clone(), "use more blue").is_ok());
        assert!(RefinementRequest::new(prior, "").is_err());
        assert!(RefinementRequest::new(ImagePayload::new("", "image/png"), "blue").is_err());
    }
}

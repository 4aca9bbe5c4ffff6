use std::sync::Arc;

use uuid::Uuid;

use crate::{
    error::{LogoError, Operation, Result},
    logger::Timer,
    models::{GenerateContentRequest, GenerationRequest, ImagePayload, Part, RefinementRequest},
    prompt,
};

use super::transport::ContentTransport;

#[derive(Clone)]
pub struct LogoClient {
    transport: Arc<dyn ContentTransport>,
    model: String,
}

impl LogoClient {
    pub fn new(transport: Arc<dyn ContentTransport>, model: impl Into<String>) -> Self {
        Self {
            transport,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("gemini-2.5-flash-image", "Gemini 2.5 Flash Image", "Google"),
            (
                "gemini-2.5-flash-image-preview",
                "Gemini 2.5 Flash Image (preview)",
                "Google",
            ),
            (
                "gemini-2.0-flash-preview-image-generation",
                "Gemini 2.0 Flash Image Generation",
                "Google",
            ),
        ]
    }

    /// Generates a first logo from a business description.
    ///
    /// The description is expected to be non-empty; see [`GenerationRequest::new`].
    pub async fn generate(&self, description: &str) -> Result<ImagePayload> {
        let request =
            GenerateContentRequest::image_only(vec![Part::text(prompt::generation_prompt(
                description,
            ))]);
        self.execute(Operation::Generate, request).await
    }

    /// Reworks `prior_image` according to `feedback`.
    ///
    /// The image part is sent before the instruction so the model reads the
    /// text as feedback on that image.
    pub async fn refine(&self, prior_image: &ImagePayload, feedback: &str) -> Result<ImagePayload> {
        let request = GenerateContentRequest::image_only(vec![
            Part::image(prior_image),
            Part::text(prompt::refinement_prompt(feedback)),
        ]);
        self.execute(Operation::Refine, request).await
    }

    pub async fn generate_request(&self, request: &GenerationRequest) -> Result<ImagePayload> {
        self.generate(&request.description).await
    }

    pub async fn refine_request(&self, request: &RefinementRequest) -> Result<ImagePayload> {
        self.refine(&request.prior_image, &request.feedback).await
    }

    async fn execute(
        &self,
        operation: Operation,
        request: GenerateContentRequest,
    ) -> Result<ImagePayload> {
        let request_id = Uuid::new_v4();
        log::info!(
            "Logo {} with model: {} [req:{}]",
            operation,
            self.model,
            request_id
        );
        let mut timer = Timer::new(&format!("logo {} [req:{}]", operation, request_id));

        let response = self
            .transport
            .generate_content(&self.model, &request)
            .await
            .map_err(|e| {
                log::error!(
                    "Error calling Gemini API for logo {} [req:{}]: {}",
                    operation,
                    request_id,
                    e
                );
                LogoError::Upstream {
                    operation,
                    source: e,
                }
            })?;

        match response.first_image() {
            Some(image) => {
                log::debug!(
                    "Received {} image, {} base64 characters [req:{}]",
                    image.mime_type(),
                    image.bytes().len(),
                    request_id
                );
                timer.succeed();
                Ok(image)
            }
            None => {
                log::error!(
                    "No image data in Gemini response for logo {} [req:{}] (finish reason: {}, text: {})",
                    operation,
                    request_id,
                    response.finish_reason().unwrap_or("none"),
                    response.first_text().unwrap_or("none")
                );
                Err(LogoError::NoImageData { operation })
            }
        }
    }
}

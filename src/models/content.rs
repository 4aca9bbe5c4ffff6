//! Request and response bodies of the Gemini `generateContent` operation.
//!
//! Every response field is optional so that any JSON object deserializes;
//! whether it holds an image is decided by [`GenerateContentResponse::first_image`].

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use super::image::ImagePayload;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    #[serde(rename_all = "camelCase")]
    InlineData { inline_data: InlineData },
    Text { text: String },
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn image(image: &ImagePayload) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type().to_string(),
                data: image.bytes().to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Modality {
    Text,
    Image,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<Modality>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// One content block with the given parts, restricted to image output.
    pub fn image_only(parts: Vec<Part>) -> Self {
        Self {
            contents: vec![Content { parts }],
            generation_config: GenerationConfig {
                response_modalities: vec![Modality::Image],
            },
        }
    }

    pub fn parts(&self) -> &[Part] {
        self.contents
            .first()
            .map(|c| c.parts.as_slice())
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseInlineData {
    pub data: Option<String>,
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    pub text: Option<String>,
    #[serde(alias = "inline_data")]
    pub inline_data: Option<ResponseInlineData>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseContent {
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<ResponseContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
}

impl GenerateContentResponse {
    fn first_part(&self) -> Option<&ResponsePart> {
        self.candidates
            .as_ref()?
            .first()?
            .content
            .as_ref()?
            .parts
            .as_ref()?
            .first()
    }

    /// Image carried by the first part of the first candidate, if any.
    pub fn first_image(&self) -> Option<ImagePayload> {
        let inline = self.first_part()?.inline_data.as_ref()?;
        let data = inline
            .data
            .as_deref()
            .filter(|d| !d.is_empty() && STANDARD.decode(d).is_ok())?;
        let mime_type = inline
            .mime_type
            .as_deref()
            .filter(|m| m.starts_with("image/"))?;
        Some(ImagePayload::new(data, mime_type))
    }

    /// Text from the first part, useful when the model declined to draw.
    pub fn first_text(&self) -> Option<&str> {
        self.first_part()?.text.as_deref()
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .as_ref()?
            .first()?
            .finish_reason
            .as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_wire_format() {
        let prior = ImagePayload::new("QUJD", "image/png");
        let request =
            GenerateContentRequest::image_only(vec![Part::image(&prior), Part::text("more blue")]);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [{
                    "parts": [
                        { "inlineData": { "mimeType": "image/png", "data": "QUJD" } },
                        { "text": "more blue" }
                    ]
                }],
                "generationConfig": { "responseModalities": ["IMAGE"] }
            })
        );
    }

    #[test]
    fn test_first_image() {
        let response = parse(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{ "inlineData": { "data": "QUJD", "mimeType": "image/png" } }]
                },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "totalTokenCount": 12 }
        }));
        assert_eq!(
            response.first_image(),
            Some(ImagePayload::new("QUJD", "image/png"))
        );
        assert_eq!(response.finish_reason(), Some("STOP"));
    }

    #[test]
    fn test_snake_case_inline_data() {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [
                { "inline_data": { "data": "QUJD", "mimeType": "image/jpeg" } }
            ] } }]
        }));
        assert_eq!(response.first_image().unwrap().mime_type(), "image/jpeg");
    }

    #[test]
    fn test_missing_levels_yield_none() {
        let shapes = [
            json!({}),
            json!({ "candidates": [] }),
            json!({ "candidates": [{}] }),
            json!({ "candidates": [{ "content": {} }] }),
            json!({ "candidates": [{ "content": { "parts": [] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "text": "I can't draw that" }] } }] }),
            json!({ "candidates": [{ "content": { "parts": [{ "inlineData": {} }] } }] }),
            json!({ "candidates": [{ "content": { "parts": [
                { "inlineData": { "data": "", "mimeType": "image/png" } }
            ] } }] }),
            json!({ "candidates": [{ "content": { "parts": [
                { "inlineData": { "data": "QUJD", "mimeType": "application/pdf" } }
            ] } }] }),
        ];
        for shape in shapes {
            let response = parse(shape.clone());
            assert!(response.first_image().is_none(), "shape: {}", shape);
        }
    }

    #[test]
    fn test_undecodable_data_is_not_an_image() {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [
                { "inlineData": { "data": "not base64!", "mimeType": "image/png" } }
            ] } }]
        }));
        assert!(response.first_image().is_none());
    }

    #[test]
    fn test_only_first_part_is_considered() {
        let response = parse(json!({
            "candidates": [{ "content": { "parts": [
                { "text": "Here is your logo" },
                { "inlineData": { "data": "QUJD", "mimeType": "image/png" } }
            ] } }]
        }));
        assert!(response.first_image().is_none());
        assert_eq!(response.first_text(), Some("Here is your logo"));
    }
}

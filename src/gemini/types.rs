use crate::image::ImagePart;
use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use super::SYSTEM_INSTRUCTION;

/// One inference request: model, question, and exactly one image. The fixed
/// instruction is attached at construction time. The image field is
/// non-optional, so a request without an image cannot be built.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub model: String,
    pub question: String,
    pub instruction: String,
    pub image: ImagePart,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, question: impl Into<String>, image: ImagePart) -> Self {
        Self {
            model: model.into(),
            question: question.into(),
            instruction: SYSTEM_INSTRUCTION.to_string(),
            image,
        }
    }

    /// Wire body with the fixed part ordering: instruction, image, question.
    pub fn to_body(&self) -> GenerateContentBody {
        GenerateContentBody {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::Text {
                        text: self.instruction.clone(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: self.image.mime_type.clone(),
                            data: general_purpose::STANDARD.encode(&self.image.data),
                        },
                    },
                    Part::Text {
                        text: self.question.clone(),
                    },
                ],
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentBody {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineData {
    #[serde(rename = "mimeType")]
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let text: String = candidate
            .content
            .parts
            .iter()
            .filter_map(|part| match part {
                Part::Text { text } => Some(text.as_str()),
                Part::InlineData { .. } => None,
            })
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }
}

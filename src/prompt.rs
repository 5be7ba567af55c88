//! Prompt assembly and reading decoding.
//!
//! Every operation sends a system instruction that pins the output to a
//! single JSON object for the target struct, so responses decode straight
//! into typed readings. Models occasionally wrap JSON in a markdown code
//! fence anyway; decoding strips one before giving up.

use base64::Engine;
use serde::de::DeserializeOwned;

use crate::{Error, Result};

/// One completion request: instruction, question, optional inline image.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub system: String,
    pub user: String,
    image_base64: Option<String>,
}

impl Prompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            image_base64: None,
        }
    }

    /// Attach an image, shipped base64 inline in the user message.
    pub fn with_image(mut self, bytes: &[u8]) -> Self {
        self.image_base64 = Some(base64::engine::general_purpose::STANDARD.encode(bytes));
        self
    }

    /// Chat-completion `messages` array for the wire body.
    pub(crate) fn to_messages(&self) -> serde_json::Value {
        let user_content = match &self.image_base64 {
            None => serde_json::json!(self.user),
            Some(image) => serde_json::json!([
                { "type": "text", "text": self.user },
                {
                    "type": "image_url",
                    "image_url": { "url": format!("data:image/jpeg;base64,{}", image) }
                }
            ]),
        };
        serde_json::json!([
            { "role": "system", "content": self.system },
            { "role": "user", "content": user_content }
        ])
    }
}

/// System instruction shared by all reading operations.
pub(crate) fn json_system_instruction(role: &str, shape: &str) -> String {
    format!(
        "You are {}. Respond with a single JSON object of the form {} \
         and no other text. Do not wrap the JSON in markdown.",
        role, shape
    )
}

/// Decode a model response into a typed reading.
///
/// Decode failures are terminal: retrying cannot fix malformed output.
pub(crate) fn decode_reading<T: DeserializeOwned>(raw: &str) -> Result<T> {
    let trimmed = strip_code_fence(raw.trim());
    serde_json::from_str(trimmed)
        .map_err(|e| Error::decode(format!("reading payload did not match its schema: {}", e)))
}

/// Remove a surrounding markdown code fence (```json ... ```), if any.
fn strip_code_fence(raw: &str) -> &str {
    let Some(rest) = raw.strip_prefix("```") else {
        return raw;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

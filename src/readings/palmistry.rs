//! Palmistry readings from palm photographs.

use sha2::{Digest, Sha256};

use crate::cache::{CacheKey, ContentKind};
use crate::client::AstrocastClient;
use crate::prompt::{json_system_instruction, Prompt};
use crate::types::reading::PalmReading;
use crate::{Error, Result};

const SHAPE: &str = r#"{"life_line": string, "head_line": string, "heart_line": string, "fate_line": string, "summary": string}"#;

impl AstrocastClient {
    /// Read a palm photograph (JPEG bytes, shipped base64 inline).
    ///
    /// The cache identity is the digest of the raw bytes: the same photo
    /// always yields the same reading within the TTL window.
    pub async fn palm_reading(&self, image: &[u8]) -> Result<PalmReading> {
        if image.is_empty() {
            return Err(Error::Validation("palm image is empty".to_string()));
        }

        let kind = ContentKind::Palmistry;
        let digest: String = Sha256::digest(image)
            .iter()
            .map(|b| format!("{:02x}", b))
            .collect();
        let key = CacheKey::compose(kind.name())
            .field("image_sha256", digest)
            .field("language", self.language())
            .finish();

        let system = json_system_instruction("a palmist", SHAPE);
        let user = format!(
            "Read the palm in the attached photograph. Describe the life, head, \
             heart and fate lines. Answer in {}.",
            self.language()
        );
        let prompt = Prompt::new(system, user).with_image(image);

        self.cached_fetch(kind, key, prompt).await
    }
}

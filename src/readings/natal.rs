//! Natal chart interpretation.

use crate::cache::{CacheKey, ContentKind};
use crate::client::AstrocastClient;
use crate::prompt::{json_system_instruction, Prompt};
use crate::types::birth::BirthData;
use crate::types::reading::NatalChart;
use crate::Result;

const SHAPE: &str = r#"{"ascendant": string, "sun_sign": string, "moon_sign": string, "houses": [{"house": number, "sign": string, "planets": [string], "theme": string}], "summary": string}"#;

impl AstrocastClient {
    /// Interpret the natal chart for one birth record.
    pub async fn natal_chart(&self, birth: &BirthData) -> Result<NatalChart> {
        let kind = ContentKind::NatalChart;
        let key = CacheKey::compose(kind.name())
            .field("subject", birth.fingerprint())
            .field("language", self.language())
            .finish();

        let time = birth
            .time
            .map(|t| format!(" at {}", t))
            .unwrap_or_default();
        let system = json_system_instruction("an expert natal astrologer", SHAPE);
        let user = format!(
            "Interpret the natal chart of {} born on {}{} in {}. \
             Cover all twelve houses. Answer in {}.",
            birth.name,
            birth.date,
            time,
            birth.place,
            self.language()
        );

        self.cached_fetch(kind, key, Prompt::new(system, user))
            .await
    }
}

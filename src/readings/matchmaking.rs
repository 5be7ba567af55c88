//! Compatibility readings for two subjects.

use crate::cache::{CacheKey, ContentKind};
use crate::client::AstrocastClient;
use crate::prompt::{json_system_instruction, Prompt};
use crate::types::birth::BirthData;
use crate::types::reading::CompatibilityReport;
use crate::Result;

const SHAPE: &str = r#"{"score": number, "strengths": [string], "challenges": [string], "summary": string}"#;

impl AstrocastClient {
    /// Compatibility reading for two birth records.
    ///
    /// Compatibility is symmetric: the subject fingerprints are sorted
    /// before key derivation, so argument order cannot split the cache.
    pub async fn matchmaking(
        &self,
        first: &BirthData,
        second: &BirthData,
    ) -> Result<CompatibilityReport> {
        let kind = ContentKind::Matchmaking;

        let mut pair = [first.fingerprint(), second.fingerprint()];
        pair.sort();
        let [subject_a, subject_b] = pair;
        let key = CacheKey::compose(kind.name())
            .field("subject_a", subject_a)
            .field("subject_b", subject_b)
            .field("language", self.language())
            .finish();

        let system = json_system_instruction("a matchmaking astrologer", SHAPE);
        let user = format!(
            "Assess the compatibility of {} (born {}, {} {}) and {} (born {}, {} {}). \
             Score from 0 to 100. Answer in {}.",
            first.name,
            first.date,
            first.sign(),
            first.place,
            second.name,
            second.date,
            second.sign(),
            second.place,
            self.language()
        );

        self.cached_fetch(kind, key, Prompt::new(system, user))
            .await
    }
}

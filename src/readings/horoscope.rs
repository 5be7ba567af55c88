//! Horoscope readings by sign and timeframe.

use chrono::Utc;

use crate::cache::CacheKey;
use crate::client::AstrocastClient;
use crate::prompt::{json_system_instruction, Prompt};
use crate::types::birth::ZodiacSign;
use crate::types::reading::{HoroscopeReading, Timeframe};
use crate::Result;

const SHAPE: &str = r#"{"summary": string, "love": string, "career": string, "health": string, "lucky_number": number, "lucky_color": string}"#;

impl AstrocastClient {
    /// Fetch the horoscope for a sign and timeframe.
    ///
    /// Daily keys embed the current UTC date, so a new day is a new
    /// reading even while the previous one is still inside its TTL.
    pub async fn horoscope(
        &self,
        sign: ZodiacSign,
        timeframe: Timeframe,
    ) -> Result<HoroscopeReading> {
        let kind = timeframe.content_kind();

        let mut composer = CacheKey::compose(kind.name())
            .field("sign", sign)
            .field("language", self.language());
        if timeframe == Timeframe::Daily {
            composer = composer.field("date", Utc::now().date_naive());
        }
        let key = composer.finish();

        let system = json_system_instruction("an experienced astrologer", SHAPE);
        let user = format!(
            "Write the {} horoscope for {}. Answer in {}.",
            timeframe,
            sign,
            self.language()
        );

        self.cached_fetch(kind, key, Prompt::new(system, user))
            .await
    }
}

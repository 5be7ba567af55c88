//! Birth-place geocoding.

use crate::cache::{normalize_text, CacheKey, ContentKind};
use crate::client::AstrocastClient;
use crate::prompt::{json_system_instruction, Prompt};
use crate::types::reading::GeoLocation;
use crate::{Error, Result};

const SHAPE: &str = r#"{"latitude": number, "longitude": number, "resolved_name": string, "timezone": string}"#;

impl AstrocastClient {
    /// Resolve a birth-place string to coordinates.
    ///
    /// The query is normalized (case and whitespace) before key
    /// derivation, and results never expire: geography does not move.
    pub async fn geocode(&self, place: &str) -> Result<GeoLocation> {
        let query = normalize_text(place);
        if query.is_empty() {
            return Err(Error::Validation("place query is empty".to_string()));
        }

        let kind = ContentKind::Geocode;
        let key = CacheKey::compose(kind.name())
            .field("query", &query)
            .finish();

        let system = json_system_instruction("a precise geocoding service", SHAPE);
        let user = format!(
            "Geocode the place {:?}. Give decimal latitude and longitude, the \
             canonical place name, and its IANA timezone.",
            query
        );

        self.cached_fetch(kind, key, Prompt::new(system, user))
            .await
    }
}

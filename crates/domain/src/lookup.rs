use crate::identifier::Identifier;
use serde::{Deserialize, Serialize};

pub const CACHE_KEY_PREFIX: &str = "email:";

/// Default lifetime of a cached lookup.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

const COMPROMISED_MESSAGE: &str = "This email appears in our database of compromised accounts. \
     We recommend changing your password immediately.";
const CLEAN_MESSAGE: &str = "This email does not appear in our database of compromised accounts.";

/// Cache key for an identifier. Must stay byte-for-byte stable so warm
/// caches from earlier deployments remain readable.
pub fn cache_key(identifier: &Identifier) -> String {
    format!("{CACHE_KEY_PREFIX}{identifier}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub identifier: Identifier,
    pub compromised: bool,
    pub source: Option<String>,
    pub served_from_cache: bool,
}

impl LookupResult {
    pub fn from_store(identifier: Identifier, compromised: bool, source: Option<String>) -> Self {
        Self {
            identifier,
            compromised,
            source,
            served_from_cache: false,
        }
    }

    pub fn message(&self) -> &'static str {
        if self.compromised {
            COMPROMISED_MESSAGE
        } else {
            CLEAN_MESSAGE
        }
    }
}

/// Wire form of a cached lookup.
///
/// Stored as a JSON object `{"identifier", "compromised", "source"}`. The
/// `served_from_cache` flag is a property of the read path and is never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedLookup {
    pub identifier: Identifier,
    pub compromised: bool,
    #[serde(default)]
    pub source: Option<String>,
}

impl CachedLookup {
    pub fn encode(result: &LookupResult) -> Result<String, serde_json::Error> {
        serde_json::to_string(&CachedLookup {
            identifier: result.identifier.clone(),
            compromised: result.compromised,
            source: result.source.clone(),
        })
    }

    pub fn decode(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn into_cache_hit(self) -> LookupResult {
        LookupResult {
            identifier: self.identifier,
            compromised: self.compromised,
            source: self.source,
            served_from_cache: true,
        }
    }
}

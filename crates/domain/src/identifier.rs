use crate::errors::ValidationError;
use crate::validators::is_valid_address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A canonical email address: trimmed, lower-cased and syntax-checked.
///
/// The only constructor is [`Identifier::parse`], so every value in
/// circulation already satisfies the address predicate. The same string is
/// used for the cache key and the record store query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(Arc<str>);

impl Identifier {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty);
        }
        let lowered = trimmed.to_lowercase();
        if !is_valid_address(&lowered) {
            return Err(ValidationError::Malformed);
        }
        Ok(Self(Arc::from(lowered)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Canonicalizes raw caller input into an [`Identifier`].
pub fn normalize(raw: &str) -> Result<Identifier, ValidationError> {
    Identifier::parse(raw)
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Identifier::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0.to_string()
    }
}

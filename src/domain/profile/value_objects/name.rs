use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::profile::errors::{NameError, NameKind};

// ============================================================================
// Person Names
// ============================================================================

pub const NAME_MAX_LENGTH: usize = 100;

// ASCII letters, Latin-1 letters (without × and ÷), Latin Extended-A/B and
// Latin Extended Additional, plus space, hyphen and apostrophe.
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z\x{00C0}-\x{00D6}\x{00D8}-\x{00F6}\x{00F8}-\x{024F}\x{1E00}-\x{1EFF} '\-]+$")
        .expect("Valid name pattern should always compile")
});

fn validate_name(raw: &str, kind: NameKind) -> Result<String, NameError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty(kind));
    }
    if trimmed.chars().count() > NAME_MAX_LENGTH {
        return Err(NameError::TooLong { kind, max: NAME_MAX_LENGTH });
    }
    if !NAME_PATTERN.is_match(trimmed) {
        return Err(NameError::InvalidCharacters(kind));
    }
    Ok(trimmed.to_string())
}

macro_rules! name_value_object {
    ($name:ident, $kind:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub fn create(raw: &str) -> Result<Self, NameError> {
                validate_name(raw, $kind).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = NameError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::create(value)
            }
        }

        impl TryFrom<String> for $name {
            type Error = NameError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::create(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

name_value_object!(FirstName, NameKind::First, "A person's given name");
name_value_object!(LastName, NameKind::Last, "A person's family name");

// ============================================================================
// Unit Tests
// ============================================================================
